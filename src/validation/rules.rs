//! Common validation rules shared across flow payloads.

use chrono::NaiveDate;
use validator::ValidationError;

/// Longest accepted free-text reason, in bytes.
pub const MAX_REASON_LENGTH: usize = 500;

/// Validates that a leave window is ordered.
///
/// Requirements:
/// - end date on or after the start date
pub fn validate_leave_window(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::new("end_before_start"));
    }
    Ok(())
}

/// Validates the free-text reason attached to a submission.
///
/// Requirements:
/// - non-empty after trimming
/// - at most [`MAX_REASON_LENGTH`] bytes
pub fn validate_leave_reason(reason: &str) -> Result<(), ValidationError> {
    if reason.trim().is_empty() {
        return Err(ValidationError::new("reason_required"));
    }
    if reason.len() > MAX_REASON_LENGTH {
        return Err(ValidationError::new("reason_too_long"));
    }
    Ok(())
}

/// Validates the reason a reviewer supplies when rejecting a request.
pub fn validate_rejection_reason(reason: &str) -> Result<(), ValidationError> {
    if reason.trim().is_empty() {
        return Err(ValidationError::new("rejection_reason_required"));
    }
    if reason.len() > MAX_REASON_LENGTH {
        return Err(ValidationError::new("rejection_reason_too_long"));
    }
    Ok(())
}

/// Validates a required display name.
pub fn validate_required_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    Ok(())
}
