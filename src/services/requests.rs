//! Leave request submission flow.

use validator::Validate;

use crate::error::AppError;
use crate::models::{LeaveRequest, NewLeaveRequest};
use crate::repositories::{LeaveRequestRepository, LeaveRequestRepositoryTrait};
use crate::storage::KeyValueStore;
use crate::utils::time;
use crate::validation::rules;

/// Validates a submission and appends it as a pending record.
///
/// The inclusive day count is computed here, once, and stored on the record;
/// it is never recomputed on read.
pub fn submit_request(
    store: &dyn KeyValueStore,
    payload: NewLeaveRequest,
) -> Result<LeaveRequest, AppError> {
    payload.validate()?;
    rules::validate_leave_window(payload.start_date, payload.end_date)
        .map_err(|e| AppError::Validation(vec![format!("end_date: {}", e.code)]))?;

    let days_requested = time::days_between(payload.start_date, payload.end_date);
    Ok(LeaveRequestRepository::new().create(store, payload, days_requested))
}
