//! Models for leave requests and their review lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::rules;

/// Stored leave request.
///
/// Serialized with the camelCase field names already present in stores
/// written by earlier releases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Unique identifier derived from the creation instant (unix millis).
    pub id: String,
    /// Owning employee id. A convention, not a constraint: deleting the
    /// employee leaves the request behind with a dangling id.
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: String,
    pub status: RequestStatus,
    /// Inclusive day count, fixed at submission and never recomputed.
    pub days_requested: u32,
    pub created_at: DateTime<Utc>,
    /// Review timestamp, stamped for approvals and rejections alike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// Reviewer identity, stamped for approvals and rejections alike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    /// Draws from no tracked allotment and is excluded from balances.
    Other,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    /// Parsed for compatibility with older stores; no operation produces it.
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

/// Payload for submitting a new leave request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    #[validate(custom(function = "rules::validate_leave_reason"))]
    pub reason: String,
}

impl LeaveRequest {
    /// Constructs a pending record from a submission payload. The id comes
    /// from the repository, which owns collision handling.
    pub fn new(
        id: String,
        payload: NewLeaveRequest,
        days_requested: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        LeaveRequest {
            id,
            employee_id: payload.employee_id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            leave_type: payload.leave_type,
            reason: payload.reason,
            status: RequestStatus::Pending,
            days_requested,
            created_at,
            approved_at: None,
            approved_by: None,
            rejection_reason: None,
        }
    }

    pub fn approve(&mut self, reviewer: String, timestamp: DateTime<Utc>) {
        self.status = RequestStatus::Approved;
        self.approved_by = Some(reviewer);
        self.approved_at = Some(timestamp);
    }

    pub fn reject(&mut self, reviewer: String, reason: String, timestamp: DateTime<Utc>) {
        self.status = RequestStatus::Rejected;
        self.approved_by = Some(reviewer);
        self.approved_at = Some(timestamp);
        self.rejection_reason = Some(reason);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, RequestStatus::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.status, RequestStatus::Approved)
    }
}
