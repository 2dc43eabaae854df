//! Review flow for pending leave requests.
//!
//! Both outcomes stamp the reviewer and the review timestamp; rejection
//! additionally requires a reason. A request that is not pending anymore
//! reads as already processed.

use chrono::Utc;

use crate::error::AppError;
use crate::models::LeaveRequest;
use crate::repositories::{LeaveRequestRepository, LeaveRequestRepositoryTrait};
use crate::storage::KeyValueStore;
use crate::validation::rules;

pub fn approve_request(
    store: &dyn KeyValueStore,
    id: &str,
    reviewer: &str,
) -> Result<LeaveRequest, AppError> {
    LeaveRequestRepository::new()
        .approve(store, id, reviewer, Utc::now())
        .ok_or_else(|| AppError::NotFound("Request not found or already processed".to_string()))
}

pub fn reject_request(
    store: &dyn KeyValueStore,
    id: &str,
    reviewer: &str,
    reason: &str,
) -> Result<LeaveRequest, AppError> {
    rules::validate_rejection_reason(reason)
        .map_err(|e| AppError::Validation(vec![format!("rejection_reason: {}", e.code)]))?;

    LeaveRequestRepository::new()
        .reject(store, id, reviewer, reason, Utc::now())
        .ok_or_else(|| AppError::NotFound("Request not found or already processed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveType, NewLeaveRequest, RequestStatus};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn submitted(store: &MemoryStore) -> LeaveRequest {
        let payload = NewLeaveRequest {
            employee_id: "e1".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            leave_type: LeaveType::Annual,
            reason: "Family trip".into(),
        };
        LeaveRequestRepository::new().create(store, payload, 3)
    }

    #[test]
    fn approve_stamps_reviewer_and_review_time() {
        let store = MemoryStore::new();
        let request = submitted(&store);

        let approved = approve_request(&store, &request.id, "Admin").unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);
        assert_eq!(approved.approved_by.as_deref(), Some("Admin"));
        assert!(approved.approved_at.is_some());
    }

    #[test]
    fn reject_requires_a_reason_and_leaves_the_record_pending_without_one() {
        let store = MemoryStore::new();
        let request = submitted(&store);

        let err = reject_request(&store, &request.id, "Admin", "   ").unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let stored = LeaveRequestRepository::new()
            .find_by_id(&store, &request.id)
            .unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);
        assert!(stored.approved_by.is_none());
        assert!(stored.rejection_reason.is_none());
    }

    #[test]
    fn reject_with_reason_stamps_all_three_fields() {
        let store = MemoryStore::new();
        let request = submitted(&store);

        let rejected = reject_request(&store, &request.id, "Admin", "Coverage gap").unwrap();
        assert_eq!(rejected.status, RequestStatus::Rejected);
        assert_eq!(rejected.approved_by.as_deref(), Some("Admin"));
        assert!(rejected.approved_at.is_some());
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Coverage gap"));
    }

    #[test]
    fn second_review_reads_as_already_processed() {
        let store = MemoryStore::new();
        let request = submitted(&store);
        approve_request(&store, &request.id, "Admin").unwrap();

        let err = approve_request(&store, &request.id, "Admin").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");

        let err = reject_request(&store, &request.id, "Admin", "late").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn review_of_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = approve_request(&store, "nope", "Admin").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }
}
