//! Leave request collection access over the key-value store.
//!
//! The two review transitions are the only mutations a stored request can
//! undergo. Both fire only while the record is still pending, so a request
//! is reviewed exactly once.

use chrono::{DateTime, Utc};

use crate::models::{LeaveRequest, NewLeaveRequest};
use crate::storage::{keys, KeyValueStore};
use crate::utils::id::allocate_id;

/// Seam for leave request record access.
pub trait LeaveRequestRepositoryTrait {
    /// Returns all request records; an uninitialized store reads as empty.
    fn find_all(&self, store: &dyn KeyValueStore) -> Vec<LeaveRequest>;

    /// Finds a request by id.
    fn find_by_id(&self, store: &dyn KeyValueStore, id: &str) -> Option<LeaveRequest>;

    /// Returns the requests owned by one employee, in stored order.
    fn find_by_employee(&self, store: &dyn KeyValueStore, employee_id: &str)
        -> Vec<LeaveRequest>;

    /// Appends a pending record with a fresh id and `created_at` stamp.
    fn create(
        &self,
        store: &dyn KeyValueStore,
        payload: NewLeaveRequest,
        days_requested: u32,
    ) -> LeaveRequest;

    /// Approves a pending request, stamping reviewer and timestamp.
    /// `None` means not found or already processed.
    fn approve(
        &self,
        store: &dyn KeyValueStore,
        id: &str,
        reviewer: &str,
        timestamp: DateTime<Utc>,
    ) -> Option<LeaveRequest>;

    /// Rejects a pending request, stamping reviewer, timestamp, and reason.
    /// `None` means not found or already processed.
    fn reject(
        &self,
        store: &dyn KeyValueStore,
        id: &str,
        reviewer: &str,
        reason: &str,
        timestamp: DateTime<Utc>,
    ) -> Option<LeaveRequest>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LeaveRequestRepository;

impl LeaveRequestRepository {
    pub fn new() -> Self {
        Self
    }
}

fn load(store: &dyn KeyValueStore) -> Vec<LeaveRequest> {
    let Some(raw) = store.get(keys::REQUESTS) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(requests) => requests,
        Err(err) => {
            tracing::warn!(error = %err, "request collection is corrupt, treating as empty");
            Vec::new()
        }
    }
}

fn save(store: &dyn KeyValueStore, requests: &[LeaveRequest]) {
    match serde_json::to_string(requests) {
        Ok(raw) => store.set(keys::REQUESTS, &raw),
        Err(err) => tracing::error!(error = %err, "failed to serialize request collection"),
    }
}

impl LeaveRequestRepositoryTrait for LeaveRequestRepository {
    fn find_all(&self, store: &dyn KeyValueStore) -> Vec<LeaveRequest> {
        load(store)
    }

    fn find_by_id(&self, store: &dyn KeyValueStore, id: &str) -> Option<LeaveRequest> {
        load(store).into_iter().find(|r| r.id == id)
    }

    fn find_by_employee(
        &self,
        store: &dyn KeyValueStore,
        employee_id: &str,
    ) -> Vec<LeaveRequest> {
        load(store)
            .into_iter()
            .filter(|r| r.employee_id == employee_id)
            .collect()
    }

    fn create(
        &self,
        store: &dyn KeyValueStore,
        payload: NewLeaveRequest,
        days_requested: u32,
    ) -> LeaveRequest {
        let mut requests = load(store);
        let now = Utc::now();
        let id = allocate_id(now, |candidate| requests.iter().any(|r| r.id == candidate));
        let request = LeaveRequest::new(id, payload, days_requested, now);
        requests.push(request.clone());
        save(store, &requests);
        request
    }

    fn approve(
        &self,
        store: &dyn KeyValueStore,
        id: &str,
        reviewer: &str,
        timestamp: DateTime<Utc>,
    ) -> Option<LeaveRequest> {
        let mut requests = load(store);
        let request = requests.iter_mut().find(|r| r.id == id && r.is_pending())?;
        request.approve(reviewer.to_string(), timestamp);
        let approved = request.clone();
        save(store, &requests);
        Some(approved)
    }

    fn reject(
        &self,
        store: &dyn KeyValueStore,
        id: &str,
        reviewer: &str,
        reason: &str,
        timestamp: DateTime<Utc>,
    ) -> Option<LeaveRequest> {
        let mut requests = load(store);
        let request = requests.iter_mut().find(|r| r.id == id && r.is_pending())?;
        request.reject(reviewer.to_string(), reason.to_string(), timestamp);
        let rejected = request.clone();
        save(store, &requests);
        Some(rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveType, RequestStatus};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn payload(employee_id: &str) -> NewLeaveRequest {
        NewLeaveRequest {
            employee_id: employee_id.into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            leave_type: LeaveType::Annual,
            reason: "Family trip".into(),
        }
    }

    #[test]
    fn create_appends_a_pending_record() {
        let store = MemoryStore::new();
        let repo = LeaveRequestRepository::new();
        let created = repo.create(&store, payload("e1"), 3);

        assert!(created.is_pending());
        assert_eq!(created.days_requested, 3);

        let all = repo.find_all(&store);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
    }

    #[test]
    fn find_by_employee_filters_on_owner() {
        let store = MemoryStore::new();
        let repo = LeaveRequestRepository::new();
        repo.create(&store, payload("e1"), 3);
        repo.create(&store, payload("e2"), 3);
        repo.create(&store, payload("e1"), 3);

        let mine = repo.find_by_employee(&store, "e1");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.employee_id == "e1"));
    }

    #[test]
    fn approve_stamps_and_persists_the_transition() {
        let store = MemoryStore::new();
        let repo = LeaveRequestRepository::new();
        let created = repo.create(&store, payload("e1"), 3);
        let when = Utc::now();

        let approved = repo.approve(&store, &created.id, "Admin", when).unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);
        assert_eq!(approved.approved_by.as_deref(), Some("Admin"));
        assert_eq!(approved.approved_at, Some(when));

        let stored = repo.find_by_id(&store, &created.id).unwrap();
        assert_eq!(stored.status, RequestStatus::Approved);
    }

    #[test]
    fn reject_stamps_reason_alongside_reviewer() {
        let store = MemoryStore::new();
        let repo = LeaveRequestRepository::new();
        let created = repo.create(&store, payload("e1"), 3);
        let when = Utc::now();

        let rejected = repo
            .reject(&store, &created.id, "Admin", "Coverage gap", when)
            .unwrap();
        assert_eq!(rejected.status, RequestStatus::Rejected);
        assert_eq!(rejected.approved_by.as_deref(), Some("Admin"));
        assert_eq!(rejected.approved_at, Some(when));
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Coverage gap"));
    }

    #[test]
    fn transitions_refuse_records_that_are_not_pending() {
        let store = MemoryStore::new();
        let repo = LeaveRequestRepository::new();
        let created = repo.create(&store, payload("e1"), 3);
        let when = Utc::now();

        repo.approve(&store, &created.id, "Admin", when).unwrap();

        assert!(repo.approve(&store, &created.id, "Admin", when).is_none());
        assert!(repo
            .reject(&store, &created.id, "Admin", "late", when)
            .is_none());

        // The stored record keeps its first outcome.
        let stored = repo.find_by_id(&store, &created.id).unwrap();
        assert_eq!(stored.status, RequestStatus::Approved);
        assert!(stored.rejection_reason.is_none());
    }

    #[test]
    fn transitions_miss_unknown_ids() {
        let store = MemoryStore::new();
        let repo = LeaveRequestRepository::new();
        assert!(repo.approve(&store, "nope", "Admin", Utc::now()).is_none());
        assert!(repo
            .reject(&store, "nope", "Admin", "reason", Utc::now())
            .is_none());
    }
}
