//! Leave balance derivation from approved requests.

use crate::models::{Employee, LeaveBalance, LeaveBucket, LeaveRequest, LeaveType};
use crate::repositories::{
    EmployeeRepository, EmployeeRepositoryTrait, LeaveRequestRepository,
    LeaveRequestRepositoryTrait,
};
use crate::storage::KeyValueStore;

/// Computes one employee's balance from a records snapshot. `None` when the
/// employee does not exist.
pub fn balance_for(
    employees: &[Employee],
    requests: &[LeaveRequest],
    employee_id: &str,
) -> Option<LeaveBalance> {
    employees
        .iter()
        .find(|e| e.id == employee_id)
        .map(|employee| balance_of(employee, requests))
}

/// Computes the balance of a known employee record. Only approved requests
/// count; pending and rejected ones consume nothing.
pub fn balance_of(employee: &Employee, requests: &[LeaveRequest]) -> LeaveBalance {
    let mut used_annual = 0;
    let mut used_sick = 0;
    for request in requests
        .iter()
        .filter(|r| r.employee_id == employee.id && r.is_approved())
    {
        match request.leave_type {
            LeaveType::Annual => used_annual += request.days_requested,
            LeaveType::Sick => used_sick += request.days_requested,
            // draws from no tracked allotment
            LeaveType::Other => {}
        }
    }
    LeaveBalance {
        annual: LeaveBucket::new(employee.annual_leave, used_annual),
        sick: LeaveBucket::new(employee.sick_leave, used_sick),
    }
}

/// Store-backed convenience. Recomputed from the full collections on every
/// call; nothing is cached.
pub fn employee_balance(store: &dyn KeyValueStore, employee_id: &str) -> Option<LeaveBalance> {
    let employees = EmployeeRepository::new().find_all(store);
    let requests = LeaveRequestRepository::new().find_all(store);
    balance_for(&employees, &requests, employee_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewEmployee, NewLeaveRequest, RequestStatus};
    use chrono::{NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(id: &str, annual: u32, sick: u32) -> Employee {
        Employee::new(
            id.into(),
            NewEmployee {
                name: format!("Employee {}", id),
                email: format!("{}@example.com", id),
                department: "Engineering".into(),
                position: "Developer".into(),
                join_date: date(2023, 4, 1),
                annual_leave: annual,
                sick_leave: sick,
                password_hash: None,
                status: None,
            },
            Utc::now(),
        )
    }

    fn request(
        id: &str,
        employee_id: &str,
        leave_type: LeaveType,
        days: u32,
        status: RequestStatus,
    ) -> LeaveRequest {
        let mut request = LeaveRequest::new(
            id.into(),
            NewLeaveRequest {
                employee_id: employee_id.into(),
                start_date: date(2024, 1, 1),
                end_date: date(2024, 1, 1),
                leave_type,
                reason: "reason".into(),
            },
            days,
            Utc::now(),
        );
        request.status = status;
        request
    }

    #[test]
    fn no_requests_leaves_the_full_allotment() {
        let employees = [employee("e1", 14, 7)];
        let balance = balance_for(&employees, &[], "e1").unwrap();
        assert_eq!(balance.annual.used, 0);
        assert_eq!(balance.annual.remaining, 14);
        assert_eq!(balance.sick.used, 0);
        assert_eq!(balance.sick.remaining, 7);
    }

    #[test]
    fn only_approved_requests_consume_days() {
        let employees = [employee("e1", 14, 7)];
        let requests = [
            request("r1", "e1", LeaveType::Annual, 3, RequestStatus::Approved),
            request("r2", "e1", LeaveType::Annual, 2, RequestStatus::Pending),
            request("r3", "e1", LeaveType::Annual, 4, RequestStatus::Rejected),
            request("r4", "e1", LeaveType::Sick, 1, RequestStatus::Approved),
        ];
        let balance = balance_for(&employees, &requests, "e1").unwrap();
        assert_eq!(balance.annual.used, 3);
        assert_eq!(balance.annual.remaining, 11);
        assert_eq!(balance.sick.used, 1);
        assert_eq!(balance.sick.remaining, 6);
    }

    #[test]
    fn other_leave_is_excluded_from_both_buckets() {
        let employees = [employee("e1", 14, 7)];
        let requests = [request(
            "r1",
            "e1",
            LeaveType::Other,
            5,
            RequestStatus::Approved,
        )];
        let balance = balance_for(&employees, &requests, "e1").unwrap();
        assert_eq!(balance.annual.used, 0);
        assert_eq!(balance.sick.used, 0);
    }

    #[test]
    fn remaining_goes_negative_when_allotment_shrinks_below_usage() {
        let employees = [employee("e1", 2, 7)];
        let requests = [request(
            "r1",
            "e1",
            LeaveType::Annual,
            5,
            RequestStatus::Approved,
        )];
        let balance = balance_for(&employees, &requests, "e1").unwrap();
        assert_eq!(balance.annual.used, 5);
        assert_eq!(balance.annual.remaining, -3);
    }

    #[test]
    fn other_employees_requests_do_not_leak_in() {
        let employees = [employee("e1", 14, 7)];
        let requests = [request(
            "r1",
            "e2",
            LeaveType::Annual,
            5,
            RequestStatus::Approved,
        )];
        let balance = balance_for(&employees, &requests, "e1").unwrap();
        assert_eq!(balance.annual.used, 0);
    }

    #[test]
    fn unknown_employee_answers_none() {
        assert!(balance_for(&[], &[], "ghost").is_none());
    }
}
