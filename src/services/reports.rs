//! Aggregations behind the admin dashboard and the report pages.
//!
//! Everything here is a pure derivation over records snapshots; callers load
//! the collections once and reuse them across several derivations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Employee, LeaveRequest, RequestStatus};
use crate::services::balance;

/// Request counts for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn request_stats(requests: &[LeaveRequest]) -> RequestStats {
    let mut stats = RequestStats {
        total: requests.len(),
        pending: 0,
        approved: 0,
        rejected: 0,
    };
    for request in requests {
        match request.status {
            RequestStatus::Pending => stats.pending += 1,
            RequestStatus::Approved => stats.approved += 1,
            RequestStatus::Rejected => stats.rejected += 1,
            // counted in total only
            RequestStatus::Cancelled => {}
        }
    }
    stats
}

/// One row of the per-employee annual leave summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLeaveSummary {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub used: u32,
    pub remaining: i64,
}

/// Annual leave summary for every employee, in stored order.
pub fn annual_summary(
    employees: &[Employee],
    requests: &[LeaveRequest],
) -> Vec<EmployeeLeaveSummary> {
    employees
        .iter()
        .map(|employee| {
            let bucket = balance::balance_of(employee, requests).annual;
            EmployeeLeaveSummary {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                department: employee.department.clone(),
                used: bucket.used,
                remaining: bucket.remaining,
            }
        })
        .collect()
}

/// Approved leave days in one calendar month (`month` is 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLeave {
    pub month: u32,
    pub days: u32,
}

/// Twelve buckets of approved days. A request lands in the month its window
/// starts in, regardless of where it ends.
pub fn monthly_totals(requests: &[LeaveRequest]) -> Vec<MonthlyLeave> {
    let mut days = [0u32; 12];
    for request in requests.iter().filter(|r| r.is_approved()) {
        let index = (request.start_date.month() - 1) as usize;
        days[index] += request.days_requested;
    }
    days.iter()
        .enumerate()
        .map(|(index, &days)| MonthlyLeave {
            month: index as u32 + 1,
            days,
        })
        .collect()
}

/// Day totals for one department plus the summed remaining annual balance of
/// its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub approved_days: u32,
    pub pending_days: u32,
    pub rejected_days: u32,
    pub remaining_annual: i64,
}

/// Per-department rollup, sorted by department name. Requests whose owner
/// was deleted belong to no department and are not counted.
pub fn department_summary(
    employees: &[Employee],
    requests: &[LeaveRequest],
) -> Vec<DepartmentSummary> {
    let mut by_department: BTreeMap<&str, DepartmentSummary> = BTreeMap::new();
    for employee in employees {
        let entry = by_department
            .entry(employee.department.as_str())
            .or_insert_with(|| DepartmentSummary {
                department: employee.department.clone(),
                approved_days: 0,
                pending_days: 0,
                rejected_days: 0,
                remaining_annual: 0,
            });
        entry.remaining_annual += balance::balance_of(employee, requests).annual.remaining;
        for request in requests.iter().filter(|r| r.employee_id == employee.id) {
            match request.status {
                RequestStatus::Approved => entry.approved_days += request.days_requested,
                RequestStatus::Pending => entry.pending_days += request.days_requested,
                RequestStatus::Rejected => entry.rejected_days += request.days_requested,
                RequestStatus::Cancelled => {}
            }
        }
    }
    by_department.into_values().collect()
}

/// One row of the most-absent ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceEntry {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub days: u32,
}

/// Employees ranked by total approved leave days, most absent first, cut to
/// `limit`. Zero-day employees are included; ties rank by name.
pub fn absence_ranking(
    employees: &[Employee],
    requests: &[LeaveRequest],
    limit: usize,
) -> Vec<AbsenceEntry> {
    let mut entries: Vec<AbsenceEntry> = employees
        .iter()
        .map(|employee| {
            let days = requests
                .iter()
                .filter(|r| r.employee_id == employee.id && r.is_approved())
                .map(|r| r.days_requested)
                .sum();
            AbsenceEntry {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                department: employee.department.clone(),
                days,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.days.cmp(&a.days).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(limit);
    entries
}

/// Dashboard variant of [`absence_ranking`]: employees with no approved
/// days are dropped before the cut.
pub fn top_absences(
    employees: &[Employee],
    requests: &[LeaveRequest],
    limit: usize,
) -> Vec<AbsenceEntry> {
    let mut entries = absence_ranking(employees, requests, usize::MAX);
    entries.retain(|entry| entry.days > 0);
    entries.truncate(limit);
    entries
}

/// Dashboard filter over the request list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    /// Exact status match.
    pub status: Option<RequestStatus>,
    /// Case-insensitive substring of the owning employee's name.
    pub employee_name: Option<String>,
    /// Keep windows starting on or after this date.
    pub from: Option<NaiveDate>,
    /// Keep windows ending on or before this date.
    pub to: Option<NaiveDate>,
}

pub fn filter_requests(
    employees: &[Employee],
    requests: &[LeaveRequest],
    filter: &RequestFilter,
) -> Vec<LeaveRequest> {
    let needle = filter
        .employee_name
        .as_deref()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty());

    requests
        .iter()
        .filter(|request| {
            if let Some(status) = filter.status {
                if request.status != status {
                    return false;
                }
            }
            if let Some(needle) = needle.as_deref() {
                let owner = employees.iter().find(|e| e.id == request.employee_id);
                match owner {
                    Some(employee) if employee.name.to_lowercase().contains(needle) => {}
                    _ => return false,
                }
            }
            if let Some(from) = filter.from {
                if request.start_date < from {
                    return false;
                }
            }
            if let Some(to) = filter.to {
                if request.end_date > to {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Directory search: case-insensitive substring across name, email, and
/// department. A blank term returns everyone.
pub fn search_employees(employees: &[Employee], term: &str) -> Vec<Employee> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.email.to_lowercase().contains(&needle)
                || e.department.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
