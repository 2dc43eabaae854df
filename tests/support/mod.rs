#![allow(dead_code)]
use chrono::NaiveDate;
use leavekeeper::config::Config;
use leavekeeper::models::{LeaveType, NewEmployee, NewLeaveRequest};
use leavekeeper::storage::MemoryStore;
use leavekeeper::utils::password::hash_password;
use std::path::PathBuf;

pub fn store() -> MemoryStore {
    MemoryStore::new()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn hashed(password: &str) -> String {
    hash_password(password).expect("hash test password")
}

pub fn employee_payload(name: &str, email: &str) -> NewEmployee {
    NewEmployee {
        name: name.into(),
        email: email.into(),
        department: "Engineering".into(),
        position: "Developer".into(),
        join_date: date(2023, 4, 1),
        annual_leave: 14,
        sick_leave: 7,
        password_hash: None,
        status: None,
    }
}

pub fn request_payload(employee_id: &str, start: NaiveDate, end: NaiveDate) -> NewLeaveRequest {
    NewLeaveRequest {
        employee_id: employee_id.into(),
        start_date: start,
        end_date: end,
        leave_type: LeaveType::Annual,
        reason: "Family trip".into(),
    }
}

pub fn test_config() -> Config {
    Config {
        store_path: PathBuf::from("unused"),
        admin_seed_email: "admin@example.com".into(),
        admin_seed_password: "seed-password".into(),
        admin_display_name: "Admin".into(),
    }
}
