//! Models representing employee records and their account lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

use crate::validation::rules;

/// Stored employee record.
///
/// Serialized with the camelCase field names already present in stores
/// written by earlier releases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier derived from the creation instant (unix millis).
    pub id: String,
    /// Full name, also usable as a login identifier.
    pub name: String,
    /// Email address, also usable as a login identifier.
    pub email: String,
    pub department: String,
    pub position: String,
    /// First day of employment. Stores written by the self-registration
    /// flow of earlier releases hold a full ISO datetime here.
    #[serde(deserialize_with = "deserialize_join_date")]
    pub join_date: NaiveDate,
    /// Annual leave allotment in days.
    pub annual_leave: u32,
    /// Sick leave allotment in days.
    pub sick_leave: u32,
    /// Creation timestamp for auditing.
    pub created_at: DateTime<Utc>,
    /// Argon2 hash of the account password, absent for records that cannot
    /// log in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Account status. Absent on records written before self-registration
    /// existed; such records cannot log in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
}

/// Account lifecycle of a stored employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    /// Self-registered and awaiting admin approval.
    Pending,
    /// Cleared to log in and submit requests.
    Approved,
}

impl EmployeeStatus {
    /// Returns the canonical snake_case representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Pending => "pending",
            EmployeeStatus::Approved => "approved",
        }
    }
}

impl Serialize for EmployeeStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmployeeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(EmployeeStatus::Pending),
            "approved" => Ok(EmployeeStatus::Approved),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["pending", "approved"],
            )),
        }
    }
}

/// Accepts both forms of the stored join date: the plain calendar date
/// written by the admin employee form, and the full ISO datetime written
/// by the self-registration flow of earlier releases. Only the calendar
/// date is kept.
fn deserialize_join_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    raw.parse::<DateTime<Utc>>()
        .map(|instant| instant.date_naive())
        .map_err(|_| serde::de::Error::custom(format!("invalid join date {:?}", raw)))
}

/// Payload for creating a new employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub join_date: NaiveDate,
    pub annual_leave: u32,
    pub sick_leave: u32,
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Defaults to `Approved` when absent; self-registration passes `Pending`.
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
}

/// Payload for updating portions of an existing employee.
///
/// `status` is deliberately not part of this payload; the only status
/// transition goes through the dedicated account approval operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub annual_leave: Option<u32>,
    pub sick_leave: Option<u32>,
    pub password_hash: Option<String>,
}

/// Form submitted by a self-registering employee.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegistrationForm {
    #[validate(custom(function = "rules::validate_required_name"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    /// Defaults to the registration day when absent.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

impl Employee {
    /// Constructs a record from a creation payload. The id comes from the
    /// repository, which owns collision handling.
    pub fn new(id: String, payload: NewEmployee, created_at: DateTime<Utc>) -> Self {
        Employee {
            id,
            name: payload.name,
            email: payload.email,
            department: payload.department,
            position: payload.position,
            join_date: payload.join_date,
            annual_leave: payload.annual_leave,
            sick_leave: payload.sick_leave,
            created_at,
            password_hash: payload.password_hash,
            status: Some(payload.status.unwrap_or(EmployeeStatus::Approved)),
        }
    }

    /// Returns `true` when the account may log in and submit requests.
    pub fn is_approved(&self) -> bool {
        matches!(self.status, Some(EmployeeStatus::Approved))
    }

    /// Marks the account approved. Idempotent.
    pub fn approve_account(&mut self) {
        self.status = Some(EmployeeStatus::Approved);
    }

    /// Applies the enumerated optional fields of an update payload.
    pub fn apply_update(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(join_date) = update.join_date {
            self.join_date = join_date;
        }
        if let Some(annual_leave) = update.annual_leave {
            self.annual_leave = annual_leave;
        }
        if let Some(sick_leave) = update.sick_leave {
            self.sick_leave = sick_leave;
        }
        if let Some(password_hash) = update.password_hash {
            self.password_hash = Some(password_hash);
        }
    }

    /// Returns `true` when `needle` (already trimmed and lowercased) equals
    /// the record's name or email, compared case-insensitively.
    pub fn matches_identifier(&self, needle: &str) -> bool {
        self.name.to_lowercase() == needle || self.email.to_lowercase() == needle
    }
}
