//! Persisted login session and route access decisions.
//!
//! The session lives in two storage slots so it survives reloads. The
//! presentation layer restores it at startup and asks [`Session::is_allowed`]
//! before rendering a guarded route; redirecting is its job, deciding is
//! ours.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::storage::{keys, KeyValueStore};

/// Roles a signed-in session can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    /// Returns the canonical snake_case representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    /// Parses a stored role string. Unknown values answer `None` so a
    /// garbled slot reads as signed out instead of failing restore.
    fn parse(raw: &str) -> Option<Role> {
        match raw {
            "employee" => Some(Role::Employee),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Role::parse(&s)
            .ok_or_else(|| serde::de::Error::unknown_variant(&s, &["employee", "admin"]))
    }
}

/// Snapshot of the signed-in user.
///
/// `employee_id` is present exactly when the role is `Employee`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
    employee_id: Option<String>,
}

impl Session {
    /// Restores the session from its storage slots. Missing or garbled
    /// slots read as signed out.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let role = store.get(keys::USER_ROLE).as_deref().and_then(Role::parse);
        let employee_id = match role {
            Some(Role::Employee) => store.get(keys::CURRENT_EMPLOYEE).filter(|id| !id.is_empty()),
            _ => None,
        };
        Session { role, employee_id }
    }

    /// Signs the session in and persists it. Admin logins clear the employee
    /// slot so a stale id from an earlier employee session cannot leak
    /// through.
    pub fn login(&mut self, store: &dyn KeyValueStore, role: Role, employee_id: Option<&str>) {
        store.set(keys::USER_ROLE, role.as_str());
        match (role, employee_id) {
            (Role::Employee, Some(id)) => {
                store.set(keys::CURRENT_EMPLOYEE, id);
                self.employee_id = Some(id.to_string());
            }
            _ => {
                store.remove(keys::CURRENT_EMPLOYEE);
                self.employee_id = None;
            }
        }
        self.role = Some(role);
    }

    /// Signs the session out and clears every session slot, including the
    /// obsolete admin flag older stores still carry.
    pub fn logout(&mut self, store: &dyn KeyValueStore) {
        store.remove(keys::USER_ROLE);
        store.remove(keys::CURRENT_EMPLOYEE);
        store.remove(keys::LEGACY_IS_ADMIN);
        self.role = None;
        self.employee_id = None;
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(Role::Admin))
    }

    /// Route guard decision: `true` when the session holds one of the
    /// allowed roles.
    pub fn is_allowed(&self, allowed: &[Role]) -> bool {
        match self.role {
            Some(role) => allowed.contains(&role),
            None => false,
        }
    }
}
