//! Employee collection access over the key-value store.

use chrono::Utc;

use crate::models::{Employee, EmployeeUpdate, NewEmployee};
use crate::storage::{keys, KeyValueStore};
use crate::utils::id::allocate_id;
use crate::utils::password;

/// Seam for employee record access, usable to swap in an alternative
/// backing collection.
pub trait EmployeeRepositoryTrait {
    /// Returns all employee records; an uninitialized store reads as empty.
    fn find_all(&self, store: &dyn KeyValueStore) -> Vec<Employee>;

    /// Finds an employee by id.
    fn find_by_id(&self, store: &dyn KeyValueStore, id: &str) -> Option<Employee>;

    /// Creates a record, allocating a fresh id and stamping `created_at`.
    /// Status defaults to approved unless the payload says otherwise.
    fn create(&self, store: &dyn KeyValueStore, payload: NewEmployee) -> Employee;

    /// Applies an update payload to the matching record.
    fn update(
        &self,
        store: &dyn KeyValueStore,
        id: &str,
        update: EmployeeUpdate,
    ) -> Option<Employee>;

    /// Marks the account approved. The only path out of `pending`.
    fn approve_account(&self, store: &dyn KeyValueStore, id: &str) -> Option<Employee>;

    /// Removes the record. Requests owned by the employee are left behind.
    fn delete(&self, store: &dyn KeyValueStore, id: &str) -> bool;

    /// Checks login credentials against the collection and returns the id of
    /// the first matching record.
    ///
    /// The identifier is trimmed, lowercased, and compared against both name
    /// and email case-insensitively. Only approved accounts with a stored
    /// password hash can match.
    fn verify_credentials(
        &self,
        store: &dyn KeyValueStore,
        identifier: &str,
        password: &str,
    ) -> Option<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmployeeRepository;

impl EmployeeRepository {
    pub fn new() -> Self {
        Self
    }
}

fn load(store: &dyn KeyValueStore) -> Vec<Employee> {
    let Some(raw) = store.get(keys::EMPLOYEES) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(employees) => employees,
        Err(err) => {
            tracing::warn!(error = %err, "employee collection is corrupt, treating as empty");
            Vec::new()
        }
    }
}

fn save(store: &dyn KeyValueStore, employees: &[Employee]) {
    match serde_json::to_string(employees) {
        Ok(raw) => store.set(keys::EMPLOYEES, &raw),
        Err(err) => tracing::error!(error = %err, "failed to serialize employee collection"),
    }
}

impl EmployeeRepositoryTrait for EmployeeRepository {
    fn find_all(&self, store: &dyn KeyValueStore) -> Vec<Employee> {
        load(store)
    }

    fn find_by_id(&self, store: &dyn KeyValueStore, id: &str) -> Option<Employee> {
        load(store).into_iter().find(|e| e.id == id)
    }

    fn create(&self, store: &dyn KeyValueStore, payload: NewEmployee) -> Employee {
        let mut employees = load(store);
        let now = Utc::now();
        let id = allocate_id(now, |candidate| employees.iter().any(|e| e.id == candidate));
        let employee = Employee::new(id, payload, now);
        employees.push(employee.clone());
        save(store, &employees);
        employee
    }

    fn update(
        &self,
        store: &dyn KeyValueStore,
        id: &str,
        update: EmployeeUpdate,
    ) -> Option<Employee> {
        let mut employees = load(store);
        let employee = employees.iter_mut().find(|e| e.id == id)?;
        employee.apply_update(update);
        let updated = employee.clone();
        save(store, &employees);
        Some(updated)
    }

    fn approve_account(&self, store: &dyn KeyValueStore, id: &str) -> Option<Employee> {
        let mut employees = load(store);
        let employee = employees.iter_mut().find(|e| e.id == id)?;
        employee.approve_account();
        let approved = employee.clone();
        save(store, &employees);
        Some(approved)
    }

    fn delete(&self, store: &dyn KeyValueStore, id: &str) -> bool {
        let mut employees = load(store);
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return false;
        }
        save(store, &employees);
        true
    }

    fn verify_credentials(
        &self,
        store: &dyn KeyValueStore,
        identifier: &str,
        password: &str,
    ) -> Option<String> {
        let needle = identifier.trim().to_lowercase();
        load(store).into_iter().find_map(|employee| {
            if !employee.matches_identifier(&needle) || !employee.is_approved() {
                return None;
            }
            let hash = employee.password_hash.as_deref()?;
            match password::verify_password(password, hash) {
                Ok(true) => Some(employee.id.clone()),
                Ok(false) => None,
                Err(err) => {
                    tracing::warn!(
                        employee_id = %employee.id,
                        error = %err,
                        "stored password hash is unverifiable"
                    );
                    None
                }
            }
        })
    }
}
