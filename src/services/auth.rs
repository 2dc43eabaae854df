//! Login, registration, and admin credential seeding.

use validator::Validate;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Employee, EmployeeStatus, NewEmployee, RegistrationForm};
use crate::repositories::{
    AdminCredentialRepository, AdminCredentialRepositoryTrait, EmployeeRepository,
    EmployeeRepositoryTrait,
};
use crate::session::{Role, Session};
use crate::storage::KeyValueStore;
use crate::utils::{password, time};

/// Signs an employee in by name or email.
pub fn login_employee(
    store: &dyn KeyValueStore,
    identifier: &str,
    password: &str,
) -> Result<Session, AppError> {
    if identifier.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please enter your name or email".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(AppError::BadRequest("Please enter your password".to_string()));
    }

    let employee_id = EmployeeRepository::new()
        .verify_credentials(store, identifier, password)
        .ok_or_else(|| {
            AppError::Unauthorized(
                "Invalid name/email or password, or your account is not yet approved".to_string(),
            )
        })?;

    let mut session = Session::restore(store);
    session.login(store, Role::Employee, Some(&employee_id));
    Ok(session)
}

/// Signs the admin in.
///
/// On the very first login, before any admin password exists, the supplied
/// password becomes the admin password. Afterwards the password is verified
/// against the stored hash, and when an admin email is on record the entered
/// email must match it case-insensitively.
pub fn login_admin(
    store: &dyn KeyValueStore,
    email: &str,
    password: &str,
) -> Result<Session, AppError> {
    if email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please enter your name or email".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(AppError::BadRequest("Please enter your password".to_string()));
    }

    let credentials = AdminCredentialRepository::new();
    if !credentials.has_password(store) {
        let hash = password::hash_password(password)?;
        credentials.initialize_password(store, &hash);
    } else {
        if !credentials.verify_password(store, password) {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }
        if let Some(stored) = credentials.email(store) {
            if !stored.eq_ignore_ascii_case(email.trim()) {
                return Err(AppError::Unauthorized("Invalid email".to_string()));
            }
        }
    }

    let mut session = Session::restore(store);
    session.login(store, Role::Admin, None);
    Ok(session)
}

/// Registers a new employee account.
///
/// The record starts `pending` with zero allotments; an admin later approves
/// the account and assigns real allotments.
pub fn register(store: &dyn KeyValueStore, form: RegistrationForm) -> Result<Employee, AppError> {
    form.validate()?;
    let password_hash = password::hash_password(&form.password)?;

    let payload = NewEmployee {
        name: form.name,
        email: form.email,
        department: form.department,
        position: form.position,
        join_date: form.join_date.unwrap_or_else(time::today),
        annual_leave: 0,
        sick_leave: 0,
        password_hash: Some(password_hash),
        status: Some(EmployeeStatus::Pending),
    };
    Ok(EmployeeRepository::new().create(store, payload))
}

/// Seeds the admin credentials from configuration. Idempotent: slots that
/// already hold a value are left alone, so re-running at every startup is
/// safe.
pub fn seed_admin(store: &dyn KeyValueStore, config: &Config) -> Result<(), AppError> {
    let credentials = AdminCredentialRepository::new();
    if credentials.has_password(store) && credentials.email(store).is_some() {
        return Ok(());
    }
    let hash = password::hash_password(&config.admin_seed_password)?;
    credentials.seed(store, &config.admin_seed_email, &hash);
    Ok(())
}
