//! String key-value storage behind the record store.
//!
//! Models the browser localStorage contract: string slots, reads that answer
//! `None` for anything missing, and writes that degrade to a logged no-op
//! when the backend is unavailable. Callers never see a storage error.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod file;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Slot names, shared with stores written by earlier releases.
pub mod keys {
    /// JSON array of employee records.
    pub const EMPLOYEES: &str = "leave_system_employees";
    /// JSON array of leave request records.
    pub const REQUESTS: &str = "leave_system_requests";
    /// Admin login email, written once by the credential seed.
    pub const ADMIN_EMAIL: &str = "admin_email";
    /// Argon2 hash of the admin password.
    pub const ADMIN_PASSWORD: &str = "admin_password";
    /// Role of the signed-in session.
    pub const USER_ROLE: &str = "userRole";
    /// Employee id of the signed-in session, employee role only.
    pub const CURRENT_EMPLOYEE: &str = "currentEmployee";
    /// Obsolete flag still present in old stores; cleared on logout.
    pub const LEGACY_IS_ADMIN: &str = "isAdmin";
}

/// Storage backend seam.
///
/// Designed to be mockable using mockall. Use `MockKeyValueStore` in tests
/// to assert on slot traffic.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes `key` if present.
    fn remove(&self, key: &str);
}
