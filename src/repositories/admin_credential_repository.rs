//! Admin credential slots: seeded once, verified on login.

use crate::storage::{keys, KeyValueStore};
use crate::utils::password;

/// Seam for the two admin credential slots.
pub trait AdminCredentialRepositoryTrait {
    /// Writes each credential slot only if it is currently unset. Running
    /// the seed again never overwrites an existing admin.
    fn seed(&self, store: &dyn KeyValueStore, email: &str, password_hash: &str);

    /// Unconditionally writes the password slot. Reserved for the first-run
    /// login flow, which runs before any password exists.
    fn initialize_password(&self, store: &dyn KeyValueStore, password_hash: &str);

    fn has_password(&self, store: &dyn KeyValueStore) -> bool;

    fn email(&self, store: &dyn KeyValueStore) -> Option<String>;

    /// Verifies a candidate password against the stored hash. `false` when
    /// no hash is stored.
    fn verify_password(&self, store: &dyn KeyValueStore, candidate: &str) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AdminCredentialRepository;

impl AdminCredentialRepository {
    pub fn new() -> Self {
        Self
    }
}

impl AdminCredentialRepositoryTrait for AdminCredentialRepository {
    fn seed(&self, store: &dyn KeyValueStore, email: &str, password_hash: &str) {
        if store.get(keys::ADMIN_EMAIL).is_none() {
            store.set(keys::ADMIN_EMAIL, email);
        }
        if store.get(keys::ADMIN_PASSWORD).is_none() {
            store.set(keys::ADMIN_PASSWORD, password_hash);
        }
    }

    fn initialize_password(&self, store: &dyn KeyValueStore, password_hash: &str) {
        store.set(keys::ADMIN_PASSWORD, password_hash);
    }

    fn has_password(&self, store: &dyn KeyValueStore) -> bool {
        store.get(keys::ADMIN_PASSWORD).is_some()
    }

    fn email(&self, store: &dyn KeyValueStore) -> Option<String> {
        store.get(keys::ADMIN_EMAIL)
    }

    fn verify_password(&self, store: &dyn KeyValueStore, candidate: &str) -> bool {
        let Some(hash) = store.get(keys::ADMIN_PASSWORD) else {
            return false;
        };
        match password::verify_password(candidate, &hash) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(error = %err, "stored admin password hash is unverifiable");
                false
            }
        }
    }
}
