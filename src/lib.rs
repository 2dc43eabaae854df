//! Leave management core.
//!
//! Employees submit time-off requests, admins review them, and balances and
//! report data are derived from the resulting records. Everything persists
//! through a string key-value store (`storage::KeyValueStore`), so the crate
//! runs against an in-memory map, a JSON profile file, or the browser's
//! localStorage without the flows knowing the difference.
//!
//! The presentation layer is an external consumer: it restores a
//! [`session::Session`] at startup, calls the flow functions in [`services`],
//! and renders whatever they return.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;
pub mod validation;

pub use config::Config;
pub use error::AppError;
pub use session::{Role, Session};
pub use storage::KeyValueStore;
