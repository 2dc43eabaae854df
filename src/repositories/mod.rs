//! Record store repositories over the key-value backend.
//!
//! Collections are JSON array blobs in single slots. Every mutation is
//! read-modify-write over the whole collection; concurrent writers are not
//! coordinated and the last write wins. Missing records answer `None` or
//! `false`, never an error.

pub mod admin_credential_repository;
pub mod employee_repository;
pub mod leave_request_repository;

pub use admin_credential_repository::*;
pub use employee_repository::*;
pub use leave_request_repository::*;
