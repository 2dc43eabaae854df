//! Data models shared by the record store and the flow services.

pub mod balance;
pub mod employee;
pub mod leave_request;

pub use balance::*;
pub use employee::*;
pub use leave_request::*;
