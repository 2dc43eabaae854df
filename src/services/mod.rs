//! Flow services the presentation layer calls directly.

pub mod auth;
pub mod balance;
pub mod reports;
pub mod requests;
pub mod review;
