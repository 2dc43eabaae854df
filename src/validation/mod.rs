//! Unified validation for flow payloads.
//!
//! This module provides reusable validation rules applied at the form
//! boundary, before anything touches the record store.

pub mod rules;

pub use validator::Validate;
