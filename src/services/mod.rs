//! Services
//!
//! Business logic for the client library.

pub mod api;
pub mod session;
