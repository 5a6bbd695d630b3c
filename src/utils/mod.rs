//! Utilities
//!
//! Common utilities used throughout the client library.

pub mod error;
