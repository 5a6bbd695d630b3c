//! Analysis Service API
//!
//! HTTP bindings for the external analysis engine.

pub mod client;

pub use client::{AnalysisApiClient, ApiClientConfig};
