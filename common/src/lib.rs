//! Shared building blocks for the greeter service.
//!
//! Contains configuration loading, the unified error and response types,
//! HTTP middleware, data models and small utilities.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;
pub mod utils;
