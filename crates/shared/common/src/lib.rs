//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for HTTP and GraphQL
//! - Environment-driven configuration helpers

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
