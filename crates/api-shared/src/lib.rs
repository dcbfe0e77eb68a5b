//! # API Shared
//!
//! Shared utilities and definitions for the OrgDesk API.
//!
//! Contains:
//! - Wire request/response types (`types` module)
//! - Shared services like `HealthService`
//! - Authentication utilities (scope header parsing)
//!
//! Used by the server binary and the CLI for common functionality.

pub mod auth;
pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
