//! # OrgDesk Core
//!
//! Core business logic for the OrgDesk settings backend.
//!
//! This crate contains pure data operations and file/folder management:
//! - Organization, project and team settings with JSON storage
//! - Danger-zone operations (project removal/transfer, team removal)
//! - Legacy settings path translation for the migration-period fallback links
//! - Resolved permission scopes and checks
//!
//! **No API concerns**: Authentication headers, HTTP servers, or service
//! interfaces belong in `api-shared` and the server binary.

pub mod access;
pub mod config;
pub mod constants;
pub mod error;
pub mod legacy;
pub mod paths;
pub mod repositories;

pub use access::{AccessScopes, Scope};
pub use config::CoreConfig;
pub use constants::DEFAULT_DATA_DIR;
pub use error::{SettingsError, SettingsResult};
pub use legacy::{legacy_route, LegacyRoute};
pub use repositories::organizations::{
    OrganizationService, OrganizationSettings, OrganizationUpdate,
};
pub use repositories::projects::{ProjectService, ProjectSettings, ProjectUpdate};
pub use repositories::teams::{TeamService, TeamSettings, TeamUpdate};

// Re-exported so API crates don't need a direct orgdesk-types dependency for
// the common newtypes.
pub use orgdesk_types::{NonEmptyText, Slug};
