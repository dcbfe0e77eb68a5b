//! Constants used throughout the OrgDesk core crate.

/// Default directory for settings data storage when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "orgdesk_data";

/// Default membership role assigned to new organizations.
pub const DEFAULT_MEMBER_ROLE: &str = "member";
