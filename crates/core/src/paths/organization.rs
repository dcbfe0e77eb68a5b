//! Organization on-disk paths.
//!
//! Each organization is stored under:
//! ```text
//! organizations/
//!     <org-slug>/
//!         organization.json
//!         projects/
//!         teams/
//! ```
//!
//! The paths returned here are relative to the data directory and must be
//! resolved against it before filesystem access.

use std::path::{Path, PathBuf};

use crate::paths::project::ProjectsDir;
use crate::paths::team::TeamsDir;
use orgdesk_types::Slug;

/// Top-level organizations directory.
///
/// This is a fixed path invariant relative to the data directory root.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationsDir;

impl OrganizationsDir {
    pub const NAME: &'static str = "organizations";
}

/// Organization settings file.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationFile;

impl OrganizationFile {
    pub const NAME: &'static str = "organization.json";
}

/// Relative on-disk paths for a single organization.
#[derive(Debug, Clone)]
pub struct OrganizationPaths {
    relative_root: PathBuf,
}

impl OrganizationPaths {
    /// Creates the relative path set for the organization with the given slug.
    pub fn new(slug: &Slug) -> Self {
        Self {
            relative_root: PathBuf::from(OrganizationsDir::NAME).join(slug.as_str()),
        }
    }

    /// Returns the relative path to the organization directory.
    pub fn dir(&self) -> &Path {
        &self.relative_root
    }

    /// Returns the relative path to `organization.json`.
    pub fn organization_json(&self) -> PathBuf {
        self.relative_root.join(OrganizationFile::NAME)
    }

    /// Returns the relative path to the organization's projects directory.
    pub fn projects_dir(&self) -> PathBuf {
        self.relative_root.join(ProjectsDir::NAME)
    }

    /// Returns the relative path to the organization's teams directory.
    pub fn teams_dir(&self) -> PathBuf {
        self.relative_root.join(TeamsDir::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_constants() {
        assert_eq!(OrganizationsDir::NAME, "organizations");
        assert_eq!(OrganizationFile::NAME, "organization.json");
    }

    #[test]
    fn test_organization_relative_paths() {
        let slug = Slug::new("acme").expect("valid slug");
        let paths = OrganizationPaths::new(&slug);

        assert_eq!(paths.dir(), Path::new("organizations/acme"));
        assert_eq!(
            paths.organization_json(),
            PathBuf::from("organizations/acme/organization.json")
        );
        assert_eq!(
            paths.projects_dir(),
            PathBuf::from("organizations/acme/projects")
        );
        assert_eq!(paths.teams_dir(), PathBuf::from("organizations/acme/teams"));
    }

    #[test]
    fn test_paths_are_relative_not_absolute() {
        let slug = Slug::new("acme").expect("valid slug");
        let paths = OrganizationPaths::new(&slug);

        assert!(!paths.dir().to_str().unwrap().starts_with('/'));
        assert!(!paths.organization_json().to_str().unwrap().starts_with('/'));
    }
}
