//! Project on-disk paths.
//!
//! Each project lives inside its owning organization:
//! ```text
//! organizations/<org-slug>/projects/<project-slug>/project.json
//! ```

use std::path::{Path, PathBuf};

use crate::paths::organization::OrganizationPaths;
use orgdesk_types::Slug;

/// Projects subdirectory within an organization.
#[derive(Debug, Clone, Copy)]
pub struct ProjectsDir;

impl ProjectsDir {
    pub const NAME: &'static str = "projects";
}

/// Project settings file.
#[derive(Debug, Clone, Copy)]
pub struct ProjectFile;

impl ProjectFile {
    pub const NAME: &'static str = "project.json";
}

/// Relative on-disk paths for a single project.
///
/// The directory name carries the project slug, so a transfer between
/// organizations is a plain directory move.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    relative_root: PathBuf,
}

impl ProjectPaths {
    /// Creates the relative path set for a project within an organization.
    pub fn new(org: &Slug, project: &Slug) -> Self {
        Self {
            relative_root: OrganizationPaths::new(org)
                .projects_dir()
                .join(project.as_str()),
        }
    }

    /// Returns the relative path to the project directory.
    pub fn dir(&self) -> &Path {
        &self.relative_root
    }

    /// Returns the relative path to `project.json`.
    pub fn project_json(&self) -> PathBuf {
        self.relative_root.join(ProjectFile::NAME)
    }
}
