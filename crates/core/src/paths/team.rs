//! Team on-disk paths.
//!
//! Each team lives inside its owning organization:
//! ```text
//! organizations/<org-slug>/teams/<team-slug>/team.json
//! ```

use std::path::{Path, PathBuf};

use crate::paths::organization::OrganizationPaths;
use orgdesk_types::Slug;

/// Teams subdirectory within an organization.
#[derive(Debug, Clone, Copy)]
pub struct TeamsDir;

impl TeamsDir {
    pub const NAME: &'static str = "teams";
}

/// Team settings file.
#[derive(Debug, Clone, Copy)]
pub struct TeamFile;

impl TeamFile {
    pub const NAME: &'static str = "team.json";
}

/// Relative on-disk paths for a single team.
#[derive(Debug, Clone)]
pub struct TeamPaths {
    relative_root: PathBuf,
}

impl TeamPaths {
    /// Creates the relative path set for a team within an organization.
    pub fn new(org: &Slug, team: &Slug) -> Self {
        Self {
            relative_root: OrganizationPaths::new(org).teams_dir().join(team.as_str()),
        }
    }

    /// Returns the relative path to the team directory.
    pub fn dir(&self) -> &Path {
        &self.relative_root
    }

    /// Returns the relative path to `team.json`.
    pub fn team_json(&self) -> PathBuf {
        self.relative_root.join(TeamFile::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_relative_paths() {
        let org = Slug::new("acme").expect("valid slug");
        let team = Slug::new("platform").expect("valid slug");
        let paths = TeamPaths::new(&org, &team);

        assert_eq!(paths.dir(), Path::new("organizations/acme/teams/platform"));
        assert_eq!(
            paths.team_json(),
            PathBuf::from("organizations/acme/teams/platform/team.json")
        );
    }
}
