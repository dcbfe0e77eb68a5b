//! Team settings management.
//!
//! Teams are stored inside their owning organization:
//!
//! ```text
//! organizations/<org-slug>/teams/<team-slug>/team.json
//! ```

use crate::config::CoreConfig;
use crate::paths::organization::OrganizationPaths;
use crate::paths::team::TeamPaths;
use crate::repositories::helpers::{read_json, write_json};
use crate::{SettingsError, SettingsResult};
use chrono::{DateTime, Utc};
use orgdesk_types::{NonEmptyText, Slug};
use std::fs;
use std::sync::Arc;
use uuid::Uuid;

/// Stored settings for a single team.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TeamSettings {
    pub id: Uuid,
    pub slug: Slug,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A partial update to team settings.
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub name: Option<NonEmptyText>,
}

/// Service for managing team settings within organizations.
#[derive(Clone, Debug)]
pub struct TeamService {
    cfg: Arc<CoreConfig>,
}

impl TeamService {
    /// Creates a new team service.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    fn organization_exists(&self, org: &Slug) -> bool {
        self.cfg
            .data_dir()
            .join(OrganizationPaths::new(org).organization_json())
            .is_file()
    }

    /// Creates a new team inside an organization.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if the organization does
    /// not exist, `SettingsError::TeamExists` if the slug is already taken
    /// within it, or an IO/serialization error variant on storage failure.
    pub fn create(&self, org: &Slug, slug: Slug, name: NonEmptyText) -> SettingsResult<TeamSettings> {
        if !self.organization_exists(org) {
            return Err(SettingsError::OrganizationNotFound(org.clone()));
        }

        let paths = TeamPaths::new(org, &slug);
        let file = self.cfg.data_dir().join(paths.team_json());
        if file.exists() {
            return Err(SettingsError::TeamExists(slug));
        }

        let dir = self.cfg.data_dir().join(paths.dir());
        fs::create_dir_all(&dir).map_err(SettingsError::StorageDirCreation)?;

        let settings = TeamSettings {
            id: Uuid::new_v4(),
            slug,
            name: name.as_str().to_owned(),
            created_at: Utc::now(),
        };

        write_json(&file, &settings)?;
        Ok(settings)
    }

    /// Loads the settings of an existing team.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if the organization does
    /// not exist, or `SettingsError::TeamNotFound` if the team does not.
    pub fn get(&self, org: &Slug, team: &Slug) -> SettingsResult<TeamSettings> {
        if !self.organization_exists(org) {
            return Err(SettingsError::OrganizationNotFound(org.clone()));
        }

        let file = self.cfg.data_dir().join(TeamPaths::new(org, team).team_json());
        if !file.is_file() {
            return Err(SettingsError::TeamNotFound(team.clone()));
        }

        read_json(&file)
    }

    /// Applies a partial update to a team's settings.
    pub fn update(&self, org: &Slug, team: &Slug, update: TeamUpdate) -> SettingsResult<TeamSettings> {
        let mut settings = self.get(org, team)?;

        if let Some(name) = update.name {
            settings.name = name.as_str().to_owned();
        }

        let file = self.cfg.data_dir().join(TeamPaths::new(org, team).team_json());
        write_json(&file, &settings)?;

        Ok(settings)
    }

    /// Removes a team and everything stored under it.
    ///
    /// Danger-zone operation; callers must check `team:admin` first.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::TeamNotFound` if the team does not exist, or
    /// `SettingsError::DirRemoval` if the directory cannot be deleted.
    pub fn remove(&self, org: &Slug, team: &Slug) -> SettingsResult<()> {
        self.get(org, team)?;

        let dir = self.cfg.data_dir().join(TeamPaths::new(org, team).dir());
        fs::remove_dir_all(&dir).map_err(SettingsError::DirRemoval)
    }

    /// Lists all teams of an organization.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if the organization does
    /// not exist.
    pub fn list(&self, org: &Slug) -> SettingsResult<Vec<TeamSettings>> {
        if !self.organization_exists(org) {
            return Err(SettingsError::OrganizationNotFound(org.clone()));
        }

        let teams_dir = self
            .cfg
            .data_dir()
            .join(OrganizationPaths::new(org).teams_dir());
        let mut teams = Vec::new();

        let entries = match fs::read_dir(&teams_dir) {
            Ok(it) => it,
            Err(_) => return Ok(teams),
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let file = path.join(crate::paths::team::TeamFile::NAME);
            if !file.is_file() {
                continue;
            }

            match read_json::<TeamSettings>(&file) {
                Ok(settings) => teams.push(settings),
                Err(e) => {
                    tracing::warn!("skipping unreadable team {}: {e}", file.display());
                }
            }
        }

        teams.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::organizations::OrganizationService;

    struct Fixture {
        _tmp: tempfile::TempDir,
        orgs: OrganizationService,
        teams: TeamService,
    }

    fn fixture() -> Fixture {
        let tmp = tempfile::tempdir().expect("tempdir");
        let cfg = Arc::new(CoreConfig::new(tmp.path().to_path_buf()).expect("valid config"));
        Fixture {
            _tmp: tmp,
            orgs: OrganizationService::new(cfg.clone()),
            teams: TeamService::new(cfg),
        }
    }

    fn slug(s: &str) -> Slug {
        Slug::new(s).expect("valid slug")
    }

    fn name(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).expect("valid name")
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();

        let created = f
            .teams
            .create(&slug("acme"), slug("platform"), name("Platform"))
            .unwrap();
        let loaded = f.teams.get(&slug("acme"), &slug("platform")).unwrap();
        assert_eq!(loaded.id, created.id);
        assert_eq!(loaded.name, "Platform");
    }

    #[test]
    fn test_create_requires_existing_organization() {
        let f = fixture();
        let err = f
            .teams
            .create(&slug("ghost"), slug("platform"), name("Platform"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::OrganizationNotFound(_)));
    }

    #[test]
    fn test_create_rejects_duplicate_slug() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.teams
            .create(&slug("acme"), slug("platform"), name("Platform"))
            .unwrap();

        let err = f
            .teams
            .create(&slug("acme"), slug("platform"), name("Other"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::TeamExists(_)));
    }

    #[test]
    fn test_update_renames_team() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.teams
            .create(&slug("acme"), slug("platform"), name("Platform"))
            .unwrap();

        let updated = f
            .teams
            .update(
                &slug("acme"),
                &slug("platform"),
                TeamUpdate {
                    name: Some(name("Platform Engineering")),
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Platform Engineering");
    }

    #[test]
    fn test_remove_deletes_team() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.teams
            .create(&slug("acme"), slug("platform"), name("Platform"))
            .unwrap();

        f.teams.remove(&slug("acme"), &slug("platform")).unwrap();

        let err = f.teams.get(&slug("acme"), &slug("platform")).unwrap_err();
        assert!(matches!(err, SettingsError::TeamNotFound(_)));
    }

    #[test]
    fn test_list_teams_sorted_by_slug() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.teams
            .create(&slug("acme"), slug("web"), name("Web"))
            .unwrap();
        f.teams
            .create(&slug("acme"), slug("platform"), name("Platform"))
            .unwrap();

        let slugs: Vec<String> = f
            .teams
            .list(&slug("acme"))
            .unwrap()
            .into_iter()
            .map(|t| t.slug.to_string())
            .collect();
        assert_eq!(slugs, vec!["platform", "web"]);
    }
}
