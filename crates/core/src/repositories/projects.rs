//! Project settings management.
//!
//! Projects are stored inside their owning organization:
//!
//! ```text
//! organizations/<org-slug>/projects/<project-slug>/project.json
//! ```
//!
//! Besides the form-backed settings operations, this module carries the
//! project danger zone: removal and transfer to another organization. Both
//! are destructive and must be permission-gated by the caller; the service
//! itself only enforces storage invariants.

use crate::config::CoreConfig;
use crate::paths::organization::OrganizationPaths;
use crate::paths::project::ProjectPaths;
use crate::repositories::helpers::{read_json, write_json};
use crate::{SettingsError, SettingsResult};
use chrono::{DateTime, Utc};
use orgdesk_types::{NonEmptyText, Slug};
use std::fs;
use std::sync::Arc;
use uuid::Uuid;

/// Stored settings for a single project.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProjectSettings {
    pub id: Uuid,
    pub slug: Slug,
    pub name: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub default_environment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A partial update to project settings.
///
/// `None` fields are left unchanged; `platform` and `default_environment`
/// replace the stored value when provided.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<NonEmptyText>,
    pub platform: Option<String>,
    pub default_environment: Option<String>,
}

/// Service for managing project settings within organizations.
#[derive(Clone, Debug)]
pub struct ProjectService {
    cfg: Arc<CoreConfig>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    fn organization_exists(&self, org: &Slug) -> bool {
        self.cfg
            .data_dir()
            .join(OrganizationPaths::new(org).organization_json())
            .is_file()
    }

    /// Creates a new project inside an organization.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if the organization does
    /// not exist, `SettingsError::ProjectExists` if the slug is already taken
    /// within it, or an IO/serialization error variant on storage failure.
    pub fn create(
        &self,
        org: &Slug,
        slug: Slug,
        name: NonEmptyText,
    ) -> SettingsResult<ProjectSettings> {
        if !self.organization_exists(org) {
            return Err(SettingsError::OrganizationNotFound(org.clone()));
        }

        let paths = ProjectPaths::new(org, &slug);
        let file = self.cfg.data_dir().join(paths.project_json());
        if file.exists() {
            return Err(SettingsError::ProjectExists(slug));
        }

        let dir = self.cfg.data_dir().join(paths.dir());
        fs::create_dir_all(&dir).map_err(SettingsError::StorageDirCreation)?;

        let settings = ProjectSettings {
            id: Uuid::new_v4(),
            slug,
            name: name.as_str().to_owned(),
            platform: None,
            default_environment: None,
            created_at: Utc::now(),
        };

        write_json(&file, &settings)?;
        Ok(settings)
    }

    /// Loads the settings of an existing project.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if the organization does
    /// not exist, or `SettingsError::ProjectNotFound` if the project does not.
    pub fn get(&self, org: &Slug, project: &Slug) -> SettingsResult<ProjectSettings> {
        if !self.organization_exists(org) {
            return Err(SettingsError::OrganizationNotFound(org.clone()));
        }

        let file = self
            .cfg
            .data_dir()
            .join(ProjectPaths::new(org, project).project_json());
        if !file.is_file() {
            return Err(SettingsError::ProjectNotFound(project.clone()));
        }

        read_json(&file)
    }

    /// Applies a partial update to a project's settings.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus IO/serialization error variants on
    /// storage failure.
    pub fn update(
        &self,
        org: &Slug,
        project: &Slug,
        update: ProjectUpdate,
    ) -> SettingsResult<ProjectSettings> {
        let mut settings = self.get(org, project)?;

        if let Some(name) = update.name {
            settings.name = name.as_str().to_owned();
        }
        if let Some(platform) = update.platform {
            settings.platform = Some(platform);
        }
        if let Some(default_environment) = update.default_environment {
            settings.default_environment = Some(default_environment);
        }

        let file = self
            .cfg
            .data_dir()
            .join(ProjectPaths::new(org, project).project_json());
        write_json(&file, &settings)?;

        Ok(settings)
    }

    /// Removes a project and everything stored under it.
    ///
    /// Danger-zone operation; callers must check `project:admin` first.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ProjectNotFound` if the project does not exist,
    /// or `SettingsError::DirRemoval` if the directory cannot be deleted.
    pub fn remove(&self, org: &Slug, project: &Slug) -> SettingsResult<()> {
        // Ensures both org and project exist before touching the filesystem.
        self.get(org, project)?;

        let dir = self.cfg.data_dir().join(ProjectPaths::new(org, project).dir());
        fs::remove_dir_all(&dir).map_err(SettingsError::DirRemoval)
    }

    /// Transfers a project to another organization.
    ///
    /// The project directory is moved wholesale, so the project keeps its id,
    /// slug and settings. Danger-zone operation; callers must check
    /// `org:admin` first.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if either organization is
    /// missing, `SettingsError::ProjectNotFound` if the project does not
    /// exist, `SettingsError::ProjectExists` if the target organization
    /// already has a project with the same slug, or
    /// `SettingsError::DirRename` if the move fails.
    pub fn transfer(
        &self,
        org: &Slug,
        project: &Slug,
        target_org: &Slug,
    ) -> SettingsResult<ProjectSettings> {
        self.get(org, project)?;

        if !self.organization_exists(target_org) {
            return Err(SettingsError::OrganizationNotFound(target_org.clone()));
        }

        let target_paths = ProjectPaths::new(target_org, project);
        let target_dir = self.cfg.data_dir().join(target_paths.dir());
        if target_dir.exists() {
            return Err(SettingsError::ProjectExists(project.clone()));
        }

        let target_projects_dir = self
            .cfg
            .data_dir()
            .join(OrganizationPaths::new(target_org).projects_dir());
        fs::create_dir_all(&target_projects_dir).map_err(SettingsError::StorageDirCreation)?;

        let source_dir = self.cfg.data_dir().join(ProjectPaths::new(org, project).dir());
        fs::rename(&source_dir, &target_dir).map_err(SettingsError::DirRename)?;

        self.get(target_org, project)
    }

    /// Lists all projects of an organization.
    ///
    /// Records that cannot be parsed are logged as warnings and skipped.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if the organization does
    /// not exist.
    pub fn list(&self, org: &Slug) -> SettingsResult<Vec<ProjectSettings>> {
        if !self.organization_exists(org) {
            return Err(SettingsError::OrganizationNotFound(org.clone()));
        }

        let projects_dir = self
            .cfg
            .data_dir()
            .join(OrganizationPaths::new(org).projects_dir());
        let mut projects = Vec::new();

        let entries = match fs::read_dir(&projects_dir) {
            Ok(it) => it,
            Err(_) => return Ok(projects),
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let file = path.join(crate::paths::project::ProjectFile::NAME);
            if !file.is_file() {
                continue;
            }

            match read_json::<ProjectSettings>(&file) {
                Ok(settings) => projects.push(settings),
                Err(e) => {
                    tracing::warn!("skipping unreadable project {}: {e}", file.display());
                }
            }
        }

        projects.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::organizations::OrganizationService;

    struct Fixture {
        _tmp: tempfile::TempDir,
        orgs: OrganizationService,
        projects: ProjectService,
    }

    fn fixture() -> Fixture {
        let tmp = tempfile::tempdir().expect("tempdir");
        let cfg = Arc::new(CoreConfig::new(tmp.path().to_path_buf()).expect("valid config"));
        Fixture {
            _tmp: tmp,
            orgs: OrganizationService::new(cfg.clone()),
            projects: ProjectService::new(cfg),
        }
    }

    fn slug(s: &str) -> Slug {
        Slug::new(s).expect("valid slug")
    }

    fn name(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).expect("valid name")
    }

    #[test]
    fn test_create_requires_existing_organization() {
        let f = fixture();
        let err = f
            .projects
            .create(&slug("ghost"), slug("widgets"), name("Widgets"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::OrganizationNotFound(_)));
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();

        let created = f
            .projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();
        assert_eq!(created.slug.as_str(), "widgets");
        assert!(created.platform.is_none());

        let loaded = f.projects.get(&slug("acme"), &slug("widgets")).unwrap();
        assert_eq!(loaded.id, created.id);
    }

    #[test]
    fn test_create_rejects_duplicate_slug() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();

        let err = f
            .projects
            .create(&slug("acme"), slug("widgets"), name("Other"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::ProjectExists(_)));
    }

    #[test]
    fn test_update_sets_platform_and_environment() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();

        let updated = f
            .projects
            .update(
                &slug("acme"),
                &slug("widgets"),
                ProjectUpdate {
                    platform: Some("rust".into()),
                    default_environment: Some("production".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.platform.as_deref(), Some("rust"));
        assert_eq!(updated.default_environment.as_deref(), Some("production"));
        assert_eq!(updated.name, "Widgets");
    }

    #[test]
    fn test_remove_deletes_project_directory() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();

        f.projects.remove(&slug("acme"), &slug("widgets")).unwrap();

        let err = f
            .projects
            .get(&slug("acme"), &slug("widgets"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::ProjectNotFound(_)));
    }

    #[test]
    fn test_remove_missing_project() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();

        let err = f
            .projects
            .remove(&slug("acme"), &slug("ghost"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::ProjectNotFound(_)));
    }

    #[test]
    fn test_transfer_moves_project_between_organizations() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.orgs.create(slug("globex"), name("Globex")).unwrap();
        let created = f
            .projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();

        let transferred = f
            .projects
            .transfer(&slug("acme"), &slug("widgets"), &slug("globex"))
            .unwrap();
        assert_eq!(transferred.id, created.id);

        assert!(f.projects.get(&slug("globex"), &slug("widgets")).is_ok());
        let err = f
            .projects
            .get(&slug("acme"), &slug("widgets"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::ProjectNotFound(_)));
    }

    #[test]
    fn test_transfer_requires_existing_target_organization() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();

        let err = f
            .projects
            .transfer(&slug("acme"), &slug("widgets"), &slug("ghost"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::OrganizationNotFound(_)));

        // Source project is untouched after a failed transfer.
        assert!(f.projects.get(&slug("acme"), &slug("widgets")).is_ok());
    }

    #[test]
    fn test_transfer_rejects_slug_collision_in_target() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        f.orgs.create(slug("globex"), name("Globex")).unwrap();
        f.projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();
        f.projects
            .create(&slug("globex"), slug("widgets"), name("Their Widgets"))
            .unwrap();

        let err = f
            .projects
            .transfer(&slug("acme"), &slug("widgets"), &slug("globex"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::ProjectExists(_)));
    }

    #[test]
    fn test_list_is_sorted_and_skips_nothing_on_fresh_org() {
        let f = fixture();
        f.orgs.create(slug("acme"), name("Acme Inc")).unwrap();
        assert!(f.projects.list(&slug("acme")).unwrap().is_empty());

        f.projects
            .create(&slug("acme"), slug("widgets"), name("Widgets"))
            .unwrap();
        f.projects
            .create(&slug("acme"), slug("api"), name("API"))
            .unwrap();

        let slugs: Vec<String> = f
            .projects
            .list(&slug("acme"))
            .unwrap()
            .into_iter()
            .map(|p| p.slug.to_string())
            .collect();
        assert_eq!(slugs, vec!["api", "widgets"]);
    }
}
