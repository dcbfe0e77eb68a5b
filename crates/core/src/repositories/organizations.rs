//! Organization settings management.
//!
//! Organizations are stored as JSON files under the data directory:
//!
//! ```text
//! organizations/
//!   <org-slug>/
//!     organization.json
//!     projects/
//!     teams/
//! ```
//!
//! This module contains **only** data operations—no API concerns such as
//! authentication or HTTP servers. Permission checks happen at the API layer.

use crate::config::CoreConfig;
use crate::constants::DEFAULT_MEMBER_ROLE;
use crate::paths::organization::OrganizationPaths;
use crate::repositories::helpers::{read_json, write_json};
use crate::{SettingsError, SettingsResult};
use chrono::{DateTime, Utc};
use orgdesk_types::{NonEmptyText, Slug};
use std::fs;
use std::sync::Arc;
use uuid::Uuid;

/// Stored settings for a single organization.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrganizationSettings {
    pub id: Uuid,
    pub slug: Slug,
    pub name: String,
    pub open_membership: bool,
    pub default_role: String,
    pub created_at: DateTime<Utc>,
}

/// A partial update to organization settings.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct OrganizationUpdate {
    pub name: Option<NonEmptyText>,
    pub open_membership: Option<bool>,
    pub default_role: Option<NonEmptyText>,
}

/// Service for managing organization settings.
#[derive(Clone, Debug)]
pub struct OrganizationService {
    cfg: Arc<CoreConfig>,
}

impl OrganizationService {
    /// Creates a new organization service.
    ///
    /// # Arguments
    ///
    /// * `cfg` - Core configuration containing the data directory
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Creates a new organization.
    ///
    /// New organizations start with open membership and the default member
    /// role; both can be changed afterwards via [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationExists` if an organization with the
    /// same slug already exists, or an IO/serialization error variant if the
    /// record cannot be written.
    pub fn create(&self, slug: Slug, name: NonEmptyText) -> SettingsResult<OrganizationSettings> {
        let paths = OrganizationPaths::new(&slug);
        let file = self.cfg.data_dir().join(paths.organization_json());

        if file.exists() {
            return Err(SettingsError::OrganizationExists(slug));
        }

        let dir = self.cfg.data_dir().join(paths.dir());
        fs::create_dir_all(&dir).map_err(SettingsError::StorageDirCreation)?;

        let settings = OrganizationSettings {
            id: Uuid::new_v4(),
            slug,
            name: name.as_str().to_owned(),
            open_membership: true,
            default_role: DEFAULT_MEMBER_ROLE.to_owned(),
            created_at: Utc::now(),
        };

        write_json(&file, &settings)?;
        Ok(settings)
    }

    /// Loads the settings of an existing organization.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if no organization with
    /// the given slug exists.
    pub fn get(&self, slug: &Slug) -> SettingsResult<OrganizationSettings> {
        let file = self
            .cfg
            .data_dir()
            .join(OrganizationPaths::new(slug).organization_json());

        if !file.is_file() {
            return Err(SettingsError::OrganizationNotFound(slug.clone()));
        }

        read_json(&file)
    }

    /// Applies a partial update to an organization's settings.
    ///
    /// Reads the existing record, applies the provided fields, and writes the
    /// result back. Returns the updated settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::OrganizationNotFound` if the organization does
    /// not exist, or an IO/serialization error variant on storage failure.
    pub fn update(
        &self,
        slug: &Slug,
        update: OrganizationUpdate,
    ) -> SettingsResult<OrganizationSettings> {
        let mut settings = self.get(slug)?;

        if let Some(name) = update.name {
            settings.name = name.as_str().to_owned();
        }
        if let Some(open_membership) = update.open_membership {
            settings.open_membership = open_membership;
        }
        if let Some(default_role) = update.default_role {
            settings.default_role = default_role.as_str().to_owned();
        }

        let file = self
            .cfg
            .data_dir()
            .join(OrganizationPaths::new(slug).organization_json());
        write_json(&file, &settings)?;

        Ok(settings)
    }

    /// Lists all organizations.
    ///
    /// Records that cannot be parsed are logged as warnings and skipped, so a
    /// single corrupt file does not take the listing down.
    pub fn list(&self) -> Vec<OrganizationSettings> {
        let orgs_dir = self.cfg.organizations_dir();
        let mut organizations = Vec::new();

        let entries = match fs::read_dir(&orgs_dir) {
            Ok(it) => it,
            Err(_) => return organizations,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let file = path.join(crate::paths::organization::OrganizationFile::NAME);
            if !file.is_file() {
                continue;
            }

            match read_json::<OrganizationSettings>(&file) {
                Ok(settings) => organizations.push(settings),
                Err(e) => {
                    tracing::warn!("skipping unreadable organization {}: {e}", file.display());
                }
            }
        }

        organizations.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        organizations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (tempfile::TempDir, OrganizationService) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let cfg = Arc::new(CoreConfig::new(tmp.path().to_path_buf()).expect("valid config"));
        (tmp, OrganizationService::new(cfg))
    }

    fn slug(s: &str) -> Slug {
        Slug::new(s).expect("valid slug")
    }

    fn name(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).expect("valid name")
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let (_tmp, service) = service();

        let created = service.create(slug("acme"), name("Acme Inc")).unwrap();
        assert_eq!(created.slug.as_str(), "acme");
        assert_eq!(created.name, "Acme Inc");
        assert!(created.open_membership);
        assert_eq!(created.default_role, "member");

        let loaded = service.get(&slug("acme")).unwrap();
        assert_eq!(loaded.id, created.id);
        assert_eq!(loaded.name, "Acme Inc");
    }

    #[test]
    fn test_create_rejects_duplicate_slug() {
        let (_tmp, service) = service();
        service.create(slug("acme"), name("Acme Inc")).unwrap();

        let err = service.create(slug("acme"), name("Other")).unwrap_err();
        assert!(matches!(err, SettingsError::OrganizationExists(_)));
    }

    #[test]
    fn test_get_missing_organization() {
        let (_tmp, service) = service();
        let err = service.get(&slug("ghost")).unwrap_err();
        assert!(matches!(err, SettingsError::OrganizationNotFound(_)));
    }

    #[test]
    fn test_update_applies_only_provided_fields() {
        let (_tmp, service) = service();
        service.create(slug("acme"), name("Acme Inc")).unwrap();

        let updated = service
            .update(
                &slug("acme"),
                OrganizationUpdate {
                    open_membership: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(!updated.open_membership);
        assert_eq!(updated.name, "Acme Inc");
        assert_eq!(updated.default_role, "member");

        let reloaded = service.get(&slug("acme")).unwrap();
        assert!(!reloaded.open_membership);
    }

    #[test]
    fn test_list_returns_organizations_sorted_by_slug() {
        let (_tmp, service) = service();
        service.create(slug("globex"), name("Globex")).unwrap();
        service.create(slug("acme"), name("Acme Inc")).unwrap();

        let orgs = service.list();
        let slugs: Vec<&str> = orgs.iter().map(|o| o.slug.as_str()).collect();
        assert_eq!(slugs, vec!["acme", "globex"]);
    }

    #[test]
    fn test_list_on_empty_data_dir() {
        let (_tmp, service) = service();
        assert!(service.list().is_empty());
    }
}
