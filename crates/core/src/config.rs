//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::paths::organization::OrganizationsDir;
use crate::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The data directory must already exist; callers that want to bootstrap a
    /// fresh data directory should create it before constructing the config.
    pub fn new(data_dir: PathBuf) -> SettingsResult<Self> {
        if !data_dir.is_dir() {
            return Err(SettingsError::InvalidInput(format!(
                "data directory does not exist: {}",
                data_dir.display()
            )));
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn organizations_dir(&self) -> PathBuf {
        self.data_dir.join(OrganizationsDir::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_missing_dir() {
        let result = CoreConfig::new(PathBuf::from("/definitely/not/a/real/dir"));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_exposes_organizations_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let cfg = CoreConfig::new(tmp.path().to_path_buf()).expect("valid config");

        assert_eq!(cfg.data_dir(), tmp.path());
        assert_eq!(cfg.organizations_dir(), tmp.path().join("organizations"));
    }
}
