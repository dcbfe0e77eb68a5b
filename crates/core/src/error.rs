use crate::access::Scope;
use orgdesk_types::{Slug, SlugError, TextError};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid slug: {0}")]
    Slug(#[from] SlugError),
    #[error("invalid text: {0}")]
    Text(#[from] TextError),
    #[error("unknown scope: {0}")]
    UnknownScope(String),
    #[error("missing required scope: {required}")]
    PermissionDenied { required: Scope },

    #[error("organization not found: {0}")]
    OrganizationNotFound(Slug),
    #[error("project not found: {0}")]
    ProjectNotFound(Slug),
    #[error("team not found: {0}")]
    TeamNotFound(Slug),
    #[error("organization already exists: {0}")]
    OrganizationExists(Slug),
    #[error("project already exists: {0}")]
    ProjectExists(Slug),
    #[error("team already exists: {0}")]
    TeamExists(Slug),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to remove record directory: {0}")]
    DirRemoval(std::io::Error),
    #[error("failed to move record directory: {0}")]
    DirRename(std::io::Error),
    #[error("failed to write settings file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read settings file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize settings: {0}")]
    Deserialization(serde_json::Error),
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
