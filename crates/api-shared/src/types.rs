//! Wire request/response types for the REST API.
//!
//! These are deliberately plain (strings, bools, options) so that the OpenAPI
//! schema stays simple; conversion to validated core types happens in the
//! handlers.

use orgdesk_core::{LegacyRoute, OrganizationSettings, ProjectSettings, TeamSettings};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Generic success response for destructive operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OkRes {
    pub success: bool,
}

/// Organization settings as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizationRes {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub open_membership: bool,
    pub default_role: String,
    pub created_at: String,
}

impl From<OrganizationSettings> for OrganizationRes {
    fn from(settings: OrganizationSettings) -> Self {
        Self {
            id: settings.id.to_string(),
            slug: settings.slug.to_string(),
            name: settings.name,
            open_membership: settings.open_membership,
            default_role: settings.default_role,
            created_at: settings.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListOrganizationsRes {
    pub organizations: Vec<OrganizationRes>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrganizationReq {
    pub slug: String,
    pub name: String,
}

/// Partial organization settings update; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrganizationReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub open_membership: Option<bool>,
    #[serde(default)]
    pub default_role: Option<String>,
}

/// Project settings as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectRes {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub platform: Option<String>,
    pub default_environment: Option<String>,
    pub created_at: String,
}

impl From<ProjectSettings> for ProjectRes {
    fn from(settings: ProjectSettings) -> Self {
        Self {
            id: settings.id.to_string(),
            slug: settings.slug.to_string(),
            name: settings.name,
            platform: settings.platform,
            default_environment: settings.default_environment,
            created_at: settings.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListProjectsRes {
    pub projects: Vec<ProjectRes>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectReq {
    pub slug: String,
    pub name: String,
}

/// Partial project settings update; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProjectReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub default_environment: Option<String>,
}

/// Danger-zone request: move a project to another organization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferProjectReq {
    pub target_organization: String,
}

/// Team settings as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamRes {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub created_at: String,
}

impl From<TeamSettings> for TeamRes {
    fn from(settings: TeamSettings) -> Self {
        Self {
            id: settings.id.to_string(),
            slug: settings.slug.to_string(),
            name: settings.name,
            created_at: settings.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListTeamsRes {
    pub teams: Vec<TeamRes>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamReq {
    pub slug: String,
    pub name: String,
}

/// Partial team settings update; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamReq {
    #[serde(default)]
    pub name: Option<String>,
}

/// A translated legacy route for the rendering layer's fallback link.
///
/// `client_routed: false` means the link must be a plain anchor triggering a
/// full page navigation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LegacyRouteRes {
    pub path: String,
    pub client_routed: bool,
}

impl From<LegacyRoute> for LegacyRouteRes {
    fn from(route: LegacyRoute) -> Self {
        Self {
            path: route.path,
            client_routed: route.client_routed,
        }
    }
}
