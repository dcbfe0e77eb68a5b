//! OrgDesk REST API server.
//!
//! Serves the settings endpoints that the web application's settings screens
//! bind to, plus the compatibility shim that redirects beta settings URLs to
//! their legacy equivalents during the migration period.

use axum::{
    Router,
    extract::{Path as AxumPath, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Json},
    routing::{delete, get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::auth::{SCOPES_HEADER, scopes_from_header};
use api_shared::types::{
    CreateOrganizationReq, CreateProjectReq, CreateTeamReq, HealthRes, LegacyRouteRes,
    ListOrganizationsRes, ListProjectsRes, ListTeamsRes, OkRes, OrganizationRes, ProjectRes,
    TeamRes, TransferProjectReq, UpdateOrganizationReq, UpdateProjectReq, UpdateTeamReq,
};
use api_shared::HealthService;
use orgdesk_core::{
    CoreConfig, NonEmptyText, OrganizationService, OrganizationUpdate, ProjectService,
    ProjectUpdate, Scope, SettingsError, Slug, TeamService, TeamUpdate, legacy_route,
};

/// Application state shared across REST API handlers.
///
/// Contains the settings services needed by the endpoints. All services share
/// one [`CoreConfig`] resolved at startup.
#[derive(Clone)]
struct AppState {
    organizations: OrganizationService,
    projects: ProjectService,
    teams: TeamService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_organizations,
        create_organization,
        get_organization_settings,
        update_organization_settings,
        list_projects,
        create_project,
        get_project_settings,
        update_project_settings,
        remove_project,
        transfer_project,
        list_teams,
        create_team,
        get_team_settings,
        update_team_settings,
        remove_team,
        get_legacy_route,
    ),
    components(schemas(
        HealthRes,
        OkRes,
        OrganizationRes,
        ListOrganizationsRes,
        CreateOrganizationReq,
        UpdateOrganizationReq,
        ProjectRes,
        ListProjectsRes,
        CreateProjectReq,
        UpdateProjectReq,
        TransferProjectReq,
        TeamRes,
        ListTeamsRes,
        CreateTeamReq,
        UpdateTeamReq,
        LegacyRouteRes,
    ))
)]
struct ApiDoc;

/// Main entry point for the OrgDesk REST API server.
///
/// # Environment Variables
/// - `ORGDESK_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `ORGDESK_DATA_DIR`: Directory for settings data storage (default: "orgdesk_data")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the data directory does not exist,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orgdesk=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("ORGDESK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting OrgDesk REST on {}", addr);

    let data_dir =
        std::env::var("ORGDESK_DATA_DIR").unwrap_or_else(|_| orgdesk_core::DEFAULT_DATA_DIR.into());
    let data_path = Path::new(&data_dir);
    if !data_path.exists() {
        anyhow::bail!("Data directory does not exist: {}", data_path.display());
    }

    let cfg = Arc::new(CoreConfig::new(data_path.to_path_buf())?);

    let state = AppState {
        organizations: OrganizationService::new(cfg.clone()),
        projects: ProjectService::new(cfg.clone()),
        teams: TeamService::new(cfg),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/organizations", get(list_organizations))
        .route("/organizations", post(create_organization))
        .route(
            "/organizations/:org/settings",
            get(get_organization_settings).put(update_organization_settings),
        )
        .route(
            "/organizations/:org/projects",
            get(list_projects).post(create_project),
        )
        .route(
            "/organizations/:org/projects/:project/settings",
            get(get_project_settings).put(update_project_settings),
        )
        .route(
            "/organizations/:org/projects/:project",
            delete(remove_project),
        )
        .route(
            "/organizations/:org/projects/:project/transfer",
            post(transfer_project),
        )
        .route("/organizations/:org/teams", get(list_teams).post(create_team))
        .route(
            "/organizations/:org/teams/:team/settings",
            get(get_team_settings).put(update_team_settings),
        )
        .route("/organizations/:org/teams/:team", delete(remove_team))
        .route("/legacy-route", get(get_legacy_route))
        .route("/settings/*rest", get(legacy_settings_redirect))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the OrgDesk service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/organizations",
    responses(
        (status = 200, description = "List of organizations", body = ListOrganizationsRes),
        (status = 403, description = "Insufficient scope")
    )
)]
/// List all organizations
///
/// Requires the `org:read` scope.
#[axum::debug_handler]
async fn list_organizations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ListOrganizationsRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::OrgRead)?;

    let organizations = state
        .organizations
        .list()
        .into_iter()
        .map(OrganizationRes::from)
        .collect();
    Ok(Json(ListOrganizationsRes { organizations }))
}

#[utoipa::path(
    post,
    path = "/organizations",
    request_body = CreateOrganizationReq,
    responses(
        (status = 200, description = "Organization created", body = OrganizationRes),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Insufficient scope"),
        (status = 409, description = "Organization already exists")
    )
)]
/// Create a new organization
///
/// Requires the `org:write` scope.
#[axum::debug_handler]
async fn create_organization(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateOrganizationReq>,
) -> Result<Json<OrganizationRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::OrgWrite)?;

    let slug = parse_slug(&req.slug)?;
    let name = parse_name(&req.name)?;

    match state.organizations.create(slug, name) {
        Ok(org) => Ok(Json(org.into())),
        Err(e) => {
            tracing::error!("Create organization error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/organizations/{org}/settings",
    params(("org" = String, Path, description = "Organization slug")),
    responses(
        (status = 200, description = "Organization settings", body = OrganizationRes),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization not found")
    )
)]
/// Read organization settings
///
/// Requires the `org:read` scope.
#[axum::debug_handler]
async fn get_organization_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(org): AxumPath<String>,
) -> Result<Json<OrganizationRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::OrgRead)?;
    let org = parse_slug(&org)?;

    match state.organizations.get(&org) {
        Ok(settings) => Ok(Json(settings.into())),
        Err(e) => {
            tracing::error!("Get organization settings error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    put,
    path = "/organizations/{org}/settings",
    params(("org" = String, Path, description = "Organization slug")),
    request_body = UpdateOrganizationReq,
    responses(
        (status = 200, description = "Organization settings updated", body = OrganizationRes),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization not found")
    )
)]
/// Update organization settings
///
/// Applies the provided fields and leaves the rest unchanged.
/// Requires the `org:write` scope.
#[axum::debug_handler]
async fn update_organization_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(org): AxumPath<String>,
    Json(req): Json<UpdateOrganizationReq>,
) -> Result<Json<OrganizationRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::OrgWrite)?;
    let org = parse_slug(&org)?;

    let update = OrganizationUpdate {
        name: parse_optional_name(req.name)?,
        open_membership: req.open_membership,
        default_role: parse_optional_name(req.default_role)?,
    };

    match state.organizations.update(&org, update) {
        Ok(settings) => Ok(Json(settings.into())),
        Err(e) => {
            tracing::error!("Update organization settings error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/organizations/{org}/projects",
    params(("org" = String, Path, description = "Organization slug")),
    responses(
        (status = 200, description = "List of projects", body = ListProjectsRes),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization not found")
    )
)]
/// List an organization's projects
///
/// Requires the `project:read` scope.
#[axum::debug_handler]
async fn list_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(org): AxumPath<String>,
) -> Result<Json<ListProjectsRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::ProjectRead)?;
    let org = parse_slug(&org)?;

    match state.projects.list(&org) {
        Ok(projects) => Ok(Json(ListProjectsRes {
            projects: projects.into_iter().map(ProjectRes::from).collect(),
        })),
        Err(e) => {
            tracing::error!("List projects error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    post,
    path = "/organizations/{org}/projects",
    params(("org" = String, Path, description = "Organization slug")),
    request_body = CreateProjectReq,
    responses(
        (status = 200, description = "Project created", body = ProjectRes),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization not found"),
        (status = 409, description = "Project already exists")
    )
)]
/// Create a new project in an organization
///
/// Requires the `project:write` scope.
#[axum::debug_handler]
async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(org): AxumPath<String>,
    Json(req): Json<CreateProjectReq>,
) -> Result<Json<ProjectRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::ProjectWrite)?;
    let org = parse_slug(&org)?;
    let slug = parse_slug(&req.slug)?;
    let name = parse_name(&req.name)?;

    match state.projects.create(&org, slug, name) {
        Ok(project) => Ok(Json(project.into())),
        Err(e) => {
            tracing::error!("Create project error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/organizations/{org}/projects/{project}/settings",
    params(
        ("org" = String, Path, description = "Organization slug"),
        ("project" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "Project settings", body = ProjectRes),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization or project not found")
    )
)]
/// Read project settings
///
/// Requires the `project:read` scope.
#[axum::debug_handler]
async fn get_project_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath((org, project)): AxumPath<(String, String)>,
) -> Result<Json<ProjectRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::ProjectRead)?;
    let org = parse_slug(&org)?;
    let project = parse_slug(&project)?;

    match state.projects.get(&org, &project) {
        Ok(settings) => Ok(Json(settings.into())),
        Err(e) => {
            tracing::error!("Get project settings error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    put,
    path = "/organizations/{org}/projects/{project}/settings",
    params(
        ("org" = String, Path, description = "Organization slug"),
        ("project" = String, Path, description = "Project slug")
    ),
    request_body = UpdateProjectReq,
    responses(
        (status = 200, description = "Project settings updated", body = ProjectRes),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization or project not found")
    )
)]
/// Update project settings
///
/// Applies the provided fields and leaves the rest unchanged.
/// Requires the `project:write` scope.
#[axum::debug_handler]
async fn update_project_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath((org, project)): AxumPath<(String, String)>,
    Json(req): Json<UpdateProjectReq>,
) -> Result<Json<ProjectRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::ProjectWrite)?;
    let org = parse_slug(&org)?;
    let project = parse_slug(&project)?;

    let update = ProjectUpdate {
        name: parse_optional_name(req.name)?,
        platform: req.platform,
        default_environment: req.default_environment,
    };

    match state.projects.update(&org, &project, update) {
        Ok(settings) => Ok(Json(settings.into())),
        Err(e) => {
            tracing::error!("Update project settings error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/organizations/{org}/projects/{project}",
    params(
        ("org" = String, Path, description = "Organization slug"),
        ("project" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "Project removed", body = OkRes),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization or project not found")
    )
)]
/// Remove a project (danger zone)
///
/// Deletes the project and everything stored under it.
/// Requires the `project:admin` scope.
#[axum::debug_handler]
async fn remove_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath((org, project)): AxumPath<(String, String)>,
) -> Result<Json<OkRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::ProjectAdmin)?;
    let org = parse_slug(&org)?;
    let project = parse_slug(&project)?;

    match state.projects.remove(&org, &project) {
        Ok(()) => Ok(Json(OkRes { success: true })),
        Err(e) => {
            tracing::error!("Remove project error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    post,
    path = "/organizations/{org}/projects/{project}/transfer",
    params(
        ("org" = String, Path, description = "Organization slug"),
        ("project" = String, Path, description = "Project slug")
    ),
    request_body = TransferProjectReq,
    responses(
        (status = 200, description = "Project transferred", body = ProjectRes),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization or project not found"),
        (status = 409, description = "Target organization already has this project slug")
    )
)]
/// Transfer a project to another organization (danger zone)
///
/// The project keeps its id, slug and settings.
/// Requires the `org:admin` scope.
#[axum::debug_handler]
async fn transfer_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath((org, project)): AxumPath<(String, String)>,
    Json(req): Json<TransferProjectReq>,
) -> Result<Json<ProjectRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::OrgAdmin)?;
    let org = parse_slug(&org)?;
    let project = parse_slug(&project)?;
    let target = parse_slug(&req.target_organization)?;

    match state.projects.transfer(&org, &project, &target) {
        Ok(settings) => Ok(Json(settings.into())),
        Err(e) => {
            tracing::error!("Transfer project error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/organizations/{org}/teams",
    params(("org" = String, Path, description = "Organization slug")),
    responses(
        (status = 200, description = "List of teams", body = ListTeamsRes),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization not found")
    )
)]
/// List an organization's teams
///
/// Requires the `team:read` scope.
#[axum::debug_handler]
async fn list_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(org): AxumPath<String>,
) -> Result<Json<ListTeamsRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::TeamRead)?;
    let org = parse_slug(&org)?;

    match state.teams.list(&org) {
        Ok(teams) => Ok(Json(ListTeamsRes {
            teams: teams.into_iter().map(TeamRes::from).collect(),
        })),
        Err(e) => {
            tracing::error!("List teams error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    post,
    path = "/organizations/{org}/teams",
    params(("org" = String, Path, description = "Organization slug")),
    request_body = CreateTeamReq,
    responses(
        (status = 200, description = "Team created", body = TeamRes),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization not found"),
        (status = 409, description = "Team already exists")
    )
)]
/// Create a new team in an organization
///
/// Requires the `team:write` scope.
#[axum::debug_handler]
async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath(org): AxumPath<String>,
    Json(req): Json<CreateTeamReq>,
) -> Result<Json<TeamRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::TeamWrite)?;
    let org = parse_slug(&org)?;
    let slug = parse_slug(&req.slug)?;
    let name = parse_name(&req.name)?;

    match state.teams.create(&org, slug, name) {
        Ok(team) => Ok(Json(team.into())),
        Err(e) => {
            tracing::error!("Create team error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/organizations/{org}/teams/{team}/settings",
    params(
        ("org" = String, Path, description = "Organization slug"),
        ("team" = String, Path, description = "Team slug")
    ),
    responses(
        (status = 200, description = "Team settings", body = TeamRes),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization or team not found")
    )
)]
/// Read team settings
///
/// Requires the `team:read` scope.
#[axum::debug_handler]
async fn get_team_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath((org, team)): AxumPath<(String, String)>,
) -> Result<Json<TeamRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::TeamRead)?;
    let org = parse_slug(&org)?;
    let team = parse_slug(&team)?;

    match state.teams.get(&org, &team) {
        Ok(settings) => Ok(Json(settings.into())),
        Err(e) => {
            tracing::error!("Get team settings error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    put,
    path = "/organizations/{org}/teams/{team}/settings",
    params(
        ("org" = String, Path, description = "Organization slug"),
        ("team" = String, Path, description = "Team slug")
    ),
    request_body = UpdateTeamReq,
    responses(
        (status = 200, description = "Team settings updated", body = TeamRes),
        (status = 400, description = "Bad request"),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization or team not found")
    )
)]
/// Update team settings
///
/// Requires the `team:write` scope.
#[axum::debug_handler]
async fn update_team_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath((org, team)): AxumPath<(String, String)>,
    Json(req): Json<UpdateTeamReq>,
) -> Result<Json<TeamRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::TeamWrite)?;
    let org = parse_slug(&org)?;
    let team = parse_slug(&team)?;

    let update = TeamUpdate {
        name: parse_optional_name(req.name)?,
    };

    match state.teams.update(&org, &team, update) {
        Ok(settings) => Ok(Json(settings.into())),
        Err(e) => {
            tracing::error!("Update team settings error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/organizations/{org}/teams/{team}",
    params(
        ("org" = String, Path, description = "Organization slug"),
        ("team" = String, Path, description = "Team slug")
    ),
    responses(
        (status = 200, description = "Team removed", body = OkRes),
        (status = 403, description = "Insufficient scope"),
        (status = 404, description = "Organization or team not found")
    )
)]
/// Remove a team (danger zone)
///
/// Requires the `team:admin` scope.
#[axum::debug_handler]
async fn remove_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    AxumPath((org, team)): AxumPath<(String, String)>,
) -> Result<Json<OkRes>, (StatusCode, &'static str)> {
    require_scope(&headers, Scope::TeamAdmin)?;
    let org = parse_slug(&org)?;
    let team = parse_slug(&team)?;

    match state.teams.remove(&org, &team) {
        Ok(()) => Ok(Json(OkRes { success: true })),
        Err(e) => {
            tracing::error!("Remove team error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

#[derive(serde::Deserialize, utoipa::IntoParams)]
struct LegacyRouteQuery {
    /// Current-style settings path (e.g. /settings/account/api/)
    path: String,
}

#[utoipa::path(
    get,
    path = "/legacy-route",
    params(LegacyRouteQuery),
    responses(
        (status = 200, description = "Legacy route for the given settings path", body = LegacyRouteRes)
    )
)]
/// Translate a settings path to its legacy equivalent
///
/// Used by the rendering layer to build the migration-period fallback link.
/// `client_routed: false` means the legacy destination is not served by the
/// client-side router and the link must trigger a full page navigation.
#[axum::debug_handler]
async fn get_legacy_route(Query(query): Query<LegacyRouteQuery>) -> Json<LegacyRouteRes> {
    Json(legacy_route(&query.path).into())
}

/// Compatibility shim: redirect a beta settings URL to its legacy equivalent.
///
/// Bookmarks and stale links into `/settings/...` land here and get a 302 to
/// the legacy page.
#[axum::debug_handler]
async fn legacy_settings_redirect(AxumPath(rest): AxumPath<String>) -> impl IntoResponse {
    let original = format!("/settings/{rest}");
    let route = legacy_route(&original);
    tracing::info!("redirecting {} to {}", original, route.path);
    (StatusCode::FOUND, [(header::LOCATION, route.path)])
}

/// Parses the scope header and checks the required scope.
fn require_scope(headers: &HeaderMap, required: Scope) -> Result<(), (StatusCode, &'static str)> {
    let value = match headers.get(SCOPES_HEADER) {
        Some(v) => match v.to_str() {
            Ok(s) => Some(s),
            Err(_) => return Err((StatusCode::BAD_REQUEST, "Invalid scopes header")),
        },
        None => None,
    };

    let scopes = scopes_from_header(value).map_err(|e| {
        tracing::warn!("Invalid scopes header: {}", e);
        (StatusCode::BAD_REQUEST, "Invalid scopes header")
    })?;

    scopes.require(required).map_err(|e| {
        tracing::warn!("Denied: {}", e);
        (StatusCode::FORBIDDEN, "Insufficient scope")
    })
}

fn parse_slug(raw: &str) -> Result<Slug, (StatusCode, &'static str)> {
    Slug::new(raw).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid slug"))
}

fn parse_name(raw: &str) -> Result<NonEmptyText, (StatusCode, &'static str)> {
    NonEmptyText::new(raw).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid name"))
}

fn parse_optional_name(
    raw: Option<String>,
) -> Result<Option<NonEmptyText>, (StatusCode, &'static str)> {
    raw.map(|s| parse_name(&s)).transpose()
}

/// Maps a core error onto the REST status code it should surface as.
fn error_status(e: &SettingsError) -> (StatusCode, &'static str) {
    match e {
        SettingsError::OrganizationNotFound(_)
        | SettingsError::ProjectNotFound(_)
        | SettingsError::TeamNotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
        SettingsError::OrganizationExists(_)
        | SettingsError::ProjectExists(_)
        | SettingsError::TeamExists(_) => (StatusCode::CONFLICT, "Already exists"),
        SettingsError::InvalidInput(_)
        | SettingsError::Slug(_)
        | SettingsError::Text(_)
        | SettingsError::UnknownScope(_) => (StatusCode::BAD_REQUEST, "Bad request"),
        SettingsError::PermissionDenied { .. } => (StatusCode::FORBIDDEN, "Insufficient scope"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    }
}
