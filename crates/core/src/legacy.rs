//! Legacy settings path translation.
//!
//! During the settings-UI migration, every beta settings screen renders a
//! fallback link pointing at its legacy (server-rendered) equivalent. This
//! module holds the mapping from current-style settings paths to legacy paths.
//!
//! It contains **no I/O** and **no routing logic**. Its sole responsibility is
//! the path rewrite, so the mapping is defined in exactly one place.
//!
//! A path falls into one of three shapes, checked in order, first match wins:
//!
//! 1. project-scoped: `/settings/organization/{org}/project/{project}/...`
//! 2. account-scoped: `/settings/account/{section}/...`
//! 3. organization-scoped (the default for everything else)
//!
//! The account rewrite applies a fixed sequence of literal substring
//! replacements after the prefix swap. The replacements overlap, so their
//! order must not change.

/// A translated legacy route.
///
/// `client_routed` tells the rendering layer whether the link may be handled
/// by the in-app router. Legacy auth and account pages are not served by the
/// client-side router, so links into them must be plain hyperlinks that
/// trigger a full page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRoute {
    pub path: String,
    pub client_routed: bool,
}

/// Translates a current-style settings path into its legacy equivalent.
///
/// Never fails: paths that match none of the known shapes pass through the
/// default branch, which only swaps a leading `/settings/organization/` prefix
/// (a no-op when the prefix is absent).
pub fn legacy_route(path: &str) -> LegacyRoute {
    let client_routed = !(path.contains("/auth/") || path.contains("/account/"));

    let legacy = project_scoped(path)
        .or_else(|| account_scoped(path))
        .unwrap_or_else(|| organization_scoped(path));

    LegacyRoute {
        path: legacy,
        client_routed,
    }
}

/// `/settings/organization/{org}/project/{project}/...` → `/{org}/{project}/settings/...`
fn project_scoped(path: &str) -> Option<String> {
    let rest = path.strip_prefix("/settings/organization/")?;
    let (org, rest) = rest.split_once('/')?;
    let rest = rest.strip_prefix("project/")?;
    let (project, rest) = rest.split_once('/')?;
    Some(format!("/{org}/{project}/settings/{rest}"))
}

/// `/settings/account/{section}/...` → `/account/settings/{section}/...`,
/// then the literal replacements, in this order.
fn account_scoped(path: &str) -> Option<String> {
    let rest = path.strip_prefix("/settings/account/")?;
    let legacy = format!("/account/settings/{rest}");
    // Only a trailing `details/` segment is dropped; mid-path occurrences
    // are real section names and must survive.
    let legacy = match legacy.strip_suffix("details/") {
        Some(trimmed) => trimmed.to_owned(),
        None => legacy,
    };
    let legacy = legacy
        .replace("settings/close-account/", "remove/")
        .replace("account/settings/api/", "api/")
        .replace("auth-tokens/", "");
    Some(legacy)
}

/// Default branch: swap a leading `/settings/organization/` for `/organizations/`.
fn organization_scoped(path: &str) -> String {
    match path.strip_prefix("/settings/organization/") {
        Some(rest) => format!("/organizations/{rest}"),
        None => path.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_scoped_path_is_rewritten() {
        let route = legacy_route("/settings/organization/acme/project/widgets/alerts/");
        assert_eq!(route.path, "/acme/widgets/settings/alerts/");
        assert!(route.client_routed);
    }

    #[test]
    fn test_project_scoped_path_with_empty_tail() {
        let route = legacy_route("/settings/organization/acme/project/widgets/");
        assert_eq!(route.path, "/acme/widgets/settings/");
        assert!(route.client_routed);
    }

    #[test]
    fn test_account_api_path_collapses_to_api() {
        let route = legacy_route("/settings/account/api/");
        assert_eq!(route.path, "/api/");
        assert!(!route.client_routed);
    }

    #[test]
    fn test_account_close_account_becomes_remove() {
        let route = legacy_route("/settings/account/close-account/");
        assert_eq!(route.path, "/account/remove/");
        assert!(!route.client_routed);
    }

    #[test]
    fn test_account_details_segment_is_dropped() {
        let route = legacy_route("/settings/account/details/");
        assert_eq!(route.path, "/account/settings/");
        assert!(!route.client_routed);
    }

    #[test]
    fn test_account_details_only_dropped_at_end_of_path() {
        let route = legacy_route("/settings/account/details/notifications/");
        assert_eq!(route.path, "/account/settings/details/notifications/");
        assert!(!route.client_routed);
    }

    #[test]
    fn test_account_auth_tokens_segment_is_dropped() {
        let route = legacy_route("/settings/account/api/auth-tokens/");
        assert_eq!(route.path, "/api/");
        assert!(!route.client_routed);
    }

    #[test]
    fn test_organization_scoped_default() {
        let route = legacy_route("/settings/organization/acme/teams/");
        assert_eq!(route.path, "/organizations/acme/teams/");
        assert!(route.client_routed);
    }

    #[test]
    fn test_organization_without_project_segment_uses_default_branch() {
        // A project-less org path must not be mistaken for the project shape.
        let route = legacy_route("/settings/organization/acme/members/jane/");
        assert_eq!(route.path, "/organizations/acme/members/jane/");
    }

    #[test]
    fn test_unmatched_path_passes_through() {
        let route = legacy_route("/some/other/page/");
        assert_eq!(route.path, "/some/other/page/");
        assert!(route.client_routed);
    }

    #[test]
    fn test_auth_paths_force_full_navigation() {
        let route = legacy_route("/settings/organization/acme/auth/");
        assert_eq!(route.path, "/organizations/acme/auth/");
        assert!(!route.client_routed);
    }

    #[test]
    fn test_routing_flag_checks_original_path() {
        // The flag is decided on the input path, before any rewriting.
        let plain = legacy_route("/settings/account/notifications/");
        assert!(!plain.client_routed);

        let routed = legacy_route("/settings/organization/acme/members/");
        assert!(routed.client_routed);
    }
}
