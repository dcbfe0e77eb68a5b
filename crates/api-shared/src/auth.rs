//! Scope header parsing.
//!
//! Permission resolution happens upstream; requests arrive with their resolved
//! scopes in a header. This module only parses that header into an
//! [`AccessScopes`] set. Enforcement happens per handler.

use orgdesk_core::{AccessScopes, SettingsResult};

/// Header carrying the request's resolved scopes, whitespace/comma separated.
pub const SCOPES_HEADER: &str = "x-orgdesk-scopes";

/// Parses the scope header value into an [`AccessScopes`] set.
///
/// A missing header yields an empty set, which denies every gated operation;
/// it is not an error by itself.
///
/// # Errors
///
/// Returns `SettingsError::UnknownScope` if the header contains a token that
/// is not a known scope.
pub fn scopes_from_header(value: Option<&str>) -> SettingsResult<AccessScopes> {
    match value {
        Some(raw) => AccessScopes::parse(raw),
        None => Ok(AccessScopes::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgdesk_core::Scope;

    #[test]
    fn test_missing_header_yields_empty_scopes() {
        let scopes = scopes_from_header(None).expect("missing header is not an error");
        assert!(!scopes.has(Scope::OrgRead));
    }

    #[test]
    fn test_header_value_is_parsed() {
        let scopes = scopes_from_header(Some("org:read team:admin")).expect("valid header");
        assert!(scopes.has(Scope::OrgRead));
        assert!(scopes.has(Scope::TeamAdmin));
        assert!(!scopes.has(Scope::ProjectRead));
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        assert!(scopes_from_header(Some("org:read bogus")).is_err());
    }
}
