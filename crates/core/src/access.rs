//! Resolved permission scopes.
//!
//! OrgDesk does not resolve who holds which permissions; scopes arrive on each
//! request already resolved (for example from an upstream gateway) and are only
//! parsed and checked here. Danger-zone operations branch on these checks.

use crate::{SettingsError, SettingsResult};
use std::collections::BTreeSet;

/// A single permission scope.
///
/// Scopes come in three families (organization, project, team), each with
/// `read` < `write` < `admin` strength. A stronger scope satisfies any weaker
/// requirement within its own family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    OrgRead,
    OrgWrite,
    OrgAdmin,
    ProjectRead,
    ProjectWrite,
    ProjectAdmin,
    TeamRead,
    TeamWrite,
    TeamAdmin,
}

impl Scope {
    /// Returns the wire representation of the scope (e.g. `org:write`).
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::OrgRead => "org:read",
            Scope::OrgWrite => "org:write",
            Scope::OrgAdmin => "org:admin",
            Scope::ProjectRead => "project:read",
            Scope::ProjectWrite => "project:write",
            Scope::ProjectAdmin => "project:admin",
            Scope::TeamRead => "team:read",
            Scope::TeamWrite => "team:write",
            Scope::TeamAdmin => "team:admin",
        }
    }

    /// Returns true if holding `self` satisfies a requirement for `required`.
    pub fn satisfies(self, required: Scope) -> bool {
        use Scope::*;
        match required {
            OrgRead => matches!(self, OrgRead | OrgWrite | OrgAdmin),
            OrgWrite => matches!(self, OrgWrite | OrgAdmin),
            OrgAdmin => matches!(self, OrgAdmin),
            ProjectRead => matches!(self, ProjectRead | ProjectWrite | ProjectAdmin),
            ProjectWrite => matches!(self, ProjectWrite | ProjectAdmin),
            ProjectAdmin => matches!(self, ProjectAdmin),
            TeamRead => matches!(self, TeamRead | TeamWrite | TeamAdmin),
            TeamWrite => matches!(self, TeamWrite | TeamAdmin),
            TeamAdmin => matches!(self, TeamAdmin),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "org:read" => Ok(Scope::OrgRead),
            "org:write" => Ok(Scope::OrgWrite),
            "org:admin" => Ok(Scope::OrgAdmin),
            "project:read" => Ok(Scope::ProjectRead),
            "project:write" => Ok(Scope::ProjectWrite),
            "project:admin" => Ok(Scope::ProjectAdmin),
            "team:read" => Ok(Scope::TeamRead),
            "team:write" => Ok(Scope::TeamWrite),
            "team:admin" => Ok(Scope::TeamAdmin),
            other => Err(SettingsError::UnknownScope(other.to_owned())),
        }
    }
}

/// The set of scopes resolved for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessScopes(BTreeSet<Scope>);

impl AccessScopes {
    /// Returns an empty scope set (every gated operation is denied).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a scope list from its wire form.
    ///
    /// Tokens are separated by whitespace and/or commas. An empty input yields
    /// an empty set.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::UnknownScope` if any token is not a known scope.
    pub fn parse(raw: &str) -> SettingsResult<Self> {
        let mut scopes = BTreeSet::new();
        for token in raw.split([' ', '\t', ',']).filter(|t| !t.is_empty()) {
            scopes.insert(token.parse::<Scope>()?);
        }
        Ok(Self(scopes))
    }

    /// Returns true if any held scope satisfies `required`.
    pub fn has(&self, required: Scope) -> bool {
        self.0.iter().any(|scope| scope.satisfies(required))
    }

    /// Checks that `required` is satisfied.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::PermissionDenied` if no held scope satisfies
    /// `required`.
    pub fn require(&self, required: Scope) -> SettingsResult<()> {
        if self.has(required) {
            Ok(())
        } else {
            Err(SettingsError::PermissionDenied { required })
        }
    }
}

impl FromIterator<Scope> for AccessScopes {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
