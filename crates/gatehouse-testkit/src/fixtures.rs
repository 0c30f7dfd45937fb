//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use gatehouse_core::{RoleParams, SimplePrincipal};
use gatehouse_perms::{all_of, any_of, has_role, is_authenticated, open, Permission};

/// Build a principal named `name` holding `roles`.
pub fn principal(name: &str, roles: &[&str]) -> SimplePrincipal {
    SimplePrincipal::new(name).with_roles(roles.iter().copied())
}

/// Build a role parameter map from pairs.
pub fn params(pairs: &[(&str, &str)]) -> RoleParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A set of principals covering the usual cases.
pub struct TestFixture {
    pub admin: SimplePrincipal,
    pub member: SimplePrincipal,
    pub guest: SimplePrincipal,
    pub root: SimplePrincipal,
}

impl TestFixture {
    /// Create the standard fixture.
    ///
    /// - `admin` holds `admin`
    /// - `member` holds `user`, `org-acme` and `team-7`
    /// - `guest` holds no roles
    /// - `root` holds the wildcard
    pub fn new() -> Self {
        Self {
            admin: principal("admin", &["admin"]),
            member: principal("member", &["user", "org-acme", "team-7"]),
            guest: principal("guest", &[]),
            root: SimplePrincipal::superuser("root"),
        }
    }

    /// Parameters for a request under `/orgs/acme/teams/7`.
    pub fn team_params(&self) -> RoleParams {
        params(&[("org", "acme"), ("team", "7")])
    }

    /// A realistic route permission: admins, or authenticated members of the
    /// addressed org and team.
    pub fn team_permission(&self) -> Permission {
        any_of([
            has_role("admin"),
            all_of([
                is_authenticated(),
                has_role("org-{org}"),
                has_role("team-{team}"),
            ]),
        ])
    }

    /// A permission for a public route.
    pub fn public_permission(&self) -> Permission {
        open()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
