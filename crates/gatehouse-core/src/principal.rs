//! Principals: the authenticated actors permissions are evaluated against.
//!
//! Gatehouse does not authenticate anyone. Whatever layer does hands over
//! something implementing [`Principal`], and permissions only ever read its
//! role set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The role that satisfies every role requirement.
pub const WILDCARD_ROLE: &str = "*";

/// An authenticated actor.
///
/// Role strings are opaque. The only one with meaning is [`WILDCARD_ROLE`].
pub trait Principal {
    /// The name the actor authenticated as.
    fn name(&self) -> &str;

    /// The roles held by the actor.
    fn roles(&self) -> &BTreeSet<String>;

    /// Check if the actor holds exactly this role.
    fn has_role(&self, role: &str) -> bool {
        self.roles().contains(role)
    }

    /// Check if the actor holds the wildcard role.
    fn is_wildcard(&self) -> bool {
        self.has_role(WILDCARD_ROLE)
    }
}

/// A plain principal: a name and a set of roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePrincipal {
    /// The principal's name.
    pub name: String,

    /// The roles held.
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl SimplePrincipal {
    /// Create a principal with no roles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeSet::new(),
        }
    }

    /// Add a role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Add several roles.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    /// Create a principal holding the wildcard role.
    pub fn superuser(name: impl Into<String>) -> Self {
        Self::new(name).with_role(WILDCARD_ROLE)
    }
}

impl Principal for SimplePrincipal {
    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role() {
        let alice = SimplePrincipal::new("alice").with_roles(["admin", "team-7"]);

        assert!(alice.has_role("admin"));
        assert!(alice.has_role("team-7"));
        assert!(!alice.has_role("team-8"));
        assert!(!alice.is_wildcard());
    }

    #[test]
    fn test_superuser_is_wildcard() {
        let root = SimplePrincipal::superuser("root");

        assert!(root.is_wildcard());
        assert_eq!(root.roles().len(), 1);
    }

    #[test]
    fn test_deserialize_without_roles() {
        let bob: SimplePrincipal = serde_json::from_str(r#"{"name":"bob"}"#).unwrap();

        assert_eq!(bob.name(), "bob");
        assert!(bob.roles().is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let alice = SimplePrincipal::new("alice").with_role("admin");
        let json = serde_json::to_string(&alice).unwrap();
        let recovered: SimplePrincipal = serde_json::from_str(&json).unwrap();

        assert_eq!(alice, recovered);
    }
}
