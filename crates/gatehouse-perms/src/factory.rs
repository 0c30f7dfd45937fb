//! Constructors for the canonical permissions.

use gatehouse_core::RolePattern;

use crate::permission::Permission;

/// The only permission that grants access without authentication.
pub const OPEN: Permission = Permission::Open;

/// Granted as soon as a principal is authenticated.
pub const IS_AUTHENTICATED: Permission = Permission::IsAuthenticated;

/// The only permission that grants access without authentication.
pub fn open() -> Permission {
    OPEN
}

/// The most basic permission, granted as soon as a principal is authenticated.
pub fn is_authenticated() -> Permission {
    IS_AUTHENTICATED
}

/// Granted when the principal holds `role` once its `{name}` placeholders are
/// resolved, or holds the wildcard role.
pub fn has_role(role: impl Into<String>) -> Permission {
    Permission::HasRole(RolePattern::new(role))
}

/// Granted if any of `permissions` is. An empty list is never granted.
pub fn any_of<I>(permissions: I) -> Permission
where
    I: IntoIterator<Item = Permission>,
{
    Permission::AnyOf(permissions.into_iter().collect())
}

/// Granted if all of `permissions` are. An empty list is always granted.
pub fn all_of<I>(permissions: I) -> Permission
where
    I: IntoIterator<Item = Permission>,
{
    Permission::AllOf(permissions.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_canonical() {
        assert_eq!(open(), OPEN);
        assert_eq!(is_authenticated(), IS_AUTHENTICATED);
        assert_ne!(open(), is_authenticated());
    }

    #[test]
    fn test_has_role_keeps_raw_pattern() {
        match has_role("team-{id}") {
            Permission::HasRole(pattern) => assert_eq!(pattern.as_str(), "team-{id}"),
            other => panic!("unexpected permission: {other}"),
        }
    }

    #[test]
    fn test_compounds_preserve_order() {
        let perm = any_of(vec![has_role("b"), has_role("a")]);
        let names: Vec<String> = perm.children().iter().map(|p| p.to_string()).collect();

        assert_eq!(names, vec!["HAS_ROLE[b]", "HAS_ROLE[a]"]);
    }
}
