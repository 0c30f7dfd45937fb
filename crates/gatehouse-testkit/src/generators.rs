//! Proptest generators for property-based testing.
//!
//! Role names are drawn from a small alphabet so that generated principals
//! and permissions overlap often.

use std::collections::BTreeSet;

use proptest::prelude::*;

use gatehouse_core::SimplePrincipal;
use gatehouse_perms::{all_of, any_of, has_role, is_authenticated, open, Permission};

/// Generate a role name from `a` to `e`.
pub fn role_name() -> impl Strategy<Value = String> {
    "[a-e]".prop_map(String::from)
}

/// Generate a role set, never containing the wildcard.
pub fn role_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(role_name(), 0..4)
}

/// Generate a principal without the wildcard role.
pub fn principal() -> impl Strategy<Value = SimplePrincipal> {
    role_set().prop_map(|roles| SimplePrincipal::new("generated").with_roles(roles))
}

/// Generate a leaf permission with a literal role pattern.
pub fn leaf_permission() -> impl Strategy<Value = Permission> {
    prop_oneof![
        Just(open()),
        Just(is_authenticated()),
        role_name().prop_map(|role| has_role(role)),
    ]
}

/// Generate a permission tree of literal role checks and combinators.
pub fn permission() -> impl Strategy<Value = Permission> {
    leaf_permission().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|ps| any_of(ps)),
            prop::collection::vec(inner, 0..4).prop_map(|ps| all_of(ps)),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::{Principal, RoleParams};

    proptest! {
        #[test]
        fn test_generated_principals_lack_wildcard(p in principal()) {
            prop_assert!(!p.is_wildcard());
        }

        #[test]
        fn test_generated_permissions_need_no_params(perm in permission()) {
            prop_assert!(perm.required_params().is_empty());
            prop_assert!(perm.has(None, &RoleParams::new()).is_ok());
        }
    }
}
