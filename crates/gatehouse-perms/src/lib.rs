//! # Gatehouse Permissions
//!
//! Composable access rules evaluated against a principal.
//!
//! ## Overview
//!
//! A [`Permission`] decides whether a principal may access a resource, given
//! the role parameters of the current request. Permissions are built once at
//! bootstrap, never mutated, and shared freely between threads.
//!
//! ## Key Concepts
//!
//! - **Open**: Granted to everyone, the only permission granted to anonymous callers
//! - **IsAuthenticated**: Granted to any principal
//! - **HasRole**: Granted to holders of a role such as `admin` or `team-{id}`
//! - **AnyOf / AllOf**: Short-circuiting OR and AND over child permissions
//! - **Witness**: The permission reported as having granted access
//!
//! The role `*` satisfies every role check.
//!
//! ## Usage
//!
//! ```rust
//! use gatehouse_core::{RoleParams, SimplePrincipal};
//! use gatehouse_perms::{any_of, has_role};
//!
//! let perm = any_of([has_role("admin"), has_role("team-{id}")]);
//!
//! let alice = SimplePrincipal::new("alice").with_role("team-7");
//! let mut params = RoleParams::new();
//! params.insert("id".to_string(), "7".to_string());
//!
//! let evaluation = perm.has(Some(&alice), &params).unwrap();
//! assert_eq!(evaluation.witness().unwrap().to_string(), "HAS_ROLE[team-{id}]");
//! ```

pub mod def;
pub mod error;
pub mod evaluation;
pub mod factory;
pub mod permission;

pub use def::PermissionDef;
pub use error::{PermsError, Result};
pub use evaluation::Evaluation;
pub use factory::{all_of, any_of, has_role, is_authenticated, open, IS_AUTHENTICATED, OPEN};
pub use permission::Permission;
