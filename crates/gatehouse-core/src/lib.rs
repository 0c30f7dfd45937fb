//! # Gatehouse Core
//!
//! Pure primitives for Gatehouse: principals and role patterns.
//!
//! This crate contains no I/O and no global state. It describes *who* is
//! asking (a [`Principal`] and its role set) and how a role requirement such
//! as `team-{id}` is resolved against per-request parameters.
//!
//! ## Key Types
//!
//! - [`Principal`] - An authenticated actor exposing a set of role strings
//! - [`SimplePrincipal`] - A ready-made principal for callers without their own
//! - [`RolePattern`] - A role string with `{name}` placeholders, parsed once
//! - [`RoleParams`] - Placeholder name to value, supplied per evaluation
//!
//! ## Interpolation
//!
//! ```rust
//! use gatehouse_core::{interpolate_role, RoleParams};
//!
//! let mut params = RoleParams::new();
//! params.insert("id".to_string(), "7".to_string());
//!
//! assert_eq!(interpolate_role("team-{id}", &params).unwrap(), "team-7");
//! ```

pub mod error;
pub mod interpolate;
pub mod principal;

pub use error::{CoreError, Result};
pub use interpolate::{interpolate_role, RoleParams, RolePattern};
pub use principal::{Principal, SimplePrincipal, WILDCARD_ROLE};
