//! # Gatehouse Testkit
//!
//! Testing utilities for Gatehouse.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Ready-made principals, parameters, and route permissions
//! - **Generators**: Proptest strategies for principals and permission trees
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use gatehouse_testkit::generators::{permission, principal};
//!
//! proptest! {
//!     #[test]
//!     fn evaluation_is_pure(perm in permission(), p in principal()) {
//!         let params = Default::default();
//!         let first = perm.is_granted(Some(&p), &params).unwrap();
//!         prop_assert_eq!(first, perm.is_granted(Some(&p), &params).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use gatehouse_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let perm = fixture.team_permission();
//! assert!(perm.is_granted(Some(&fixture.member), &fixture.team_params()).unwrap());
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{params, principal, TestFixture};
