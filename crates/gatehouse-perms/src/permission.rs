//! The permission algebra and its evaluation.
//!
//! A [`Permission`] is built once at bootstrap and evaluated for every
//! request. Evaluation is a pure function of the principal and the
//! per-request role parameters, so a single permission can be shared across
//! threads and evaluated concurrently without locking.

use std::fmt;

use gatehouse_core::{Principal, RoleParams, RolePattern};

use crate::error::Result;
use crate::evaluation::Evaluation;

/// A composable access rule.
///
/// Use the constructors in [`crate::factory`] rather than building variants
/// by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    /// Granted to everyone, including anonymous callers.
    Open,

    /// Granted to any authenticated principal.
    IsAuthenticated,

    /// Granted to principals holding the (interpolated) role, or the wildcard.
    HasRole(RolePattern),

    /// Granted if any child is granted.
    AnyOf(Vec<Permission>),

    /// Granted if every child is granted.
    AllOf(Vec<Permission>),
}

impl Permission {
    /// Evaluate this permission.
    ///
    /// `principal` is `None` for anonymous requests, which only [`Permission::Open`]
    /// grants. Children of compound permissions are evaluated in declaration
    /// order and evaluation stops as soon as the outcome is known.
    ///
    /// Fails only when a role pattern names a parameter absent from `params`.
    pub fn has<'a>(
        &'a self,
        principal: Option<&dyn Principal>,
        params: &RoleParams,
    ) -> Result<Evaluation<'a>> {
        let evaluation = match self {
            Permission::Open => Evaluation::Matched(self),
            Permission::IsAuthenticated => match principal {
                Some(_) => Evaluation::Matched(self),
                None => Evaluation::Unmatched,
            },
            Permission::HasRole(pattern) => {
                if role_matches(pattern, principal, params)? {
                    Evaluation::Matched(self)
                } else {
                    Evaluation::Unmatched
                }
            }
            Permission::AnyOf(children) => {
                let mut evaluation = Evaluation::Unmatched;
                for child in children {
                    evaluation = child.has(principal, params)?;
                    if evaluation.is_matched() {
                        break;
                    }
                }
                evaluation
            }
            Permission::AllOf(children) => {
                let mut evaluation = Evaluation::Matched(self);
                for child in children {
                    if !child.has(principal, params)?.is_matched() {
                        evaluation = Evaluation::Unmatched;
                        break;
                    }
                }
                evaluation
            }
        };

        tracing::trace!(
            permission = %self,
            matched = evaluation.is_matched(),
            "evaluated permission"
        );

        Ok(evaluation)
    }

    /// Evaluate this permission, discarding the witness.
    pub fn is_granted(
        &self,
        principal: Option<&dyn Principal>,
        params: &RoleParams,
    ) -> Result<bool> {
        Ok(self.has(principal, params)?.is_matched())
    }

    /// Check if this is an any-of or all-of.
    pub fn is_compound(&self) -> bool {
        matches!(self, Permission::AnyOf(_) | Permission::AllOf(_))
    }

    /// Direct children of a compound permission; empty otherwise.
    pub fn children(&self) -> &[Permission] {
        match self {
            Permission::AnyOf(children) | Permission::AllOf(children) => children,
            _ => &[],
        }
    }

    /// Every role parameter this permission may need, deduplicated, in order
    /// of first appearance.
    ///
    /// Useful at bootstrap to check that a route supplies the parameters its
    /// permission refers to.
    pub fn required_params(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_params(&mut names);
        names
    }

    fn collect_params<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Permission::HasRole(pattern) => {
                for name in pattern.placeholders() {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
            Permission::AnyOf(children) | Permission::AllOf(children) => {
                for child in children {
                    child.collect_params(names);
                }
            }
            Permission::Open | Permission::IsAuthenticated => {}
        }
    }
}

fn role_matches(
    pattern: &RolePattern,
    principal: Option<&dyn Principal>,
    params: &RoleParams,
) -> Result<bool> {
    let Some(principal) = principal else {
        return Ok(false);
    };

    // The wildcard skips interpolation, so it never trips on missing parameters.
    if principal.is_wildcard() {
        return Ok(true);
    }

    let role = pattern.interpolate(params).map_err(|e| {
        tracing::warn!(pattern = %pattern, error = %e, "cannot resolve role pattern");
        e
    })?;

    Ok(principal.has_role(&role))
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Permission]) -> fmt::Result {
    f.write_str("[")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{child}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Open => f.write_str("OPEN"),
            Permission::IsAuthenticated => f.write_str("IS_AUTHENTICATED"),
            Permission::HasRole(pattern) => write!(f, "HAS_ROLE[{pattern}]"),
            Permission::AnyOf(children) => {
                f.write_str("ANY_OF[")?;
                write_children(f, children)?;
                f.write_str("]")
            }
            Permission::AllOf(children) => {
                f.write_str("ALL_OF[")?;
                write_children(f, children)?;
                f.write_str("]")
            }
        }
    }
}
