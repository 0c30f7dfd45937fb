//! The outcome of evaluating a permission.

use crate::permission::Permission;

/// Outcome of [`Permission::has`].
///
/// The witness of a match is not necessarily the permission that was
/// evaluated: an any-of reports the child that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation<'a> {
    /// Access granted, witnessed by this permission.
    Matched(&'a Permission),

    /// Access not granted.
    Unmatched,
}

impl<'a> Evaluation<'a> {
    /// Check if access was granted.
    pub fn is_matched(&self) -> bool {
        matches!(self, Evaluation::Matched(_))
    }

    /// Get the witness, if access was granted.
    pub fn witness(&self) -> Option<&'a Permission> {
        match *self {
            Evaluation::Matched(p) => Some(p),
            Evaluation::Unmatched => None,
        }
    }
}

impl<'a> From<Evaluation<'a>> for Option<&'a Permission> {
    fn from(evaluation: Evaluation<'a>) -> Self {
        evaluation.witness()
    }
}
