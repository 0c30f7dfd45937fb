//! Role pattern interpolation.
//!
//! A role requirement may name request parameters, as in `team-{id}`. The
//! pattern is parsed once into literal and placeholder segments, then
//! resolved against a [`RoleParams`] map on every evaluation.
//!
//! A placeholder is `{` followed by one or more characters other than `}`,
//! then `}`. Anything else is literal text: `{}` stays as written, and so does
//! a `{` that is never closed. Substituted values are copied verbatim and are
//! never scanned again.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use crate::error::{CoreError, Result};

/// Placeholder name to value, supplied fresh for each evaluation.
pub type RoleParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(Range<usize>),
    Placeholder(Range<usize>),
}

/// A role string with `{name}` placeholders, parsed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RolePattern {
    /// Parse a role pattern.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = parse_segments(&raw);
        Self { raw, segments }
    }

    /// The pattern exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check if the pattern contains no placeholder.
    pub fn is_literal(&self) -> bool {
        !self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
    }

    /// Parameter names referenced by the pattern, in order of appearance.
    ///
    /// A name used twice appears twice.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(range) => Some(&self.raw[range.clone()]),
            Segment::Literal(_) => None,
        })
    }

    /// Resolve every placeholder against `params`.
    ///
    /// A pattern without placeholders is returned borrowed. Fails with
    /// [`CoreError::MissingRoleParameter`] on the first name absent from
    /// `params`.
    pub fn interpolate(&self, params: &RoleParams) -> Result<Cow<'_, str>> {
        if self.is_literal() {
            return Ok(Cow::Borrowed(&self.raw));
        }

        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(range) => out.push_str(&self.raw[range.clone()]),
                Segment::Placeholder(range) => {
                    let name = &self.raw[range.clone()];
                    let value = params
                        .get(name)
                        .ok_or_else(|| CoreError::MissingRoleParameter {
                            name: name.to_string(),
                            pattern: self.raw.clone(),
                        })?;
                    out.push_str(value);
                }
            }
        }

        Ok(Cow::Owned(out))
    }
}

impl fmt::Display for RolePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RolePattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RolePattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Resolve a role pattern in one shot.
pub fn interpolate_role(pattern: &str, params: &RoleParams) -> Result<String> {
    RolePattern::new(pattern)
        .interpolate(params)
        .map(Cow::into_owned)
}

fn parse_segments(raw: &str) -> Vec<Segment> {
    let bytes = raw.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' {
            // Braces are ASCII, so every index touched here is a char boundary.
            if let Some(offset) = raw[i + 1..].find('}') {
                let close = i + 1 + offset;
                if close > i + 1 {
                    if literal_start < i {
                        segments.push(Segment::Literal(literal_start..i));
                    }
                    segments.push(Segment::Placeholder(i + 1..close));
                    i = close + 1;
                    literal_start = i;
                    continue;
                }
            } else {
                break;
            }
        }
        i += 1;
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(literal_start..bytes.len()));
    }

    segments
}
