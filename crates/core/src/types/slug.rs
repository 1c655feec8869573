//! Normalized slug identifiers derived from display names.

use serde::{Deserialize, Serialize};

/// A lowercase, hyphenated identifier derived from a display name
/// (e.g., `"Audemars Piguet"` → `"audemars-piguet"`).
///
/// Deserialization wraps the value as-is; catalog sources are expected to
/// ship already-normalized slugs. Use [`Slug::new`] to derive a slug from a
/// free-form name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a display name: lowercase, with each run of
    /// whitespace replaced by a single hyphen.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut out = String::with_capacity(source.len());
        let mut in_whitespace = false;
        for c in source.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    out.push('-');
                    in_whitespace = true;
                }
            } else {
                out.extend(c.to_lowercase());
                in_whitespace = false;
            }
        }
        Self(out)
    }

    /// Wrap an already-normalized slug without transforming it.
    #[must_use]
    pub fn raw(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
