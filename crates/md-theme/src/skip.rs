//! Roles that never get a tonal palette.
//!
//! Neutral surfaces, outlines and shadows are single-purpose colors; eleven
//! shades of `scrim` are just noise in the stylesheet. The list is a plain
//! value handed to the emitter, so callers can widen or replace it.

use std::collections::BTreeSet;

/// Set of raw (camelCase) role names excluded from palette generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteSkipList {
    roles: BTreeSet<String>,
}

impl PaletteSkipList {
    /// Neutral Material roles skipped by default.
    pub const MATERIAL_NEUTRALS: [&'static str; 9] = [
        "background",
        "surface",
        "surfaceTint",
        "shadow",
        "scrim",
        "outline",
        "outlineVariant",
        "surfaceDim",
        "surfaceBright",
    ];

    /// A skip-list that lets every role through.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            roles: BTreeSet::new(),
        }
    }

    /// Return a copy that also skips `roles`.
    #[must_use]
    pub fn with_extra<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    /// Whether `role` is excluded from palette generation.
    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

impl Default for PaletteSkipList {
    fn default() -> Self {
        Self::MATERIAL_NEUTRALS.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for PaletteSkipList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::empty().with_extra(iter)
    }
}
