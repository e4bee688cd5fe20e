//! Theme document model.
//!
//! A theme is two role → color maps, `light` and `dark`. Role order follows
//! the input file so the stylesheet reads the same way the theme does.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ThemeError;

/// One color role as found in a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Role<'a> {
    /// Raw role name, e.g. `primaryContainer`.
    pub name: &'a str,
    /// The color, if the JSON value was a string at all.
    pub hex: Option<&'a str>,
}

/// A role → color mapping for one scheme.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Scheme {
    roles: Map<String, Value>,
}

impl Scheme {
    /// Roles in document order.
    pub fn roles(&self) -> impl Iterator<Item = Role<'_>> {
        self.roles.iter().map(|(name, value)| Role {
            name: name.as_str(),
            hex: value.as_str(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Scheme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            roles: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }
}

/// Which scheme a role belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Light,
    Dark,
}

impl SchemeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A parsed theme: the light and dark schemes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ThemeDocument {
    pub light: Scheme,
    pub dark: Scheme,
}

impl ThemeDocument {
    /// Parse a theme from JSON text.
    ///
    /// Accepts either `{ "light": {..}, "dark": {..} }` or a Material Theme
    /// Builder export, which nests both schemes under `"schemes"` next to
    /// `seed`, `coreColors` and friends.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Parse`] on malformed JSON or a missing scheme.
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        let mut value: Value = serde_json::from_str(text)?;
        if value.get("light").is_none() && value.get("dark").is_none() {
            if let Some(schemes) = value.get_mut("schemes") {
                value = schemes.take();
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a theme file.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Read`] if the file cannot be read, otherwise as
    /// [`ThemeDocument::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    #[must_use]
    pub const fn scheme(&self, kind: SchemeKind) -> &Scheme {
        match kind {
            SchemeKind::Light => &self.light,
            SchemeKind::Dark => &self.dark,
        }
    }
}
