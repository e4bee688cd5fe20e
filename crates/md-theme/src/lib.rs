//! # md-theme — Material theme JSON → CSS custom properties
//!
//! ```text
//! theme.json
//!     │
//!     ▼
//! scheme.rs:     ThemeDocument { light, dark } (role order preserved)
//!     │
//!     ▼
//! skip.rs:       which roles get a tonal palette
//!     │
//!     ▼
//! stylesheet.rs: RGB triples + palettes per role (md-color),
//!                kebab-case names (naming.rs), CSS text
//! ```

pub mod error;
pub mod naming;
pub mod scheme;
pub mod skip;
pub mod stylesheet;

pub use error::ThemeError;
pub use scheme::{Role, Scheme, SchemeKind, ThemeDocument};
pub use skip::PaletteSkipList;
pub use stylesheet::{RenderSummary, Stylesheet, StylesheetOptions};
