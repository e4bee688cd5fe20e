//! CSS stylesheet emission.
//!
//! Output has three blocks:
//!
//! ```text
//! :root { --md-sys-color-<role>: R, G, B; ... }            light scheme
//! @media (prefers-color-scheme: dark) { :root { ... } }    dark scheme
//! @theme { --color-<role>: var(--md-sys-color-<role>); }   light registration
//! ```
//!
//! Every role gets its RGB triple. Roles outside the skip-list also get
//! eleven `-<shade>` declarations from their tonal palette. Dark palettes
//! are written into the media block but are not registered in `@theme`;
//! they take effect by overriding the same variable names.

use std::fmt;

use md_color::{Rgb, TonalPalette, hex_to_rgb};
use tracing::{debug, warn};

use crate::naming::{kebab_case, sys_color_shade_var, sys_color_var};
use crate::scheme::{Scheme, SchemeKind, ThemeDocument};
use crate::skip::PaletteSkipList;

const INDENT: &str = "  ";

/// Knobs for [`Stylesheet::build`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylesheetOptions {
    /// Roles that get an RGB triple but no tonal palette.
    pub skip: PaletteSkipList,
}

/// Counts gathered while building, for status output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Roles emitted across both schemes.
    pub roles: usize,
    /// Tonal palettes emitted.
    pub palettes: usize,
    /// Roles left without a palette because of the skip-list.
    pub skipped: usize,
    /// Roles whose palette could not be generated.
    pub failed: usize,
}

/// One role, resolved to CSS-ready values.
#[derive(Clone, Debug)]
struct RoleEntry {
    kebab: String,
    rgb: Rgb,
    shades: Option<Vec<(u16, Rgb)>>,
}

/// A rendered-on-demand stylesheet for one theme document.
///
/// Build it once, then `to_string()` (or `write!`) it.
#[derive(Clone, Debug)]
pub struct Stylesheet {
    light: Vec<RoleEntry>,
    dark: Vec<RoleEntry>,
    summary: RenderSummary,
}

impl Stylesheet {
    /// Resolve every role of `doc` to RGB triples and tonal palettes.
    ///
    /// A palette that fails to generate is logged and left out; the role
    /// still gets its (possibly black) RGB triple.
    #[must_use]
    pub fn build(doc: &ThemeDocument, options: &StylesheetOptions) -> Self {
        let mut summary = RenderSummary::default();
        let light = resolve_scheme(&doc.light, SchemeKind::Light, &options.skip, &mut summary);
        let dark = resolve_scheme(&doc.dark, SchemeKind::Dark, &options.skip, &mut summary);
        Self {
            light,
            dark,
            summary,
        }
    }

    #[must_use]
    pub const fn summary(&self) -> RenderSummary {
        self.summary
    }
}

fn resolve_scheme(
    scheme: &Scheme,
    kind: SchemeKind,
    skip: &PaletteSkipList,
    summary: &mut RenderSummary,
) -> Vec<RoleEntry> {
    scheme
        .roles()
        .map(|role| {
            summary.roles += 1;
            let shades = if skip.contains(role.name) {
                summary.skipped += 1;
                None
            } else {
                palette_shades(role.name, role.hex, kind, summary)
            };
            RoleEntry {
                kebab: kebab_case(role.name),
                rgb: hex_to_rgb(role.hex),
                shades,
            }
        })
        .collect()
}

fn palette_shades(
    role: &str,
    hex: Option<&str>,
    kind: SchemeKind,
    summary: &mut RenderSummary,
) -> Option<Vec<(u16, Rgb)>> {
    let Some(hex) = hex else {
        warn!(scheme = kind.as_str(), role, "color is not a string, skipping tonal palette");
        summary.failed += 1;
        return None;
    };

    match TonalPalette::generate(hex) {
        Ok(palette) => {
            debug!(scheme = kind.as_str(), role, base = hex, "generated tonal palette");
            summary.palettes += 1;
            Some(palette.iter().map(|(shade, hex)| (shade, hex_to_rgb(hex))).collect())
        }
        Err(err) => {
            warn!(scheme = kind.as_str(), role, error = %err, "skipping tonal palette");
            summary.failed += 1;
            None
        }
    }
}

/// Write `name: value;` lines for every role (and shade) at `indent`.
fn write_declarations(f: &mut fmt::Formatter<'_>, roles: &[RoleEntry], indent: &str) -> fmt::Result {
    for role in roles {
        writeln!(f, "{indent}{}: {};", sys_color_var(&role.kebab), role.rgb)?;
        for (shade, rgb) in role.shades.iter().flatten() {
            writeln!(f, "{indent}{}: {rgb};", sys_color_shade_var(&role.kebab, *shade))?;
        }
    }
    Ok(())
}

/// Register light roles and shades as Tailwind-style theme colors.
fn write_registrations(f: &mut fmt::Formatter<'_>, roles: &[RoleEntry]) -> fmt::Result {
    for role in roles {
        writeln!(
            f,
            "{INDENT}--color-{}: var({});",
            role.kebab,
            sys_color_var(&role.kebab)
        )?;
        for (shade, _) in role.shades.iter().flatten() {
            writeln!(
                f,
                "{INDENT}--color-{}-{shade}: var({});",
                role.kebab,
                sys_color_shade_var(&role.kebab, *shade)
            )?;
        }
    }
    Ok(())
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        write_declarations(f, &self.light, INDENT)?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "@media (prefers-color-scheme: dark) {{")?;
        writeln!(f, "{INDENT}:root {{")?;
        write_declarations(f, &self.dark, &INDENT.repeat(2))?;
        writeln!(f, "{INDENT}}}")?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "@theme {{")?;
        write_registrations(f, &self.light)?;
        writeln!(f, "}}")
    }
}
