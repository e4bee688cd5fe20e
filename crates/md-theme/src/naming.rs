//! Role-name formatting.
//!
//! Material role names are camelCase (`onPrimaryContainer`); CSS custom
//! properties are kebab-case (`on-primary-container`).

use std::sync::LazyLock;

use regex::Regex;

/// A lowercase letter or digit immediately followed by an uppercase letter.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("word boundary pattern is valid"));

/// Convert a camelCase role name to kebab-case.
///
/// ```
/// use md_theme::naming::kebab_case;
///
/// assert_eq!(kebab_case("primaryContainer"), "primary-container");
/// assert_eq!(kebab_case("primary"), "primary");
/// ```
#[must_use]
pub fn kebab_case(role: &str) -> String {
    WORD_BOUNDARY.replace_all(role, "$1-$2").to_lowercase()
}

/// The custom property carrying a role's RGB triple.
#[must_use]
pub fn sys_color_var(role_kebab: &str) -> String {
    format!("--md-sys-color-{role_kebab}")
}

/// The custom property carrying one shade of a role's tonal palette.
#[must_use]
pub fn sys_color_shade_var(role_kebab: &str, shade: u16) -> String {
    format!("--md-sys-color-{role_kebab}-{shade}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_becomes_kebab() {
        assert_eq!(kebab_case("primaryContainer"), "primary-container");
        assert_eq!(kebab_case("onPrimaryContainer"), "on-primary-container");
        assert_eq!(kebab_case("surfaceContainerHighest"), "surface-container-highest");
        assert_eq!(kebab_case("inverseOnSurface"), "inverse-on-surface");
    }

    #[test]
    fn single_word_unchanged() {
        assert_eq!(kebab_case("primary"), "primary");
        assert_eq!(kebab_case("scrim"), "scrim");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn digit_before_uppercase_splits() {
        assert_eq!(kebab_case("tone90Fixed"), "tone90-fixed");
    }

    #[test]
    fn leading_or_repeated_capitals_do_not_split() {
        assert_eq!(kebab_case("Primary"), "primary");
        assert_eq!(kebab_case("surfaceRGB"), "surface-rgb");
    }

    #[test]
    fn variable_names() {
        assert_eq!(sys_color_var("primary-container"), "--md-sys-color-primary-container");
        assert_eq!(sys_color_shade_var("primary", 950), "--md-sys-color-primary-950");
    }
}
