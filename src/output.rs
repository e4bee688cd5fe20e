// SPDX-License-Identifier: MIT
//
// User-facing status lines on stderr, cargo style:
//
//      Loaded theme.json (38 light roles, 38 dark roles)
//    Finished wrote theme-rgb.css

use console::style;

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("error").red().bold(), message.as_ref());
}
