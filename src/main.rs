// SPDX-License-Identifier: MIT
//
// md-theme-css — turn a Material Design theme JSON into CSS custom
// properties holding RGB triples, plus tonal palettes per accent role.
//
// This binary wires the crates together:
//
//   md-theme → theme document, skip-list, stylesheet emitter
//   md-color → hex parsing, OKLCH tonal palettes (used by md-theme)
//
//   theme.json ─► ThemeDocument ─► Stylesheet ─► theme-rgb.css
//
// One read, one write, no retries. Any failure prints `error: ...` and
// exits with status 1.

mod output;

use std::borrow::Cow;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use md_theme::{PaletteSkipList, Stylesheet, StylesheetOptions, ThemeDocument};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Suffix appended to the input file stem when `--output` is omitted.
const DEFAULT_OUTPUT_SUFFIX: &str = "-rgb.css";

#[derive(Parser, Debug)]
#[command(name = "md-theme-css")]
#[command(version, about = "Convert a Material theme JSON into CSS RGB variables", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Material theme JSON file (`{ "light": {..}, "dark": {..} }`)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output CSS file [default: <input-name>-rgb.css]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also skip the tonal palette for ROLE (repeatable)
    #[arg(long = "skip", value_name = "ROLE")]
    skip: Vec<String>,

    /// Generate palettes for the neutral roles too (surface, outline, ...)
    #[arg(long)]
    no_default_skip: bool,

    /// Log every role as it is processed
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn stylesheet_options(&self) -> StylesheetOptions {
        let skip = if self.no_default_skip {
            PaletteSkipList::empty()
        } else {
            PaletteSkipList::default()
        };
        StylesheetOptions {
            skip: skip.with_extra(self.skip.iter().cloned()),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// Parse arguments, with `-v` as the short version flag.
fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command()
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
        .try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// `<dir>/palette.json` → `palette-rgb.css` in the working directory.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or(Cow::Borrowed("theme"), |s| s.to_string_lossy());
    PathBuf::from(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let doc = ThemeDocument::from_path(&cli.input)?;
    output::status(
        "Loaded",
        format!(
            "{} ({} light roles, {} dark roles)",
            cli.input.display(),
            doc.light.len(),
            doc.dark.len()
        ),
    );

    let options = cli.stylesheet_options();
    debug!(skip = ?options.skip.iter().collect::<Vec<_>>(), "palette skip-list");

    let sheet = Stylesheet::build(&doc, &options);
    let summary = sheet.summary();
    if summary.failed > 0 {
        output::warn(format!(
            "{} tonal palette(s) could not be generated, see log above",
            summary.failed
        ));
    }

    let out = cli.output_path();
    fs::write(&out, sheet.to_string())
        .with_context(|| format!("failed to write {}", out.display()))?;

    output::status(
        "Finished",
        format!(
            "wrote {} ({} roles, {} palettes)",
            out.display(),
            summary.roles,
            summary.palettes
        ),
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = match parse_cli_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // help and version go to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        parse_cli_from(std::iter::once("md-theme-css").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_output_uses_input_stem() {
        assert_eq!(
            default_output_path(Path::new("themes/material-theme.json")),
            PathBuf::from("material-theme-rgb.css")
        );
        assert_eq!(default_output_path(Path::new("theme")), PathBuf::from("theme-rgb.css"));
        assert_eq!(default_output_path(Path::new("/")), PathBuf::from("theme-rgb.css"));
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&["-i", "in.json", "-o", "out.css"]);
        assert_eq!(cli.input, PathBuf::from("in.json"));
        assert_eq!(cli.output_path(), PathBuf::from("out.css"));

        let cli = parse(&["--input", "in.json"]);
        assert_eq!(cli.output_path(), PathBuf::from("in-rgb.css"));
    }

    #[test]
    fn input_is_required() {
        let err = parse_cli_from(["md-theme-css"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn version_short_flag_is_lowercase_v() {
        let err = parse_cli_from(["md-theme-css", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = parse_cli_from(["md-theme-css", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn skip_flags_build_options() {
        let options = parse(&["-i", "t.json", "--skip", "error", "--skip", "onError"]).stylesheet_options();
        assert!(options.skip.contains("surface"));
        assert!(options.skip.contains("error"));
        assert!(options.skip.contains("onError"));

        let options = parse(&["-i", "t.json", "--no-default-skip", "--skip", "scrim"]).stylesheet_options();
        assert_eq!(options.skip.iter().collect::<Vec<_>>(), ["scrim"]);
    }

    #[test]
    fn run_writes_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("theme.json");
        let out = dir.path().join("out.css");
        fs::write(&input, r##"{"light":{"primary":"#6750A4"},"dark":{"primary":"#D0BCFF"}}"##).unwrap();

        let cli = parse(&["-i", input.to_str().unwrap(), "-o", out.to_str().unwrap()]);
        run(&cli).unwrap();

        let css = fs::read_to_string(&out).unwrap();
        assert!(css.starts_with(":root {\n  --md-sys-color-primary: 103, 80, 164;\n"));
    }

    #[test]
    fn run_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.json");
        let cli = parse(&["-i", input.to_str().unwrap()]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}
