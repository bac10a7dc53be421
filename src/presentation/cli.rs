//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Positional arguments are optional at the clap level so a missing
//!   directory or output name produces the tool's own startup message
//! - Flags override `SASSWATCH_*` variables and config files

use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorMode;
use crate::domain::value_objects::CompileStyle;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Expanded,
    Compressed,
}

impl From<StyleArg> for CompileStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Expanded => CompileStyle::Expanded,
            StyleArg::Compressed => CompileStyle::Compressed,
        }
    }
}

/// sasswatch - keep an @import manifest of a SCSS directory compiled
#[derive(Parser, Debug)]
#[command(name = "sasswatch")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "The manifest is regenerated whenever a .scss file is added or removed, \
                  and recompiled on every edit."
)]
pub struct Cli {
    /// Directory of stylesheets to watch
    pub watch_dir: Option<PathBuf>,

    /// Manifest file to generate (one @import per stylesheet)
    pub output: Option<PathBuf>,

    /// Compiled CSS output; without it only the manifest is maintained
    pub css_output: Option<PathBuf>,

    /// Overwrite an existing manifest without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Compiled CSS style
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Explicit config file (instead of ./sasswatch.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
