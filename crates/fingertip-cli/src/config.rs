//! CLI configuration

use crate::commands::{Cli, OutputFormat};
use crate::error::CliResult;
use fingertip::GestureConfig;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - gesture-level logging
    Verbose,
    /// Debug - per-contact logging
    Debug,
}

impl Verbosity {
    /// Map `-q` / `-v` counts to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "fingertip=debug,info",
            Self::Debug => "fingertip=trace,debug",
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Output format
    pub format: OutputFormat,
    /// Gesture pacing
    pub gestures: GestureConfig,
}

impl CliConfig {
    /// Build from parsed arguments, loading `--config` if given
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let gestures = match &cli.config {
            Some(path) => GestureConfig::load(path)?,
            None => GestureConfig::default(),
        };
        Ok(Self {
            verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
            format: cli.format,
            gestures,
        })
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set gesture pacing
    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }
}
