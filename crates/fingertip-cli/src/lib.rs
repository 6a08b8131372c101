//! Fingertip CLI Library
//!
//! Previews gestures without touching a real input device: every gesture runs
//! against a [`fingertip::VirtualTouchscreen`] paced by a
//! [`fingertip::FakeClock`], and the accepted event trace is printed.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{
    parse_point, Cli, Commands, DragArgs, OutputFormat, PacingArgs, PinchArgs, TapArgs,
};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render, render_text};
pub use runner::{GestureReport, GestureRunner};

/// Execute a parsed command line and return what should be printed
pub fn run(cli: &Cli) -> CliResult<String> {
    let config = CliConfig::from_cli(cli)?;
    logging::init(config.verbosity);
    tracing::debug!(?config, "effective configuration");

    let runner = GestureRunner::new(config.gestures.clone());
    let report = match &cli.command {
        Commands::Pinch(args) => runner.pinch(args)?,
        Commands::Drag(args) => runner.drag(args)?,
        Commands::Tap(args) => runner.tap(args)?,
        Commands::Config => return Ok(config.gestures.to_yaml()?),
    };
    render(&report, config.format)
}
