//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use fingertip::Point;
use std::path::PathBuf;

/// Fingertip: preview synthetic touch gestures on a virtual touchscreen
#[derive(Parser, Debug)]
#[command(name = "fingertip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Gesture configuration file (YAML, or JSON with a .json extension)
    #[arg(long, global = true, env = "FINGERTIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Two-finger pinch symmetric about a center point
    Pinch(PinchArgs),

    /// One-finger drag between two points
    Drag(DragArgs),

    /// Single tap
    Tap(TapArgs),

    /// Print the effective configuration as YAML
    Config,
}

/// Trace output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One event per line plus a summary
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Pacing overrides shared by moving gestures
#[derive(Args, Debug, Clone, Default)]
pub struct PacingArgs {
    /// Interpolation steps (overrides the configuration)
    #[arg(long)]
    pub steps: Option<u32>,

    /// Delay between steps in milliseconds (overrides the configuration)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Arguments for the pinch command
#[derive(Args, Debug, Clone)]
pub struct PinchArgs {
    /// Pivot of the gesture, as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub center: Point,

    /// Offset from the center at the start, as DX,DY
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: Point,

    /// Offset from the center at the end, as DX,DY
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub to: Point,

    /// Pacing overrides
    #[command(flatten)]
    pub pacing: PacingArgs,
}

/// Arguments for the drag command
#[derive(Args, Debug, Clone)]
pub struct DragArgs {
    /// Start point, as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: Point,

    /// End point, as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub to: Point,

    /// Pacing overrides
    #[command(flatten)]
    pub pacing: PacingArgs,
}

/// Arguments for the tap command
#[derive(Args, Debug, Clone)]
pub struct TapArgs {
    /// Tap position, as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: Point,

    /// Contact time in milliseconds (overrides the configuration)
    #[arg(long)]
    pub hold_ms: Option<u64>,
}

/// Parse `X,Y` into a point
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x coordinate '{x}': {e}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y coordinate '{y}': {e}"))?;
    let p = Point::new(x, y);
    if !p.is_finite() {
        return Err(format!("coordinates must be finite, got '{s}'"));
    }
    Ok(p)
}
