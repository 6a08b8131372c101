//! Fingertip CLI: preview synthetic touch gestures
//!
//! ## Usage
//!
//! ```bash
//! fingertip pinch --center 540,960 --from 50,0 --to 300,0
//! fingertip drag --from 100,100 --to 100,800 --steps 20 --format json
//! fingertip tap --at 10,10 --hold-ms 500
//! fingertip --config fingertip.yaml config
//! ```

use clap::Parser;
use fingertip_cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match fingertip_cli::run(&cli) {
        Ok(output) => {
            if !cli.quiet {
                print!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
