//! Command-line argument definitions for the Floorplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, which floor is drawn, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the floor plan renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON dataset with buildings and units
    #[arg(help = "Path to the input dataset")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Building to draw; the first building of the dataset by default
    #[arg(short, long)]
    pub building: Option<u64>,

    /// Floor to draw; the configured default floor otherwise
    #[arg(short, long)]
    pub floor: Option<i32>,

    /// Label of a unit on the floor to draw in the hovered state
    #[arg(long)]
    pub hover: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
