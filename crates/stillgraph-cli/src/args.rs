//! Command-line argument definitions for the Stillgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the graph input, the output path and
//! format, configuration file selection, canvas overrides, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Stillgraph renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph file (JSON, or TOML by extension)
    #[arg(
        help = "Path to the input graph file",
        required_unless_present = "placeholder"
    )]
    pub input: Option<String>,

    /// Path to the output file; `.html` writes a host page, anything else bare SVG
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Canvas width, overriding the configured value
    #[arg(long)]
    pub width: Option<f32>,

    /// Canvas height, overriding the configured value
    #[arg(long)]
    pub height: Option<f32>,

    /// Id of the mount point in the generated host page
    #[arg(long, default_value = "visualization")]
    pub mount: String,

    /// Render the placeholder sample for the named system instead of an input file
    #[arg(long, value_name = "SYSTEM", conflicts_with = "input")]
    pub placeholder: Option<String>,
}
