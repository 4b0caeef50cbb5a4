//! Command-line interface implementation for cmakegen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for cmakegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "cmakegen: CMakeLists generator for multi-module C++ projects", long_about = None)]
pub struct Args {
    /// Configuration file (JSON or YAML). Looked up in the project root when omitted
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root containing the module directories
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Only generate modules whose name matches this glob; may be repeated
    #[arg(short, long = "module", value_name = "PATTERN")]
    pub modules: Vec<String>,

    /// Continue with the remaining modules when one fails
    #[arg(short, long)]
    pub keep_going: bool,

    /// List the built-in modules and exit
    #[arg(long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
