use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tfmv",
    about = "Replace the version of Terraform module blocks whose source contains a substring",
    version,
    author
)]
pub struct Cli {
    /// Path to the Terraform file to rewrite in place
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Substring to look for in the module's `source` line
    #[arg(value_name = "SOURCE_SUBSTRING")]
    pub source_substring: String,

    /// Value to write after `version =`
    #[arg(value_name = "NEW_VERSION")]
    pub new_version: String,

    /// Print the rewritten file to stdout instead of modifying it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
