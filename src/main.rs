mod cli;
mod document;
mod error;
mod rewriter;
mod utils;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var(utils::verbose::VERBOSE_ENV, "1");
        }
    }

    let result = workflow::execute_rewrite(
        &cli.input_file,
        &cli.source_substring,
        &cli.new_version,
        cli.dry_run,
    );

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
