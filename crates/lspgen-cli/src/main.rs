//! lspgen CLI - Go declaration generator for protocol metamodels
//!
//! Commands:
//! - `lspgen generate` - Render every configured target and write it
//! - `lspgen check` - Load the config and metamodel and render in memory

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod config;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "lspgen")]
#[command(author, version, about = "Generate Go enumerations and type aliases from an LSP metamodel", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every target and write the Go source files
    Generate {
        /// Path to lspgen.toml (default: ./lspgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Metamodel JSON, overriding the configured one
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Output directory, overriding the configured one
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write rendered source without running gofmt
        #[arg(long)]
        no_format: bool,

        /// Continue with remaining targets after a target fails
        #[arg(long)]
        keep_going: bool,
    },

    /// Validate the config and metamodel without writing files
    Check {
        /// Path to lspgen.toml (default: ./lspgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Metamodel JSON, overriding the configured one
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            config,
            model,
            output_dir,
            no_format,
            keep_going,
        } => generate::run(&generate::GenerateArgs {
            config,
            model,
            output_dir,
            no_format,
            keep_going,
        }),
        Commands::Check { config, model } => generate::check(config, model),
    }
}
