//! # Command-Line Interface Module
//!
//! This module defines the command-line interface (CLI) for the application.
//! It uses the `clap` crate to parse arguments and subcommands, and then
//! dispatches to the appropriate handlers in the `core::commands` module.
//!
//! The main components are:
//! - `Cli`: The top-level struct representing the CLI arguments.
//! - `Commands`: An enum defining the main subcommands (e.g., `sites`, `completion`, `config`).
//! - `SitesSubcommand`: An enum for subcommands related to site scanning.
//! - `CompletionSubcommand`: An enum for generating shell completion scripts.
//! - `cli_match()`: The main function that parses CLI input and executes the matched command.
//! - `sites()`: A helper function to dispatch `SitesSubcommand` variants.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::path::PathBuf;

use crate::core::{commands, types::OutputFormat};
use crate::utils::app_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::types::LogLevel;

#[derive(Parser, Debug)]
#[command(
    name = "tsite",
    author,
    about,
    long_about = "thermal inspection site scanner",
    version
)]
/// Represents the command-line interface arguments for the application.
///
/// This struct is parsed by `clap` to define the available commands, options, and flags.
pub struct Cli {
    /// Specifies a custom configuration file path.
    /// If not provided, the application will look for a default configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enables or disables debug mode.
    /// This can affect logging verbosity and other debugging features.
    #[arg(id = "debug", short, long = "debug", value_name = "DEBUG")]
    pub debug: Option<bool>,

    /// Sets the logging level for the application.
    /// Valid options are "error", "warn", "info", "debug" and "trace".
    #[arg(
        id = "log_level",
        short,
        long = "log-level",
        value_name = "LOG_LEVEL"
    )]
    pub log_level: Option<LogLevel>,

    /// The subcommand to execute.
    #[clap(subcommand)]
    command: Commands,
}

/// Defines the main subcommands available in the CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Subcommands for scanning the inspection database for sites.
    ///
    /// A site is an immediate subdirectory of the configured base path;
    /// each one holds the thermal captures taken at a physical location.
    #[clap(
        name = "sites",
        about = "Scan the inspection database for sites",
        long_about = "Tools for enumerating site directories under the database base path"
    )]
    Sites {
        /// The specific `SitesSubcommand` to execute.
        #[clap(subcommand)]
        subcommand: SitesSubcommand,
    },
    /// Subcommands for generating shell completion scripts.
    ///
    /// These commands allow users to generate autocompletion scripts for
    /// common shells like Bash, Zsh, and Fish, improving the usability of the CLI.
    #[clap(
        name = "completion",
        about = "Generate completion scripts",
        long_about = None,
        )]
    Completion {
        /// The specific `CompletionSubcommand` (shell type) for which to generate the script.
        #[clap(subcommand)]
        subcommand: CompletionSubcommand,
    },
    /// Displays the current application configuration.
    ///
    /// This command prints the active configuration, which is a result of merging
    /// default settings, configuration file values, and command-line arguments.
    #[clap(
        name = "config",
        about = "Show Configuration",
        long_about = None,
    )]
    Config,
}

/// Defines subcommands for shell completion script generation.
#[derive(Subcommand, PartialEq, Debug)]
enum CompletionSubcommand {
    /// Generates the autocompletion script for Bash.
    #[clap(about = "generate the autocompletion script for bash")]
    Bash,
    /// Generates the autocompletion script for Zsh.
    #[clap(about = "generate the autocompletion script for zsh")]
    Zsh,
    /// Generates the autocompletion script for Fish.
    #[clap(about = "generate the autocompletion script for fish")]
    Fish,
}

/// Defines subcommands related to site scanning.
#[derive(Subcommand, PartialEq, Debug)]
enum SitesSubcommand {
    /// Lists the site directories found under the base path.
    ///
    /// Enumerates the immediate subdirectories of the given path (or of the
    /// configured `scan.base_path` when no path is given) and prints their
    /// names. Regular files are ignored.
    #[clap(
        name = "list",
        about = "List site directories under the base path"
    )]
    List {
        /// The base path to scan. Defaults to the configured `scan.base_path`.
        path: Option<PathBuf>,

        /// The output format for the listing: `text` or `json`. Defaults to `text`.
        #[arg(long, value_name = "FORMAT", default_value = "text", value_parser = parse_output_format)]
        format: OutputFormat,
    },
}

/// Parses command-line arguments, merges configurations, and executes the appropriate command.
///
/// This is the main entry point for the CLI logic. It performs the following steps:
/// 1. Parses the raw command-line arguments using `Cli::parse()`.
/// 2. Merges any configuration specified via the `--config` option with `AppConfig`.
/// 3. Retrieves the `clap::Command` instance and its matches.
/// 4. Merges command-line arguments (which might override config file settings) into `AppConfig`.
/// 5. Matches the parsed subcommand and dispatches to the corresponding handler function
///    (e.g., `sites()` for `Sites` subcommands, or generates shell completions).
pub fn cli_match() -> Result<()> {
    // Parse the command line arguments
    let cli = Cli::parse();

    // Merge clap config file if the value is set
    AppConfig::merge_config(cli.config.as_deref())?;

    let app = Cli::command();
    let matches = app.get_matches();

    AppConfig::merge_args(matches)?;

    // Execute the subcommand
    match &cli.command {
        Commands::Sites { subcommand } => sites(subcommand)?,
        Commands::Completion { subcommand } => {
            let mut app = Cli::command();
            match subcommand {
                CompletionSubcommand::Bash => {
                    generate(Bash, &mut app, "tsite", &mut std::io::stdout());
                }
                CompletionSubcommand::Zsh => {
                    generate(Zsh, &mut app, "tsite", &mut std::io::stdout());
                }
                CompletionSubcommand::Fish => {
                    generate(Fish, &mut app, "tsite", &mut std::io::stdout());
                }
            }
        }
        Commands::Config => commands::config()?,
    }

    Ok(())
}

/// Handles the dispatch of `SitesSubcommand` variants to their respective command functions.
pub(crate) fn sites(subcommand: &SitesSubcommand) -> Result<()> {
    match subcommand {
        SitesSubcommand::List { path, format } => commands::sites_list(path.as_deref(), format),
    }
}

/// Parses a string slice into an `OutputFormat` enum.
///
/// This function is used by `clap` as a value parser for arguments
/// that specify an output format. It converts common string representations
/// (case-insensitive "text", "json") into their corresponding
/// `OutputFormat` variants.
fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}", s)),
    }
}
