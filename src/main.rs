// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Campusnav CLI - campus routes, navigation history and events

use anyhow::{Context, Result};
use campusnav::commands;
use campusnav::config::{self, Config};
use campusnav::workspace::Workspace;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campusnav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "CAMPUSNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, env = "CAMPUSNAV_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest route between two locations
    Route {
        /// Starting location
        start: String,

        /// Destination
        destination: String,

        /// Do not add the query to the navigation history
        #[arg(long)]
        no_record: bool,
    },

    /// List campus locations and their direct paths
    Locations {
        /// Print the campus in its stored JSON form
        #[arg(long)]
        json: bool,
    },

    /// Export the campus map, optionally highlighting a route
    Map {
        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Route start to highlight
        #[arg(long)]
        from: Option<String>,

        /// Route destination to highlight
        #[arg(long)]
        to: Option<String>,

        /// Output file (stdout if not specified); the format's extension is
        /// added when the name has none
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Navigation history
    History {
        /// Action: list, search, clear, export, replay
        #[arg(default_value = "list")]
        action: String,

        /// Keyword (search), file (export) or entry number (replay)
        arg: Option<String>,
    },

    /// Campus events
    Event {
        /// Action: add, list, upcoming, search
        #[arg(default_value = "list")]
        action: String,

        /// Event name (add) or keyword (search)
        name: Option<String>,

        /// Event date, YYYY-MM-DD (add)
        date: Option<String>,

        /// Event location (add)
        #[arg(short, long)]
        location: Option<String>,

        /// Month to list, YYYY-MM (list; defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Favorite locations and routes
    Favorite {
        /// Action: list, add, remove, route
        #[arg(default_value = "list")]
        action: String,

        /// Location (add, route) or route name (add, remove, route)
        name: Option<String>,

        /// Route start (add a named route, or the start when routing to a favorite location)
        #[arg(long)]
        from: Option<String>,

        /// Route destination (add a named route, or the destination when routing from a favorite location)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show configuration
    Config {
        /// Configuration key (omit to print everything)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn init_logging(cli: &Cli, config: &Config) {
    let default_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    init_logging(&cli, &config);

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let open = || {
        Workspace::open(&config.data_dir, &config)
            .with_context(|| format!("Failed to open workspace at {}", config.data_dir.display()))
    };

    match cli.command {
        Commands::Route { start, destination, no_record } => {
            commands::route::run(&mut open()?, &start, &destination, !no_record, color)
        }
        Commands::Locations { json } => commands::locations::run(&open()?.campus, json),
        Commands::Map { format, from, to, output } => {
            commands::export::run(&open()?.campus, &format, from, to, output)
        }
        Commands::History { action, arg } => {
            commands::history::run(&mut open()?, &action, arg, color)
        }
        Commands::Event { action, name, date, location, month } => {
            commands::event::run(&mut open()?, &action, name, date, location, month)
        }
        Commands::Favorite { action, name, from, to } => {
            commands::favorite::run(&mut open()?, &action, name, from, to, color)
        }
        Commands::Config { key } => commands::config::run(&config, key.as_deref()),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
