//! Snippa CLI
//!
//! The command-line surface for the git-backed snippet manager. Commands
//! are thin adapters: they resolve the managed root, call into
//! snippa-core, and report.

mod cli;
mod commands;
mod context;
mod error;

use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(cmd, &root),
        None => {
            println!("{} Git-backed snippet manager", "snippa".green().bold());
            println!();
            println!("Run {} for available commands.", "snippa --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: &Path) -> Result<()> {
    match cmd {
        Commands::Setup { url } => commands::run_setup(root, &url),
        Commands::Refresh => commands::run_refresh(root),
        Commands::Pull => commands::run_pull(root),
        Commands::Webhook => commands::run_webhook(root),
        Commands::List { json } => commands::run_list(root, json),
        Commands::Enable { files } => commands::run_enable(root, &files),
        Commands::Disable { files } => commands::run_disable(root, &files),
        Commands::SetEnabled { files } => commands::run_set_enabled(root, &files),
        Commands::Tags { value } => commands::run_tags(root, value.as_deref()),
        Commands::Load { context } => commands::run_load(root, context.into()),
        Commands::Status => commands::run_status(root),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
