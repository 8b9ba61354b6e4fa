//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use snippa_core::ExecutionContext;

/// Snippa - Git-backed snippet manager
#[derive(Parser, Debug)]
#[command(name = "snippa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Managed root directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Clone the snippet repository and run the first discovery
    ///
    /// Examples:
    ///   snippa setup https://github.com/user/snippets
    Setup {
        /// Git URL of the snippet repository
        url: String,
    },

    /// Rescan the snippets directory and rebuild the registry
    Refresh,

    /// Pull the snippet repository and apply the changes
    Pull,

    /// Run the webhook sync and print the transport response as JSON
    Webhook,

    /// List cached snippets and their enabled state
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Enable snippets by file name (added to the current enabled set)
    Enable {
        /// Snippet file names, e.g. checkout.php
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Disable snippets by file name
    Disable {
        /// Snippet file names to disable
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Replace the enabled set wholesale
    SetEnabled {
        /// The complete new enabled set, in order
        files: Vec<String>,
    },

    /// Show or set the tag allow-list
    ///
    /// With no value, prints the current allow-list. Setting an empty
    /// string clears it. The list takes effect at the next refresh or pull.
    Tags {
        /// Comma-separated tags, e.g. "woocommerce,checkout"
        value: Option<String>,
    },

    /// Load enabled snippets for one execution context
    Load {
        /// Which side of the host to load for
        #[arg(short, long, value_enum, default_value = "frontend")]
        context: ContextArg,
    },

    /// Show an overview of the managed snippet checkout
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Execution context flag for the load command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextArg {
    Frontend,
    Backend,
}

impl From<ContextArg> for ExecutionContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Frontend => ExecutionContext::Frontend,
            ContextArg::Backend => ExecutionContext::Backend,
        }
    }
}
