//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Quantum Debugger — parallel-universe bug fixes from your terminal
#[derive(Parser)]
#[command(name = "qdbg", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send a bug report across the multiverse and render the fixes
    Debug(DebugArgs),
    /// Browse, inspect and prune past debug sessions
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Inspect LLM providers
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
}

#[derive(Args)]
pub struct DebugArgs {
    /// Programming language of the buggy code (e.g. python, rust)
    #[arg(short, long)]
    pub language: String,

    /// What goes wrong
    #[arg(short, long)]
    pub description: String,

    /// Path to the buggy source file
    #[arg(long, conflicts_with = "code")]
    pub code_file: Option<PathBuf>,

    /// Buggy code passed inline
    #[arg(long)]
    pub code: Option<String>,

    /// Error message or stack trace, if any
    #[arg(short, long)]
    pub error: Option<String>,

    /// Extra context (runtime, inputs, when it happens)
    #[arg(short = 'x', long)]
    pub context: Option<String>,

    /// Model to use (default: gemini-2.0-flash, or QDBG_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Do not save this session to history
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved sessions
    List,
    /// Show one session in full
    Show {
        /// Session id (full or unique prefix)
        id: String,
    },
    /// Delete a session by id
    Delete {
        /// Session id (full or unique prefix)
        id: String,
    },
    /// Delete all saved sessions
    Clear,
}

#[derive(Subcommand)]
pub enum ProvidersAction {
    /// List registered providers
    List,
    /// List models available from a provider
    Models {
        /// Provider ID (e.g. gemini)
        provider: String,
    },
}
