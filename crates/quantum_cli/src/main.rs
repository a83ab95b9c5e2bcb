//! CLI entry point for the quantum debugger.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Env loading order: ~/.qdbg/env first, then the project .env. Neither is
/// required; GEMINI_API_KEY may come from the shell directly.
fn load_env() {
    if let Some(home) = dirs::home_dir() {
        let env_path = home.join(".qdbg").join("env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }
    }
    let _ = dotenvy::dotenv();
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "quantum_cli=debug,quantum_core=debug,quantum_llm=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    load_env();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
