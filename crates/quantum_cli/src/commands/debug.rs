//! The main flow: bug report -> model -> rendered universe cards.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use console::style;
use quantum_core::{DebugRequest, DebugSession, QuantumReply, SessionStore, Solution};
use quantum_llm::{GeminiConfig, GeminiProvider, QuantumDebugger};

use crate::cli::DebugArgs;
use crate::output;

/// Canned trade-off lines substituted by card position when the model left
/// the field blank.
const FALLBACK_TRADEOFFS: [&str; 5] = [
    "Sacrifices stability for speed. Reality may tear.",
    "This solution is cursed. Use only in desperation.",
    "Perfect, but at what cost? A universe dies for every execution.",
    "Rock solid. No surprises. No hope.",
    "Completely unpredictable. Quantum gods weep.",
];

pub async fn run(args: DebugArgs) -> Result<()> {
    let code = match (&args.code_file, args.code) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("read code file {}", path.display()))?,
        (None, Some(code)) => code,
        (None, None) => bail!("provide the buggy code via --code-file or --code"),
    };
    if code.trim().is_empty() {
        bail!("the provided code is empty");
    }

    let mut request = DebugRequest::new(args.language, args.description, code);
    if let Some(error) = args.error {
        request = request.with_error_message(error);
    }
    if let Some(context) = args.context {
        request = request.with_context(context);
    }

    let api_key = std::env::var(GeminiProvider::API_KEY_ENV).unwrap_or_default();
    let mut config = GeminiConfig::new(api_key);
    if let Some(model) = args.model.or_else(|| std::env::var("QDBG_MODEL").ok()) {
        config = config.with_model(model);
    }
    let provider = GeminiProvider::new(config)?;
    let debugger = QuantumDebugger::new(Arc::new(provider));
    tracing::debug!(language = %request.language, "submitting debug request");

    let spinner = output::spinner("Splitting the timeline...");
    let reply = match debugger.request_reply(&request).await {
        Ok(reply) => {
            output::spinner_success(
                &spinner,
                &format!("{} universes responded", reply.solutions.len()),
            );
            reply
        }
        Err(e) => {
            output::spinner_error(&spinner, "the multiverse did not answer");
            return Err(e.into());
        }
    };

    render_reply(&reply);

    if !args.no_save {
        let session = DebugSession::new(request, reply);
        let store = super::open_store()?;
        store.add_session(&session)?;
        output::dim(&format!("session {} saved", session.id));
    }
    Ok(())
}

/// Render an extraction result. A transport success that parsed to nothing
/// gets an explicit notice instead of a silently empty screen.
pub(crate) fn render_reply(reply: &QuantumReply) {
    if reply.is_empty() {
        output::warning("no solutions could be parsed from the model reply");
    }
    if output::is_json() {
        output::data("reply", reply);
        return;
    }

    for (index, solution) in reply.solutions.iter().enumerate() {
        render_solution(index, solution);
    }
    if let Some(recommendation) = &reply.recommendation {
        println!();
        output::header("🎲 RECOMMENDATION");
        println!("{recommendation}");
    }
}

fn render_solution(index: usize, solution: &Solution) {
    println!();
    output::header(&format!("🌌 UNIVERSE {}: {}", index + 1, solution.name));
    output::kv("Philosophy", &solution.philosophy);
    output::kv("Approach", &solution.approach);
    output::kv("Chaos Rating", &solution.chaos_label());
    println!("{}", style(format!("```{}", solution.language)).dim());
    println!("{}", solution.code);
    println!("{}", style("```").dim());
    output::kv(
        "Trade-offs",
        solution.tradeoffs_or(FALLBACK_TRADEOFFS[index % FALLBACK_TRADEOFFS.len()]),
    );
}
