//! Saved session history: list, show, delete, clear.

use anyhow::{bail, Result};
use comfy_table::Cell;
use quantum_core::{DebugSession, QuantumReply, SessionStore, SqliteStore};
use serde::Serialize;

use super::debug::render_reply;
use crate::cli::HistoryAction;
use crate::output;

pub fn run(action: HistoryAction) -> Result<()> {
    let store = super::open_store()?;
    match action {
        HistoryAction::List => list(&store),
        HistoryAction::Show { id } => show(&store, &id),
        HistoryAction::Delete { id } => delete(&store, &id),
        HistoryAction::Clear => {
            store.clear()?;
            output::success("history cleared");
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct SessionSummary {
    id: String,
    created_at: String,
    language: String,
    solutions: usize,
    avg_chaos: Option<f64>,
}

fn summarize(session: &DebugSession) -> SessionSummary {
    SessionSummary {
        id: session.id.as_str().to_string(),
        created_at: session.created_at.to_rfc3339(),
        language: session.request.language.clone(),
        solutions: session.solution_count(),
        avg_chaos: session.avg_chaos,
    }
}

fn list(store: &SqliteStore) -> Result<()> {
    let sessions = store.list_sessions()?;
    if sessions.is_empty() {
        output::dim("no saved sessions");
        return Ok(());
    }

    if output::is_json() {
        let summaries: Vec<_> = sessions.iter().map(summarize).collect();
        output::data("sessions", &summaries);
        return Ok(());
    }

    let mut table = output::table(&["ID", "When", "Language", "Solutions", "Avg chaos"]);
    for session in &sessions {
        let avg = session
            .avg_chaos
            .map(|a| format!("{a:.1}"))
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            Cell::new(short_id(session)),
            Cell::new(session.created_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(&session.request.language),
            Cell::new(session.solution_count().to_string()),
            Cell::new(avg),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn short_id(session: &DebugSession) -> &str {
    &session.id.as_str()[..8.min(session.id.as_str().len())]
}

/// Resolve a full id or unique prefix against the saved sessions.
fn resolve(store: &SqliteStore, id: &str) -> Result<DebugSession> {
    let mut matches: Vec<DebugSession> = store
        .list_sessions()?
        .into_iter()
        .filter(|s| s.id.as_str().starts_with(id))
        .collect();
    match matches.len() {
        0 => bail!("no session with id '{id}'"),
        1 => Ok(matches.remove(0)),
        n => bail!("id '{id}' is ambiguous ({n} matches); use more characters"),
    }
}

fn show(store: &SqliteStore, id: &str) -> Result<()> {
    let session = resolve(store, id)?;

    output::kv("Session", session.id.as_str());
    output::kv(
        "When",
        &session.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    output::kv("Language", &session.request.language);
    output::kv("Bug", &session.request.bug_description);
    if let Some(avg) = session.avg_chaos {
        output::kv("Avg chaos", &format!("{avg:.1}"));
    }

    let reply = QuantumReply {
        solutions: session.solutions,
        recommendation: session.recommendation,
    };
    render_reply(&reply);
    Ok(())
}

fn delete(store: &SqliteStore, id: &str) -> Result<()> {
    let session = resolve(store, id)?;
    store.delete_session(&session.id)?;
    output::success(&format!("session {} deleted", session.id));
    Ok(())
}
