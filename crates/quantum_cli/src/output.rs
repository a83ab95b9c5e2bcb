//! Terminal output helpers — styled text for humans, JSON lines for machines.
//!
//! `console` for colors (respects NO_COLOR, auto-disables when piped),
//! `comfy-table` for the history table, `indicatif` for the in-flight
//! spinner.

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Line<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit(level: &str, message: &str, data: Option<&JsonValue>) {
    let line = Line {
        level,
        message,
        data,
    };
    match serde_json::to_string(&line) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{{\"level\":\"{level}\"}}"),
    }
}

pub fn header(text: &str) {
    if is_json() {
        emit("info", text, None);
    } else {
        println!("{}", style(text).bold().magenta());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), text);
    }
}

pub fn error(text: &str) {
    if is_json() {
        let data = None;
        let line = Line {
            level: "error",
            message: text,
            data,
        };
        eprintln!("{}", serde_json::to_string(&line).unwrap_or_default());
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Emit a serializable value: pretty JSON in text mode too, since solution
/// payloads are the actual deliverable.
pub fn data<T: Serialize>(label: &str, value: &T) {
    let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
    if is_json() {
        emit("data", label, Some(&json_val));
    } else {
        let formatted =
            serde_json::to_string_pretty(&json_val).unwrap_or_else(|_| json_val.to_string());
        println!("{formatted}");
    }
}

/// Styled table for history listings.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| {
                Cell::new(h)
                    .fg(Color::Magenta)
                    .add_attribute(comfy_table::Attribute::Bold)
            })
            .collect::<Vec<_>>(),
    );
    table
}

/// Spinner shown while the model round trip is in flight. Hidden in JSON
/// mode so output stays line-structured.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(tpl) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}") {
        spinner.set_style(tpl);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.abandon();
    success(message);
}

pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.abandon();
    error(message);
}
