//! Response extractor: model free text -> ordered `Solution` records.
//!
//! The model is instructed to emit universe blocks of the shape
//!
//! ```text
//! 🌌 UNIVERSE <n>: <name>
//! Philosophy: <text>
//! Approach: <text>
//! Code Solution:
//! <fenced code block, optional language tag>
//! Chaos Rating: <digits><annotation>
//! Trade-offs: <text>
//! ```
//!
//! but nothing guarantees it complies. Extraction is a line-oriented scan:
//! the document is cut into regions at universe marker lines (bounded by the
//! next marker, the recommendation marker, or end of input), and each region
//! either yields a fully-populated [`Solution`] or is discarded whole.
//! Region boundaries are fence-aware: a marker-shaped line between an
//! opening and a closing fence is code, not a boundary. The scan never
//! fails; an unusable document yields an empty vec.

use serde::{Deserialize, Serialize};

use crate::solution::Solution;

const UNIVERSE_MARKER: &str = "🌌 UNIVERSE";
const RECOMMENDATION_MARKER: &str = "🎲";
const RECOMMENDATION_LABEL: &str = "RECOMMENDATION";
const FENCE: &str = "```";

/// Parsed model reply: solutions plus the optional trailing recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantumReply {
    pub solutions: Vec<Solution>,
    pub recommendation: Option<String>,
}

impl QuantumReply {
    /// Parse a raw model reply. Never fails; degenerate input produces an
    /// empty solution list.
    pub fn parse(raw: &str, requested_language: &str) -> Self {
        Self {
            solutions: extract_solutions(raw, requested_language),
            recommendation: extract_recommendation(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Extract every well-formed universe block, in document order.
///
/// `requested_language` is stamped on each record (lowercased); the fence's
/// own language tag is display metadata and is ignored here. Partial blocks
/// are dropped as a unit. Pure function, no state between calls.
pub fn extract_solutions(raw: &str, requested_language: &str) -> Vec<Solution> {
    let language = requested_language.trim().to_lowercase();
    let lines: Vec<&str> = raw.lines().collect();
    let in_fence = fence_parity(&lines);

    let markers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|&(i, line)| !in_fence[i] && is_universe_marker(line))
        .map(|(i, _)| i)
        .collect();

    let mut solutions = Vec::new();
    for (n, &start) in markers.iter().enumerate() {
        let next_marker = markers.get(n + 1).copied().unwrap_or(lines.len());
        // A recommendation section ends the last block early.
        let end = (start + 1..next_marker)
            .find(|&i| !in_fence[i] && is_recommendation_marker(lines[i]))
            .unwrap_or(next_marker);

        if let Some(solution) = parse_block(&lines[start..end], &language) {
            solutions.push(solution);
        } else {
            tracing::debug!(block = n + 1, "discarding malformed universe block");
        }
    }

    tracing::debug!(
        markers = markers.len(),
        extracted = solutions.len(),
        "extraction complete"
    );
    solutions
}

/// Text of the trailing `🎲 RECOMMENDATION` section, if any.
pub fn extract_recommendation(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw.lines().collect();
    let in_fence = fence_parity(&lines);
    let idx = (0..lines.len()).find(|&i| !in_fence[i] && is_recommendation_marker(lines[i]))?;

    let mut parts = Vec::new();
    if let Some((_, after)) = lines[idx].split_once(':') {
        parts.push(after);
    }
    parts.extend(&lines[idx + 1..]);
    let text = parts.join("\n").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Fence parity per line: whether the line sits between an opening and a
/// closing fence. Fence lines themselves are boundaries, not content; a
/// marker-shaped line can never be a fence line, so their own parity is
/// irrelevant.
fn fence_parity(lines: &[&str]) -> Vec<bool> {
    let mut inside = false;
    lines
        .iter()
        .map(|line| {
            if line.trim_start().starts_with(FENCE) {
                inside = !inside;
                false
            } else {
                inside
            }
        })
        .collect()
}

/// `🌌 UNIVERSE <n>:` with a numeric block index before the colon.
fn is_universe_marker(line: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix(UNIVERSE_MARKER) else {
        return false;
    };
    let Some((index, _)) = rest.split_once(':') else {
        return false;
    };
    let index = index.trim();
    !index.is_empty() && index.chars().all(|c| c.is_ascii_digit())
}

/// `🎲 RECOMMENDATION` with both the emoji and the label; a stray dice
/// emoji elsewhere in the text is not a section boundary.
fn is_recommendation_marker(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(RECOMMENDATION_MARKER)
        .is_some_and(|rest| rest.trim_start().starts_with(RECOMMENDATION_LABEL))
}

/// Parse one region (marker line through the line before the next bound).
/// Returns `None` if any section is missing, which discards the region.
fn parse_block(region: &[&str], language: &str) -> Option<Solution> {
    let name = region[0].split_once(':')?.1.trim();
    if name.is_empty() {
        return None;
    }

    let mut pos = 1;
    let philosophy = take_labeled(region, &mut pos, "Philosophy:")?;
    let approach = take_labeled(region, &mut pos, "Approach:")?;

    take_labeled(region, &mut pos, "Code Solution:")?;
    let code = take_fenced_code(region, &mut pos)?;

    let rating_line = take_labeled(region, &mut pos, "Chaos Rating:")?;
    let chaos_rating = parse_rating(rating_line);

    let tradeoffs = take_tradeoffs(region, &mut pos)?;

    Some(Solution {
        name: name.to_string(),
        philosophy: philosophy.trim().to_string(),
        approach: approach.trim().to_string(),
        code,
        language: language.to_string(),
        chaos_rating,
        tradeoffs,
    })
}

/// Advance past blank lines; the next content line must start with `label`.
/// Returns the text after the label and moves the cursor past the line.
fn take_labeled<'a>(region: &[&'a str], pos: &mut usize, label: &str) -> Option<&'a str> {
    while *pos < region.len() && region[*pos].trim().is_empty() {
        *pos += 1;
    }
    let rest = region.get(*pos)?.trim_start().strip_prefix(label)?;
    *pos += 1;
    Some(rest)
}

/// Capture the contents of one fenced code block. The opening fence may
/// carry a language tag (ignored); capture stops at the first closing
/// fence line. A bare fence line inside a string literal therefore ends
/// the capture early; inline backticks within a longer line pass through.
fn take_fenced_code(region: &[&str], pos: &mut usize) -> Option<String> {
    while *pos < region.len() && region[*pos].trim().is_empty() {
        *pos += 1;
    }
    if !region.get(*pos)?.trim_start().starts_with(FENCE) {
        return None;
    }
    *pos += 1;

    let body_start = *pos;
    while *pos < region.len() && !region[*pos].trim_start().starts_with(FENCE) {
        *pos += 1;
    }
    if *pos >= region.len() {
        // Unterminated fence: the block is structurally broken.
        return None;
    }
    let code = region[body_start..*pos].join("\n").trim().to_string();
    *pos += 1;

    // An empty code block for a matched record is a structural anomaly;
    // drop the record rather than emit a Solution with no code.
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

/// Leading base-10 digits of the rating line; trailing emoji or commentary
/// is ignored. No digits means unrated; out-of-range values are clamped
/// into 1..=10 instead of flowing downstream as-is.
fn parse_rating(rest: &str) -> Option<u8> {
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.clamp(1, 10) as u8)
}

/// The trade-offs text runs to the end of the region: the region bound is
/// the next universe marker, the recommendation marker or end of input, so
/// this capture can never swallow a following block.
fn take_tradeoffs(region: &[&str], pos: &mut usize) -> Option<String> {
    let first = take_labeled(region, pos, "Trade-offs:")?;
    let mut parts = vec![first];
    parts.extend(&region[*pos..]);
    *pos = region.len();
    Some(parts.join("\n").trim().to_string())
}
