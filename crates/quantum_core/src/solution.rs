use serde::{Deserialize, Serialize};

/// One parallel-universe bug fix extracted from a model reply.
///
/// A `Solution` is only constructed when every section of its universe block
/// was present in the source document; there are no half-populated records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Universe label, e.g. "The Elegant Universe".
    pub name: String,
    /// One-paragraph coding philosophy of that universe.
    pub philosophy: String,
    /// One-line summary of the approach.
    pub approach: String,
    /// The fixed code, verbatim (trimmed). Never empty.
    pub code: String,
    /// Language echoed from the original request, lowercase. Never derived
    /// from the document or the fence tag.
    pub language: String,
    /// How unconventional the fix is, clamped to 1..=10. `None` when the
    /// rating line carried no parseable digits.
    #[serde(default)]
    pub chaos_rating: Option<u8>,
    /// What the solution sacrifices. May be blank in a degenerate reply;
    /// display layers substitute a fallback via [`Solution::tradeoffs_or`].
    pub tradeoffs: String,
}

impl Solution {
    /// Trade-offs text, or `fallback` when the captured text is blank.
    pub fn tradeoffs_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.tradeoffs.trim().is_empty() {
            fallback
        } else {
            &self.tradeoffs
        }
    }

    /// Display form of the chaos rating ("7" or "unrated").
    pub fn chaos_label(&self) -> String {
        match self.chaos_rating {
            Some(r) => r.to_string(),
            None => "unrated".to_string(),
        }
    }
}

/// Mean chaos rating over the solutions that carry one.
pub fn average_chaos(solutions: &[Solution]) -> Option<f64> {
    let rated: Vec<u8> = solutions.iter().filter_map(|s| s.chaos_rating).collect();
    if rated.is_empty() {
        return None;
    }
    Some(rated.iter().map(|&r| r as f64).sum::<f64>() / rated.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rating: Option<u8>, tradeoffs: &str) -> Solution {
        Solution {
            name: "The Elegant Universe".to_string(),
            philosophy: "Clean, minimal, best practices".to_string(),
            approach: "Fix the off-by-one".to_string(),
            code: "fn main() {}".to_string(),
            language: "rust".to_string(),
            chaos_rating: rating,
            tradeoffs: tradeoffs.to_string(),
        }
    }

    #[test]
    fn test_tradeoffs_or_uses_captured_text() {
        let s = sample(Some(3), "Slower on large inputs");
        assert_eq!(s.tradeoffs_or("fallback"), "Slower on large inputs");
    }

    #[test]
    fn test_tradeoffs_or_substitutes_fallback_when_blank() {
        let s = sample(Some(3), "   ");
        assert_eq!(s.tradeoffs_or("Reality may tear."), "Reality may tear.");
    }

    #[test]
    fn test_chaos_label() {
        assert_eq!(sample(Some(7), "x").chaos_label(), "7");
        assert_eq!(sample(None, "x").chaos_label(), "unrated");
    }

    #[test]
    fn test_average_chaos() {
        let solutions = vec![sample(Some(2), "a"), sample(None, "b"), sample(Some(9), "c")];
        assert_eq!(average_chaos(&solutions), Some(5.5));
    }

    #[test]
    fn test_average_chaos_none_when_unrated() {
        let solutions = vec![sample(None, "a")];
        assert_eq!(average_chaos(&solutions), None);
        assert_eq!(average_chaos(&[]), None);
    }

    #[test]
    fn test_solution_serde_round_trip() {
        let s = sample(None, "none");
        let json = serde_json::to_string(&s).unwrap();
        let decoded: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, s);
    }
}
