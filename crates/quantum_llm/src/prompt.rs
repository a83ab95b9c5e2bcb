//! Request builder: bug report -> system + user prompt.
//!
//! The request fields are embedded verbatim; the model consumes free text,
//! so no escaping is applied. The requested language also ends up stamped
//! on every extracted solution, which is why it must pass through unchanged.

use quantum_core::DebugRequest;

/// Instruction template the model is asked to follow. The extractor in
/// quantum_core is the tolerant counterpart of this format.
pub const SYSTEM_PROMPT: &str = r#"You are the Quantum Debugger AI - a debugging assistant that exists across multiple parallel universes. When given buggy code, you generate 5 different "quantum timeline" solutions, each from a different universe with different programming philosophies.

YOUR RESPONSE FORMAT:
For each bug provided, generate exactly 5 solutions in this format:

🌌 UNIVERSE 1: [Universe Name]
Philosophy: [Brief description of this universe's coding philosophy]
Approach: [One-line summary]
Code Solution:
```[language]
[Fixed code here]
```
Chaos Rating: [1-10] ⚡
Trade-offs: [What this solution sacrifices]

[Repeat for Universes 2-5]

🎲 RECOMMENDATION: [Which universe to merge with and why]

---

UNIVERSE TYPES (use these):
1. **The Elegant Universe** - Clean, minimal, best practices
2. **The Cursed Timeline** - Works but makes senior devs cry
3. **The Performance Dimension** - Speed above all else
4. **The Over-Engineered Realm** - Enterprise patterns, maximum abstraction
5. **The Chaos Dimension** - Creative, weird, surprisingly functional

RULES:
- Each solution MUST actually fix the bug
- Solutions should be genuinely different approaches
- Include humor but stay technically accurate
- Chaos Rating reflects how unconventional the approach is (1=conventional, 10=insane)
- Trade-offs must be real technical considerations
- Keep code snippets concise but complete"#;

/// Placeholder embedded when the user supplied no error message.
pub const NO_ERROR_PLACEHOLDER: &str = "None provided";

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Assemble the full prompt for one debug request.
pub fn build_prompt(request: &DebugRequest) -> Prompt {
    Prompt::new(SYSTEM_PROMPT, build_user_prompt(request))
}

fn build_user_prompt(request: &DebugRequest) -> String {
    let error_message = if request.error_message.is_empty() {
        NO_ERROR_PLACEHOLDER
    } else {
        &request.error_message
    };

    format!(
        "QUANTUM DEBUG REQUEST\n\n\
         Language: {language}\n\
         Bug Description: {description}\n\n\
         Code:\n\
         ```{language}\n\
         {code}\n\
         ```\n\n\
         Error Message: {error_message}\n\n\
         Context: {context}\n\n\
         Generate 5 parallel universe solutions following the Quantum Debugger format.",
        language = request.language,
        description = request.bug_description,
        code = request.code,
        error_message = error_message,
        context = request.context,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_embeds_fields_verbatim() {
        let request = DebugRequest::new("Python", "loop never ends", "while True: pass")
            .with_error_message("KeyboardInterrupt")
            .with_context("runs in CI");
        let prompt = build_prompt(&request);

        assert_eq!(prompt.system, SYSTEM_PROMPT);
        assert!(prompt.user.contains("Language: python"));
        assert!(prompt.user.contains("Bug Description: loop never ends"));
        assert!(prompt.user.contains("```python\nwhile True: pass\n```"));
        assert!(prompt.user.contains("Error Message: KeyboardInterrupt"));
        assert!(prompt.user.contains("Context: runs in CI"));
    }

    #[test]
    fn test_empty_error_message_gets_placeholder() {
        let request = DebugRequest::new("rust", "segfault", "unsafe {}");
        let prompt = build_prompt(&request);
        assert!(prompt.user.contains("Error Message: None provided"));
    }

    #[test]
    fn test_no_escaping_of_delimiters_in_code() {
        let request = DebugRequest::new("js", "b", "const s = \"🌌 UNIVERSE 1:\";");
        let prompt = build_prompt(&request);
        assert!(prompt.user.contains("const s = \"🌌 UNIVERSE 1:\";"));
    }
}
