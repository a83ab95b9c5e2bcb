//! quantum_llm — provider abstraction and prompt plumbing.
//!
//! ## Architecture
//!
//! ```text
//! DebugRequest ──► prompt::build_prompt ──► Provider::generate ──► raw text
//!                                                                      │
//!                      Vec<Solution> ◄── quantum_core::extract ◄───────┘
//! ```
//!
//! [`QuantumDebugger`] composes the three steps. Providers live behind the
//! [`Provider`] trait in a [`ProviderRegistry`]; [`GeminiProvider`] is the
//! shipped implementation. The provider boundary is the only layer that
//! fails: extraction itself never errors, it just returns fewer records.

pub mod debugger;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod providers;

#[cfg(test)]
mod tests;

pub use debugger::QuantumDebugger;
pub use error::{Error, Result};
pub use prompt::{build_prompt, Prompt};
pub use provider::{Provider, ProviderRegistry};
pub use providers::gemini::{GeminiConfig, GeminiProvider};
