//! quantum_core — data model, response extraction and session storage.
//!
//! The heart of this crate is [`extract::extract_solutions`]: a single-pass
//! scanner that turns the model's free-text reply into well-formed
//! [`Solution`] records. Everything else supports it: the request/session
//! types, the [`store::SessionStore`] backends and the crate error enum.

pub mod error;
pub mod extract;
pub mod session;
pub mod solution;
pub mod store;

pub use error::{QuantumError, Result};
pub use extract::{extract_recommendation, extract_solutions, QuantumReply};
pub use session::{DebugRequest, DebugSession, SessionId};
pub use solution::{average_chaos, Solution};
pub use store::{MemoryStore, SessionStore, SqliteStore};
