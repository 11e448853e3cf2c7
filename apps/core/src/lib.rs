//! # BoneScan Core
//!
//! Decision engine behind the BoneScan X-ray demo: keyword-rule fracture
//! triage over uploaded file names, plus the "Mr. Bony" scripted chat
//! assistant. Everything is deterministic text matching; only confidence
//! values are sampled, through an injectable RNG.
//!
//! ## Components
//! - `engine`: rule scan, knowledge base, detection, responder, analyzer
//! - `models`: boundary value objects (messages, uploads, reports)
//! - `session`: append-only chat transcript
//! - `error`: application error type

pub mod engine;
pub mod error;
pub mod models;
pub mod session;

#[cfg(test)]
mod tests;

pub use engine::detection::{DetectionResult, FractureMatcher};
pub use engine::knowledge::{FractureRecord, Region};
pub use engine::responder::{ChatResponder, Topic, WELCOME_MESSAGE};
pub use engine::XrayAnalyzer;
pub use error::AppError;
pub use models::{AnalysisReport, ChatMessage, XrayUpload};
pub use session::{thinking_delay, ChatSession};
