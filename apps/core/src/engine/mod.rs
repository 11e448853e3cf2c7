//! # Engine Module
//!
//! Fast, non-ML decision system for BoneScan.
//! Classifies user input with ordered keyword rules; no model, no network.
//!
//! ## Components
//! - `rules`: First-match-wins keyword rule scan (shared mechanism)
//! - `knowledge`: Static fracture knowledge base
//! - `detection`: Fracture triage over image labels
//! - `responder`: Scripted chat replies
//! - `analyzer`: Upload gate and report assembly

pub mod analyzer;
pub mod detection;
pub mod knowledge;
pub mod responder;
pub mod rules;

// Re-export main types for convenience
#[allow(unused_imports)]
pub use analyzer::XrayAnalyzer;
#[allow(unused_imports)]
pub use detection::{DetectionResult, FractureMatcher};
#[allow(unused_imports)]
pub use knowledge::{FractureRecord, Region};
#[allow(unused_imports)]
pub use responder::{ChatResponder, Topic};
#[allow(unused_imports)]
pub use rules::{KeywordRule, RuleMatch, RuleSet};
