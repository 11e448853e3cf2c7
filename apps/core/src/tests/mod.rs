//! Test Module
//!
//! Cross-module test suite for the BoneScan engine.
//!
//! ## Test Categories
//! - `detection_tests`: Triage branches, precedence, confidence bands
//! - `responder_tests`: Chat routing, rule order, canned reply texts
//! - `session_tests`: Transcript behavior and the upload-to-report flow

pub mod session_tests;
