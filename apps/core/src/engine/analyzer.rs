//! Analysis orchestration.
//!
//! The entry point the upload surface hits: gate the upload, classify its
//! file name, assemble the report. Everything past the gate is total.

use std::time::Instant;

use chrono::Utc;
use rand::Rng;
use tracing::info;
use validator::Validate;

use super::detection::FractureMatcher;
use crate::error::AppError;
use crate::models::{AnalysisReport, XrayUpload};

/// Validates uploads and runs detection over their file names.
pub struct XrayAnalyzer {
    matcher: FractureMatcher,
}

impl Default for XrayAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl XrayAnalyzer {
    pub fn new() -> Self {
        Self {
            matcher: FractureMatcher::new(),
        }
    }

    /// Analyzes an upload, sampling confidence from the thread RNG.
    pub fn analyze(&self, upload: &XrayUpload) -> Result<AnalysisReport, AppError> {
        self.analyze_with_rng(upload, &mut rand::thread_rng())
    }

    /// Analyzes an upload with a caller-supplied RNG.
    ///
    /// Rejects an empty file name or an unsupported image format; those
    /// are the only failure modes.
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        upload: &XrayUpload,
        rng: &mut R,
    ) -> Result<AnalysisReport, AppError> {
        upload.validate()?;
        if !upload.has_supported_extension() {
            return Err(AppError::Validation(format!(
                "unsupported image format: {}",
                upload.file_name
            )));
        }

        let started = Instant::now();
        let result = self.matcher.classify_with_rng(&upload.file_name, rng);
        let processing_time_ms = started.elapsed().as_millis() as u64;

        info!(
            "analyzed '{}' in {}ms: normal={} suspect={} fracture={:?}",
            upload.file_name, processing_time_ms, result.is_normal, result.is_suspect, result.fracture_type
        );

        Ok(AnalysisReport {
            file_name: upload.file_name.clone(),
            file_size_bytes: upload.file_size_bytes,
            uploaded_at: upload.uploaded_at,
            analyzed_at: Utc::now(),
            processing_time_ms,
            result,
        })
    }
}
