//! Fracture detection from image labels.
//!
//! Classifies an uploaded file's name into Normal, Suspect or a specific
//! fracture category with an ordered keyword scan over the knowledge
//! table. The file name is the only input ever inspected; no pixel data
//! is read. Branch selection is fully deterministic - only the reported
//! confidence is sampled, from the caller's RNG.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::knowledge::{self, FractureRecord};
use super::rules::{normalize, KeywordRule, RuleSet};

/// Indicator words that read as a healthy, fracture-free image.
const NORMAL_INDICATORS: &[&str] = &["normal", "healthy", "clear", "good", "fine", "ok"];

/// Indicator words that read as low-quality or uncertain imaging.
const SUSPECT_INDICATORS: &[&str] = &[
    "suspect",
    "unclear",
    "possible",
    "maybe",
    "questionable",
    "blurry",
];

/// Confidence reported for a normal read.
const NORMAL_CONFIDENCE: u8 = 100;
/// Confidence band for suspect and unresolved reads.
const SUSPECT_CONFIDENCE: RangeInclusive<u8> = 10..=40;
/// Confidence band for a specific fracture hit.
const DETECTED_CONFIDENCE: RangeInclusive<u8> = 60..=98;

/// Recommendation shown for a normal read.
pub const NORMAL_RECOMMENDATION: &str = "The X-ray appears normal with no signs of fracture. The bone structure shows healthy density and alignment. Continue regular check-ups and maintain bone health through proper nutrition and exercise.";

/// Recommendation shown when a suspect indicator matched.
pub const SUSPECT_RECOMMENDATION: &str = "The image quality or findings are inconclusive. Further imaging or clinical evaluation is recommended. Please consult with a radiologist or orthopedic specialist for a definitive diagnosis.";

/// Recommendation shown when nothing matched at all.
pub const UNRESOLVED_RECOMMENDATION: &str = "Unable to determine fracture type from image name. Please ensure the image is clear and properly labeled. Consider retaking the X-ray or consulting with a medical professional for proper diagnosis.";

/// Outcome payload for the ordered screen rules.
#[derive(Debug, Clone, Copy)]
enum Screen {
    Normal,
    Suspect,
    Fracture(&'static FractureRecord),
}

// Built once per process: the two indicator rules first, then one rule per
// knowledge record in table order.
static SCREEN_RULES: LazyLock<RuleSet<Screen>> = LazyLock::new(|| {
    let mut rules = vec![
        KeywordRule::new(NORMAL_INDICATORS.iter().copied(), Screen::Normal),
        KeywordRule::new(SUSPECT_INDICATORS.iter().copied(), Screen::Suspect),
    ];

    for record in knowledge::all() {
        rules.push(KeywordRule::new(
            knowledge::trigger_terms(record),
            Screen::Fracture(record),
        ));
    }

    RuleSet::new(rules)
});

/// Result of classifying one image label.
///
/// `is_normal` and `is_suspect` are mutually exclusive; both are false
/// exactly when a specific fracture was identified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Id of the matched knowledge record; absent for normal, suspect and
    /// unresolved reads.
    pub fracture_type: Option<String>,
    /// Confidence percentage, 0-100.
    pub confidence: u8,
    /// Recommendation text for display.
    pub ai_recommendation: String,
    /// The image read as healthy.
    pub is_normal: bool,
    /// The image read as inconclusive.
    pub is_suspect: bool,
}

impl DetectionResult {
    /// Returns the knowledge record behind a specific-fracture result.
    pub fn fracture(&self) -> Option<&'static FractureRecord> {
        self.fracture_type.as_deref().and_then(knowledge::find)
    }
}

/// Keyword classifier for X-ray image labels.
///
/// Total over any input string: an empty or unrecognized label lands in
/// the unresolved fallback rather than an error.
pub struct FractureMatcher {
    rules: &'static RuleSet<Screen>,
}

impl Default for FractureMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FractureMatcher {
    pub fn new() -> Self {
        Self {
            rules: &SCREEN_RULES,
        }
    }

    /// Classifies an image label, sampling confidence from the thread RNG.
    pub fn classify(&self, label: &str) -> DetectionResult {
        self.classify_with_rng(label, &mut rand::thread_rng())
    }

    /// Classifies an image label with a caller-supplied RNG.
    ///
    /// Same label, same branch, every time; the RNG only decides where in
    /// the branch's confidence band the result lands.
    pub fn classify_with_rng<R: Rng + ?Sized>(&self, label: &str, rng: &mut R) -> DetectionResult {
        let normalized = normalize(label);

        let Some(hit) = self.rules.first_match(&normalized) else {
            debug!("no screen rule matched '{}', reporting unresolved", normalized);
            return suspect_result(UNRESOLVED_RECOMMENDATION, rng);
        };

        match *hit.outcome {
            Screen::Normal => {
                debug!("'{}' matched normal indicator '{}'", normalized, hit.trigger);
                normal_result()
            }
            Screen::Suspect => {
                debug!("'{}' matched suspect indicator '{}'", normalized, hit.trigger);
                suspect_result(SUSPECT_RECOMMENDATION, rng)
            }
            Screen::Fracture(record) => {
                debug!(
                    "'{}' matched trigger '{}' -> fracture '{}'",
                    normalized, hit.trigger, record.id
                );
                fracture_result(record, rng)
            }
        }
    }
}

fn normal_result() -> DetectionResult {
    DetectionResult {
        fracture_type: None,
        confidence: NORMAL_CONFIDENCE,
        ai_recommendation: NORMAL_RECOMMENDATION.to_string(),
        is_normal: true,
        is_suspect: false,
    }
}

fn suspect_result<R: Rng + ?Sized>(recommendation: &str, rng: &mut R) -> DetectionResult {
    DetectionResult {
        fracture_type: None,
        confidence: rng.gen_range(SUSPECT_CONFIDENCE),
        ai_recommendation: recommendation.to_string(),
        is_normal: false,
        is_suspect: true,
    }
}

fn fracture_result<R: Rng + ?Sized>(record: &'static FractureRecord, rng: &mut R) -> DetectionResult {
    DetectionResult {
        fracture_type: Some(record.id.to_string()),
        confidence: rng.gen_range(DETECTED_CONFIDENCE),
        ai_recommendation: format!(
            "{} detected. {} Immediate medical attention is recommended. Treatment typically involves {}. Expected recovery time: {}.",
            record.name,
            record.description,
            record.treatment.to_lowercase(),
            record.recovery_time
        ),
        is_normal: false,
        is_suspect: false,
    }
}
