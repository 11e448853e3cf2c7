//! Scripted chat assistant.
//!
//! "Mr. Bony" answers bone-health questions from a fixed rule table: the
//! first rule whose trigger occurs in the lowercased message selects the
//! reply. No model, no memory; every response is canned text and the same
//! message always gets the same answer.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::{normalize, KeywordRule, RuleSet};

/// Opening message every chat session starts with.
pub const WELCOME_MESSAGE: &str = "Hello! I'm Mr. Bony, your AI bone specialist assistant. I can help you understand bone fractures, their causes, treatments, and prevention. What would you like to know?";

/// Conversation topic a message routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Clavicle/collarbone anatomy and injuries
    Clavicle,
    /// Humerus/upper arm anatomy and injuries
    Humerus,
    /// Femur/thigh anatomy and injuries
    Femur,
    /// Healing stages and timelines
    Healing,
    /// Fracture prevention advice
    Prevention,
    /// Warning signs of a fracture
    Symptoms,
    /// Treatment options
    Treatment,
    /// X-ray and other imaging
    Imaging,
    /// Greetings (hello, hi)
    Greeting,
    /// Thanks
    Gratitude,
    /// Fallback when no trigger matches
    General,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    /// Returns a human-readable label for the topic
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Clavicle => "clavicle",
            Topic::Humerus => "humerus",
            Topic::Femur => "femur",
            Topic::Healing => "healing",
            Topic::Prevention => "prevention",
            Topic::Symptoms => "symptoms",
            Topic::Treatment => "treatment",
            Topic::Imaging => "imaging",
            Topic::Greeting => "greeting",
            Topic::Gratitude => "gratitude",
            Topic::General => "general",
        }
    }

    /// Returns the canned reply for the topic.
    pub fn response(&self) -> &'static str {
        match self {
            Topic::Clavicle => "The clavicle (collarbone) is a common fracture site. It connects your shoulder blade to your breastbone. Clavicle fractures often occur from falls on the shoulder or outstretched arm. Most heal well with conservative treatment using a sling for 6-12 weeks. Would you like to know more about clavicle fracture symptoms or treatment?",
            Topic::Humerus => "The humerus is your upper arm bone, the longest bone in your arm. Fractures can occur at the proximal end (near shoulder) or distal end (near elbow). Treatment depends on the location and severity - some require surgery while others heal with immobilization. Recovery typically takes 8-16 weeks.",
            Topic::Femur => "The femur is the strongest and longest bone in your body, running from hip to knee. Femur fractures are serious injuries that usually require surgical repair with rods, plates, or screws. Recovery can take 3-6 months and requires extensive rehabilitation.",
            Topic::Healing => "Bone healing occurs in four stages: 1) Inflammation (first few days), 2) Soft callus formation (weeks 2-3), 3) Hard callus formation (weeks 6-12), and 4) Remodeling (months to years). Proper nutrition, rest, and following medical advice are crucial for optimal healing.",
            Topic::Prevention => "Prevent fractures by: maintaining bone density through calcium and vitamin D intake, regular weight-bearing exercise, avoiding falls by keeping your home safe, wearing protective gear during sports, and getting regular bone density screenings if you're at risk.",
            Topic::Symptoms => "Common fracture symptoms include: severe pain at the injury site, swelling and bruising, inability to move the affected area normally, visible deformity or bone protruding through skin, and numbness or tingling. If you suspect a fracture, seek immediate medical attention.",
            Topic::Treatment => "Fracture treatment varies by type and severity but may include: immobilization with casts or splints, surgical repair with pins/plates/screws, pain management, physical therapy for rehabilitation, and gradual return to activities. Always follow your doctor's specific treatment plan.",
            Topic::Imaging => "X-rays are the primary imaging tool for diagnosing fractures. They show bone structure clearly and can reveal breaks, cracks, and displacement. Sometimes additional imaging like CT scans or MRI may be needed for complex fractures or soft tissue evaluation.",
            Topic::Greeting => "Hello! I'm here to help you with any questions about bones, fractures, or bone health. What would you like to learn about today?",
            Topic::Gratitude => "You're welcome! I'm always here to help with bone health questions. Remember, while I can provide educational information, always consult with healthcare professionals for medical advice and treatment.",
            Topic::General => "That's an interesting question about bone health! I specialize in fracture types, bone anatomy, healing processes, and prevention. Could you be more specific about what aspect you'd like to know more about? For example, I can explain different fracture types, healing timelines, or prevention strategies.",
        }
    }
}

// Built once per process. Anatomy topics come before process topics so
// that e.g. "humerus recovery" reads as a humerus question, and the
// greeting sits last before the fallback.
static CHAT_RULES: LazyLock<RuleSet<Topic>> = LazyLock::new(|| {
    RuleSet::new(vec![
        KeywordRule::new(["clavicle", "collarbone"], Topic::Clavicle),
        KeywordRule::new(["humerus", "upper arm"], Topic::Humerus),
        KeywordRule::new(["femur", "thigh"], Topic::Femur),
        KeywordRule::new(["healing", "recovery"], Topic::Healing),
        KeywordRule::new(["prevention", "prevent"], Topic::Prevention),
        KeywordRule::new(["symptoms", "signs"], Topic::Symptoms),
        KeywordRule::new(["treatment", "therapy"], Topic::Treatment),
        KeywordRule::new(["x-ray", "imaging"], Topic::Imaging),
        KeywordRule::new(["hello", "hi"], Topic::Greeting),
        KeywordRule::new(["thank"], Topic::Gratitude),
    ])
});

/// Keyword router over the scripted reply table.
pub struct ChatResponder {
    rules: &'static RuleSet<Topic>,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatResponder {
    pub fn new() -> Self {
        Self {
            rules: &CHAT_RULES,
        }
    }

    /// Returns the topic the first matching rule routes this message to.
    pub fn classify(&self, user_text: &str) -> Topic {
        let normalized = normalize(user_text);

        match self.rules.first_match(&normalized) {
            Some(hit) => {
                debug!("message matched trigger '{}' -> topic '{}'", hit.trigger, hit.outcome);
                *hit.outcome
            }
            None => {
                debug!("no chat rule matched, using general fallback");
                Topic::General
            }
        }
    }

    /// Returns the canned reply for a message.
    ///
    /// Total over any input: an unmatched message gets the general
    /// fallback asking for a more specific question.
    pub fn respond(&self, user_text: &str) -> &'static str {
        self.classify(user_text).response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_routing() {
        let responder = ChatResponder::new();

        let cases = vec![
            ("What about my clavicle?", Topic::Clavicle),
            ("Is a collarbone break serious?", Topic::Clavicle),
            ("upper arm pain after a fall", Topic::Humerus),
            ("My thigh hurts", Topic::Femur),
            ("How long does healing take?", Topic::Healing),
            ("How do I prevent this?", Topic::Prevention),
            ("What are the warning signs?", Topic::Symptoms),
            ("physical therapy options", Topic::Treatment),
            ("How does an x-ray work?", Topic::Imaging),
            ("hello there", Topic::Greeting),
            ("thank you so much", Topic::Gratitude),
            ("xyz123", Topic::General),
        ];

        for (message, expected) in cases {
            assert_eq!(
                responder.classify(message),
                expected,
                "wrong topic for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_rule_order() {
        let responder = ChatResponder::new();

        // "clavicle" sits before "treatment" in the table.
        assert_eq!(responder.classify("clavicle treatment"), Topic::Clavicle);
        // "humerus" sits before "recovery".
        assert_eq!(
            responder.classify("recovery after my humerus fracture"),
            Topic::Humerus
        );
    }

    #[test]
    fn test_case_insensitive() {
        let responder = ChatResponder::new();
        assert_eq!(responder.classify("CLAVICLE FRACTURE INFO"), Topic::Clavicle);
    }

    #[test]
    fn test_respond_matches_topic_text() {
        let responder = ChatResponder::new();

        assert_eq!(
            responder.respond("tell me about the femur"),
            Topic::Femur.response()
        );
        assert_eq!(responder.respond("random gibberish"), Topic::General.response());
    }

    #[test]
    fn test_same_message_same_reply() {
        let responder = ChatResponder::new();

        let first = responder.respond("how does healing work?");
        let second = responder.respond("how does healing work?");
        assert_eq!(first, second);
    }

    #[test]
    fn test_welcome_message() {
        assert!(WELCOME_MESSAGE.contains("Mr. Bony"));
    }
}
