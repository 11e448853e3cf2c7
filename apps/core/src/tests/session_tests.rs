//! Session Tests
//!
//! End-to-end behavior of the two user-facing flows: chatting with the
//! assistant and analyzing an upload into a report.

use crate::engine::responder::Topic;
use crate::engine::XrayAnalyzer;
use crate::error::AppError;
use crate::models::{AnalysisReport, XrayUpload};
use crate::session::ChatSession;

#[cfg(test)]
mod chat_flow_tests {
    use super::*;

    #[test]
    fn test_conversation_transcript_shape() {
        let mut session = ChatSession::new();

        let turns = vec![
            ("hello", Topic::Greeting),
            ("what causes a collarbone fracture?", Topic::Clavicle),
            ("how long is the recovery?", Topic::Healing),
            ("thank you", Topic::Gratitude),
        ];

        for (message, expected_topic) in &turns {
            let reply = session.post(message).unwrap();
            assert_eq!(
                reply.text,
                expected_topic.response(),
                "wrong reply for '{}'",
                message
            );
        }

        // Welcome plus a user/assistant pair per turn.
        let messages = session.messages();
        assert_eq!(messages.len(), 1 + 2 * turns.len());
        assert!(!messages[0].is_user);
        for (i, message) in messages.iter().enumerate().skip(1) {
            // Odd positions are user messages, even ones replies.
            assert_eq!(message.is_user, i % 2 == 1, "wrong author at position {}", i);
        }
    }

    #[test]
    fn test_rejected_input_leaves_transcript_untouched() {
        let mut session = ChatSession::new();
        session.post("hello").unwrap();

        let before = session.messages().len();
        assert!(matches!(session.post("   "), Err(AppError::Validation(_))));
        assert_eq!(session.messages().len(), before);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = ChatSession::new();
        let second = ChatSession::new();

        assert_ne!(first.id(), second.id());

        first.post("hello").unwrap();
        assert_eq!(first.messages().len(), 3);
        assert_eq!(second.messages().len(), 1);
    }

    #[test]
    fn test_unmatched_question_gets_fallback() {
        let mut session = ChatSession::new();

        let reply = session.post("what day is it?").unwrap();
        assert_eq!(reply.text, Topic::General.response());
    }
}

#[cfg(test)]
mod analysis_flow_tests {
    use super::*;

    #[test]
    fn test_normal_upload_flow() {
        let analyzer = XrayAnalyzer::new();
        let upload = XrayUpload::new("normal_chest.png", 1_200_000);

        let report = analyzer.analyze(&upload).unwrap();
        assert!(report.result.is_normal);
        assert_eq!(report.result.confidence, 100);
        assert!(report.fracture_info().is_none());
    }

    #[test]
    fn test_suspect_upload_flow() {
        let analyzer = XrayAnalyzer::new();
        let upload = XrayUpload::new("blurry_scan.jpg", 800_000);

        let report = analyzer.analyze(&upload).unwrap();
        assert!(report.result.is_suspect);
        assert!((10..=40).contains(&report.result.confidence));
    }

    #[test]
    fn test_fracture_upload_flow() {
        let analyzer = XrayAnalyzer::new();
        let upload = XrayUpload::new("compression_l1.png", 2_000_000);

        let report = analyzer.analyze(&upload).unwrap();
        assert_eq!(report.result.fracture_type.as_deref(), Some("compression"));

        let record = report.fracture_info().unwrap();
        assert_eq!(record.name, "Compression Fracture");
        assert!(!record.symptoms.is_empty());
    }

    #[test]
    fn test_unlabeled_upload_falls_through() {
        let analyzer = XrayAnalyzer::new();
        let upload = XrayUpload::new("mystery_scan.png", 500_000);

        let report = analyzer.analyze(&upload).unwrap();
        assert!(report.result.is_suspect);
        assert!(report.result.fracture_type.is_none());
    }

    #[test]
    fn test_invalid_uploads_are_rejected() {
        let analyzer = XrayAnalyzer::new();

        for name in ["", "report.pdf", "scan.txt", "no_extension"] {
            let upload = XrayUpload::new(name, 100);
            assert!(
                matches!(analyzer.analyze(&upload), Err(AppError::Validation(_))),
                "'{}' should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_processing_time_is_recorded() {
        let analyzer = XrayAnalyzer::new();
        let upload = XrayUpload::new("rib_series.jpg", 100);

        let report = analyzer.analyze(&upload).unwrap();
        // Pure string matching; anything near a second would be a bug.
        assert!(report.processing_time_ms < 1_000);
    }

    #[test]
    fn test_report_serde_round_trip() {
        let analyzer = XrayAnalyzer::new();
        let upload = XrayUpload::new("facial_trauma.jpeg", 3_500_000);

        let report = analyzer.analyze(&upload).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.file_name, report.file_name);
        assert_eq!(parsed.file_size_bytes, report.file_size_bytes);
        assert_eq!(parsed.uploaded_at, report.uploaded_at);
        assert_eq!(parsed.result.fracture_type, report.result.fracture_type);
        assert_eq!(parsed.result.confidence, report.result.confidence);
        assert_eq!(parsed.result.is_suspect, report.result.is_suspect);
    }
}
