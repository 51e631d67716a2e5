use super::assembler::assemble;
use super::export;
use super::normalize::normalize;
use super::patterns::{
    detect_topics, find_matches, mentions_medication, EMERGENCY_RULES, URGENT_RULES,
};
use super::resolver::resolve_urgency;
use super::types::{MatchResult, Responder, ResponseBundle, TriageError, UrgencyTier};

/// The rule-based classifier/responder.
///
/// Stateless. All rule tables are process-wide statics, so one instance
/// can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedResponder;

impl RuleBasedResponder {
    pub fn new() -> Self {
        Self
    }
}

impl Responder for RuleBasedResponder {
    fn classify(&self, text: &str) -> Result<ResponseBundle, TriageError> {
        classify(text)
    }

    fn export_report(
        &self,
        original_text: &str,
        timestamp: &str,
        bundle: &ResponseBundle,
    ) -> String {
        export::export_report(original_text, timestamp, bundle)
    }
}

/// Run all pattern sets against already-normalized text.
pub fn match_text(normalized: &str) -> MatchResult {
    MatchResult {
        emergency_hits: find_matches(&EMERGENCY_RULES, normalized),
        urgent_hits: find_matches(&URGENT_RULES, normalized),
        topics: detect_topics(normalized),
        mentions_meds: mentions_medication(normalized),
    }
}

/// Classify caregiver text and assemble the full response.
///
/// Rejects empty or whitespace-only input with
/// [`TriageError::InvalidInput`].
pub fn classify(text: &str) -> Result<ResponseBundle, TriageError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        tracing::debug!("Classification skipped: empty input");
        return Err(TriageError::InvalidInput);
    }

    let matches = match_text(&normalized);
    let tier = resolve_urgency(&matches);
    log_classification(tier, &matches);

    Ok(assemble(text, tier, matches))
}

/// Log a classification outcome WITHOUT caregiver text.
fn log_classification(tier: UrgencyTier, matches: &MatchResult) {
    let topics: Vec<&str> = matches.topics.iter().map(|t| t.as_str()).collect();
    match tier {
        UrgencyTier::Emergency => {
            tracing::warn!(
                tier = ?tier,
                emergency_flags = ?matches.emergency_hits,
                urgent_flags = matches.urgent_hits.len(),
                topics = ?topics,
                mentions_meds = matches.mentions_meds,
                "Emergency pattern matched"
            );
        }
        _ => {
            tracing::info!(
                tier = ?tier,
                urgent_flags = ?matches.urgent_hits,
                topics = ?topics,
                mentions_meds = matches.mentions_meds,
                "Caregiver text classified"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::types::{SuggestionItem, Topic};

    const GUARDRAIL_PREFIX: &str = "**Medication note:**";

    fn has_guardrail(bundle: &ResponseBundle) -> bool {
        bundle
            .suggestions
            .iter()
            .filter_map(SuggestionItem::as_text)
            .any(|l| l.starts_with(GUARDRAIL_PREFIX))
    }

    // =================================================================
    // TIER RESOLUTION
    // =================================================================

    #[test]
    fn chest_pain_and_breathing_is_emergency() {
        let bundle = classify("chest pain and can't breathe").unwrap();
        assert_eq!(bundle.urgency, UrgencyTier::Emergency);
        assert!(bundle.matches.emergency_hits.contains(&"Possible chest-pain emergency"));
        assert!(bundle.matches.emergency_hits.contains(&"Breathing emergency"));
    }

    #[test]
    fn emergency_regardless_of_urgent_terms() {
        let bundle = classify("He fell, has severe pain and now a seizure").unwrap();
        assert_eq!(bundle.urgency, UrgencyTier::Emergency);
        assert!(!bundle.matches.urgent_hits.is_empty());
    }

    #[test]
    fn severe_pain_alone_is_urgent() {
        let bundle = classify("Severe pain in her knee since this morning").unwrap();
        assert_eq!(bundle.urgency, UrgencyTier::Urgent);
        assert!(bundle.matches.emergency_hits.is_empty());
    }

    #[test]
    fn neutral_text_is_non_urgent() {
        let bundle = classify("Grandpa enjoyed his walk today").unwrap();
        assert_eq!(bundle.urgency, UrgencyTier::NonUrgent);
        assert!(bundle.matches.emergency_hits.is_empty());
        assert!(bundle.matches.urgent_hits.is_empty());
    }

    #[test]
    fn classification_is_case_and_padding_insensitive() {
        let a = classify("CHEST PAIN").unwrap();
        let b = classify("   chest pain   ").unwrap();
        assert_eq!(a.urgency, b.urgency);
        assert_eq!(a.matches, b.matches);
    }

    // =================================================================
    // WORKED SCENARIOS
    // =================================================================

    #[test]
    fn fell_and_confused_scenario() {
        let bundle = classify(
            "Mom fell yesterday and seems more confused today. She won't eat much and is agitated in the evening.",
        )
        .unwrap();
        assert!(bundle.matches.has_topic(Topic::MemoryOrConfusion));
        assert!(bundle.matches.has_topic(Topic::EatingDrinking));
        assert!(bundle.matches.has_topic(Topic::AgitationOrAnxiety));
        // "fell" is part of the fall rule.
        assert_eq!(bundle.urgency, UrgencyTier::Urgent);
        assert_eq!(bundle.matches.urgent_hits, vec!["Fall or head impact"]);
    }

    #[test]
    fn blank_input_rejected() {
        assert_eq!(classify(""), Err(TriageError::InvalidInput));
        assert_eq!(classify("   \n\t"), Err(TriageError::InvalidInput));
    }

    #[test]
    fn prescription_refill_mentions_meds() {
        let bundle = classify("need to refill her prescription").unwrap();
        assert!(bundle.matches.mentions_meds);
        assert!(has_guardrail(&bundle));
        assert_eq!(bundle.urgency, UrgencyTier::NonUrgent);
    }

    // =================================================================
    // INDEPENDENCE + DETERMINISM
    // =================================================================

    #[test]
    fn guardrail_present_with_emergency_tier() {
        let bundle = classify("she took too many pills, is the pill bottle empty?").unwrap();
        assert_eq!(bundle.urgency, UrgencyTier::Emergency);
        assert!(has_guardrail(&bundle));
    }

    #[test]
    fn guardrail_absent_without_medication_terms() {
        let bundle = classify("chest pain").unwrap();
        assert!(!bundle.matches.mentions_meds);
        assert!(!has_guardrail(&bundle));
    }

    #[test]
    fn repeated_classification_is_identical() {
        let text = "overwhelmed and exhausted, he is sad and wandering at night";
        let first = classify(text).unwrap();
        for _ in 0..5 {
            assert_eq!(classify(text).unwrap(), first);
        }
    }

    #[test]
    fn suggestion_order_independent_of_phrase_order() {
        let a = classify("can't sleep and in pain").unwrap();
        let b = classify("in pain and can't sleep").unwrap();
        assert_eq!(a.suggestions, b.suggestions);
        assert_eq!(a.matches.topics, vec![Topic::Pain, Topic::Sleep]);
    }

    #[test]
    fn clinician_message_keeps_original_case() {
        let bundle = classify("  Dad Has CHEST PAIN  ").unwrap();
        assert!(bundle.clinician_message.contains("- What happened: Dad Has CHEST PAIN\n"));
    }

    #[test]
    fn responder_trait_delegates() {
        let responder = RuleBasedResponder::new();
        let bundle = responder.classify("severe pain").unwrap();
        let report = responder.export_report("severe pain", "2026-01-01T00:00:00", &bundle);
        assert!(report.contains("URGENT FLAGS: Severe pain"));
    }
}
