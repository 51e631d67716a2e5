//! Response assembly: ordered guidance, tracking checklist and the
//! clinician-message draft.
//!
//! All text is fixed. The only dynamic content is which blocks are
//! emitted and the caregiver's own words in the clinician draft.

use super::types::{MatchResult, ResponseBundle, SuggestionItem, Topic, UrgencyTier};

/// Characters of the caregiver's text copied into the clinician draft.
pub const CLINICIAN_EXCERPT_CHARS: usize = 400;

const EMERGENCY_ACTIONS: [&str; 3] = [
    "**Call your local emergency number now** (e.g., 911 in the U.S.).",
    "If it’s safe, stay with the person and keep them comfortable until help arrives.",
    "If you can, note **when symptoms started** and any key history to share with responders.",
];

const URGENT_ACTIONS: [&str; 2] = [
    "Consider calling a licensed clinician/nurse line **today** for guidance, especially if symptoms are new or worsening.",
    "If there was a **fall/head impact**, monitor closely and seek professional guidance—especially for new symptoms.",
];

const MEDICATION_GUARDRAIL: &str = "**Medication note:** This app cannot advise on medicines. **Do not start/stop/change doses** based on this tool. Contact a **pharmacist or prescriber** for medication questions or side effects.";

const GENERAL_HEADER: &str = "**Helpful next steps (general):**";

const GENERAL_STEPS: [&str; 4] = [
    "Make sure the person is **safe right now** (remove hazards, ensure supervision if needed).",
    "Gather **facts**: when it started, what changed, triggers, what helped/worsened it.",
    "If symptoms are **new, severe, or worsening**, contact a licensed clinician for guidance.",
    "If there’s any **immediate danger**, call your local emergency number.",
];

/// What to track for a clinician or caregiver team.
pub const TRACKING_CHECKLIST: [&str; 5] = [
    "When it started / how it changed over time",
    "Triggers (time of day, meals, new stressors, activity)",
    "What helped (calm environment, hydration, rest, distraction)",
    "Sleep, food, fluids, toileting changes",
    "Any new safety risks (falls, wandering, choking)",
];

/// Header line followed by bullets for one topic.
fn topic_block(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::AgitationOrAnxiety => &[
            "**Agitation/anxiety support (general):**",
            "- Reduce stimulation (lower noise/light), offer calm reassurance, and keep your voice steady.",
            "- Check basic needs: hunger, thirst, toileting, temperature comfort.",
            "- Try a simple grounding activity: slow breathing together, familiar music, short walk if safe.",
        ],
        Topic::Sleep => &[
            "**Sleep support (general):**",
            "- Keep a consistent routine (wake time, light exposure in the morning).",
            "- Limit caffeine late in the day and reduce screen/light at night.",
            "- If sudden major sleep changes occur, consider discussing with a clinician.",
        ],
        Topic::Pain => &[
            "**Pain support (general):**",
            "- Ask where it hurts and what makes it better/worse; note severity and timing.",
            "- Use comfort measures (rest, positioning, gentle heat/cold if appropriate and safe).",
            "- New or severe pain warrants professional guidance.",
        ],
        Topic::MemoryOrConfusion => &[
            "**Confusion/memory changes (general):**",
            "- Use simple, reassuring cues; avoid arguing; offer one step at a time.",
            "- Note if confusion is **new/sudden**—that can be urgent and worth clinician input.",
        ],
        Topic::EatingDrinking => &[
            "**Eating/drinking support (general):**",
            "- Offer small sips/snacks more frequently and make food easy to chew/swallow.",
            "- Watch for dehydration signs (very dark urine, dizziness, very dry mouth) and seek guidance if concerned.",
        ],
        Topic::Safety => &[
            "**Safety support (general):**",
            "- Reduce fall risks (clear pathways, good lighting, assistive devices if already used).",
            "- If wandering risk: consider supervision, door alarms, ID bracelet, and a plan for if they leave.",
        ],
        Topic::Mood => &[
            "**Mood support (general):**",
            "- Listen and validate feelings; try gentle structure and social connection if welcome.",
            "- If you notice any self-harm language or intent, treat it as urgent and seek immediate help.",
        ],
        Topic::CaregiverStress => &[
            "**Caregiver support (you matter too):**",
            "- If possible, take a short break (even 5–10 minutes) and hydrate/eat.",
            "- Ask someone specific for help (e.g., “Can you sit with them for 30 minutes today?”).",
            "- Consider local respite, caregiver groups, or talking with a clinician/therapist for support.",
        ],
    }
}

/// Build the ordered suggestion sequence for a classified input.
pub fn build_suggestions(tier: UrgencyTier, matches: &MatchResult) -> Vec<SuggestionItem> {
    let mut suggestions = Vec::new();

    match tier {
        UrgencyTier::Emergency => {
            suggestions.extend(EMERGENCY_ACTIONS.iter().map(|s| SuggestionItem::text(*s)));
        }
        UrgencyTier::Urgent => {
            suggestions.extend(URGENT_ACTIONS.iter().map(|s| SuggestionItem::text(*s)));
        }
        UrgencyTier::NonUrgent => {}
    }

    if matches.mentions_meds {
        suggestions.push(SuggestionItem::text(MEDICATION_GUARDRAIL));
    }

    // Emission follows Topic::ALL, not the sorted detection order.
    for topic in Topic::ALL {
        if matches.has_topic(topic) {
            suggestions.extend(topic_block(topic).iter().map(|s| SuggestionItem::text(*s)));
        }
    }

    suggestions.push(SuggestionItem::Divider);
    suggestions.push(SuggestionItem::text(GENERAL_HEADER));
    suggestions.extend(
        GENERAL_STEPS
            .iter()
            .map(|step| SuggestionItem::text(format!("- {step}"))),
    );

    suggestions
}

/// Draft message to a clinician with the caregiver's own words inserted.
///
/// Only the first [`CLINICIAN_EXCERPT_CHARS`] characters of the trimmed
/// input are copied. The text is otherwise left as written.
pub fn clinician_message(original_text: &str) -> String {
    let excerpt: String = original_text
        .trim()
        .chars()
        .take(CLINICIAN_EXCERPT_CHARS)
        .collect();

    format!(
        "Hello, I’m caring for someone and I’m concerned about the following:\n\
         \n\
         - What happened: {excerpt}\n\
         - When it started / timeline:\n\
         - Severity (mild/moderate/severe) and what has changed:\n\
         - What we tried and what helped:\n\
         - Any safety concerns (falls, breathing, confusion, etc.):\n\
         \n\
         Could you advise on next steps and whether we should be seen urgently?\n"
    )
}

/// Compose the full response bundle.
pub fn assemble(original_text: &str, tier: UrgencyTier, matches: MatchResult) -> ResponseBundle {
    let suggestions = build_suggestions(tier, &matches);

    ResponseBundle {
        urgency: tier,
        urgency_label: tier.label(),
        severity: tier.severity(),
        matches,
        suggestions,
        tracking: TRACKING_CHECKLIST.to_vec(),
        clinician_message: clinician_message(original_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(topics: Vec<Topic>, mentions_meds: bool) -> MatchResult {
        MatchResult {
            emergency_hits: vec![],
            urgent_hits: vec![],
            topics,
            mentions_meds,
        }
    }

    fn texts(items: &[SuggestionItem]) -> Vec<&str> {
        items.iter().filter_map(SuggestionItem::as_text).collect()
    }

    #[test]
    fn non_urgent_has_only_general_block() {
        let items = build_suggestions(UrgencyTier::NonUrgent, &matches(vec![], false));
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], SuggestionItem::Divider);
        assert_eq!(items[1].as_text(), Some(GENERAL_HEADER));
        assert!(items[2..].iter().all(|i| i.as_text().unwrap().starts_with("- ")));
    }

    #[test]
    fn emergency_block_leads() {
        let items = build_suggestions(UrgencyTier::Emergency, &matches(vec![], false));
        let lines = texts(&items);
        assert_eq!(&lines[..3], &EMERGENCY_ACTIONS[..]);
        assert!(!lines.iter().any(|l| URGENT_ACTIONS.contains(l)));
    }

    #[test]
    fn urgent_block_only_for_urgent_tier() {
        let items = build_suggestions(UrgencyTier::Urgent, &matches(vec![], false));
        let lines = texts(&items);
        assert_eq!(&lines[..2], &URGENT_ACTIONS[..]);
        assert!(!lines.iter().any(|l| EMERGENCY_ACTIONS.contains(l)));
    }

    #[test]
    fn medication_guardrail_follows_tier_actions() {
        let items = build_suggestions(UrgencyTier::Emergency, &matches(vec![], true));
        assert_eq!(items[3].as_text(), Some(MEDICATION_GUARDRAIL));
    }

    #[test]
    fn topic_blocks_follow_registration_order() {
        // Sorted detection order puts caregiver_stress before sleep.
        let detected = vec![Topic::CaregiverStress, Topic::Safety, Topic::Sleep];
        let items = build_suggestions(UrgencyTier::NonUrgent, &matches(detected, false));
        let headers: Vec<&str> = texts(&items)
            .into_iter()
            .filter(|l| l.starts_with("**") && *l != GENERAL_HEADER)
            .collect();
        assert_eq!(
            headers,
            vec![
                "**Sleep support (general):**",
                "**Safety support (general):**",
                "**Caregiver support (you matter too):**",
            ]
        );
    }

    #[test]
    fn every_topic_block_has_header_and_bullets() {
        for topic in Topic::ALL {
            let block = topic_block(topic);
            assert!(block[0].starts_with("**"), "{topic} header");
            assert!((2..=3).contains(&(block.len() - 1)), "{topic} bullets");
            assert!(block[1..].iter().all(|l| l.starts_with("- ")));
        }
    }

    #[test]
    fn divider_precedes_general_steps() {
        let items = build_suggestions(
            UrgencyTier::Urgent,
            &matches(vec![Topic::Pain], true),
        );
        let divider = items.iter().position(|i| *i == SuggestionItem::Divider).unwrap();
        assert_eq!(divider, items.len() - 6);
    }

    #[test]
    fn clinician_message_embeds_trimmed_input() {
        let msg = clinician_message("  Dad Seems Dizzy  ");
        assert!(msg.contains("- What happened: Dad Seems Dizzy\n"));
        assert!(msg.starts_with("Hello, I’m caring for someone"));
        assert!(msg.ends_with("seen urgently?\n"));
        assert!(msg.contains("- When it started / timeline:\n"));
    }

    #[test]
    fn clinician_message_truncates_to_prefix() {
        let long: String = "ab".repeat(300);
        let msg = clinician_message(&long);
        let line = msg
            .lines()
            .find(|l| l.starts_with("- What happened: "))
            .unwrap();
        let excerpt = line.trim_start_matches("- What happened: ");
        assert_eq!(excerpt.chars().count(), CLINICIAN_EXCERPT_CHARS);
        assert!(long.starts_with(excerpt));
    }

    #[test]
    fn clinician_message_truncates_on_char_boundary() {
        let long: String = "é".repeat(450);
        let msg = clinician_message(&long);
        assert!(msg.contains(&"é".repeat(400)));
        assert!(!msg.contains(&"é".repeat(401)));
    }

    #[test]
    fn assemble_fills_presentation_fields() {
        let bundle = assemble("text", UrgencyTier::Urgent, matches(vec![], false));
        assert_eq!(bundle.urgency_label, UrgencyTier::Urgent.label());
        assert_eq!(bundle.severity, UrgencyTier::Urgent.severity());
        assert_eq!(bundle.tracking.len(), 5);
    }
}
