use std::sync::LazyLock;

use regex::Regex;

use super::types::Topic;

/// A compiled pattern with its human-readable label.
pub struct PatternRule {
    regex: Regex,
    pub label: &'static str,
}

impl PatternRule {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// One topic and its pattern variants, tested in order.
struct TopicRule {
    topic: Topic,
    variants: Vec<Regex>,
}

/// Immediate emergency response indicated.
pub static EMERGENCY_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"\b(chest pain|pressure in chest|heart attack)\b",
            "Possible chest-pain emergency",
        ),
        rule(
            r"\b(trouble breathing|can't breathe|cannot breathe|shortness of breath|turning blue)\b",
            "Breathing emergency",
        ),
        rule(
            r"\b(stroke|face droop|slurred speech|arm weakness|FAST)\b",
            "Possible stroke signs",
        ),
        rule(
            r"\b(unconscious|unresponsive|won't wake|not waking)\b",
            "Unresponsive person",
        ),
        rule(r"\b(seizure|convulsion)\b", "Seizure/convulsion"),
        rule(
            r"\b(heavy bleeding|won't stop bleeding|bleeding a lot)\b",
            "Severe bleeding",
        ),
        rule(
            r"\b(suicidal|kill myself|end my life|self harm)\b",
            "Self-harm risk",
        ),
        rule(
            r"\b(overdose|took too many pills|poisoned)\b",
            "Possible overdose/poisoning",
        ),
    ]
});

/// Same-day clinician contact advisable.
pub static URGENT_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"\b(fever\s*(over|above)\s*103|fever\s*103)\b",
            "High fever",
        ),
        rule(
            r"\b(new confusion|sudden confusion|delirium|not making sense)\b",
            "Sudden confusion",
        ),
        rule(
            r"\b(fall|fell|hit (their|her|his) head|head injury)\b",
            "Fall or head impact",
        ),
        rule(r"\b(severe pain|worst pain)\b", "Severe pain"),
        rule(
            r"\b(dehydrated|no urine|not peeing|dry mouth)\b",
            "Possible dehydration",
        ),
    ]
});

/// Topic vocabularies. Table order is irrelevant to output: detected
/// topics are sorted by name.
static TOPIC_RULES: LazyLock<Vec<TopicRule>> = LazyLock::new(|| {
    vec![
        topic(
            Topic::AgitationOrAnxiety,
            &[r"\b(agitated|agitation|anxious|panic|restless|irritable)\b"],
        ),
        topic(
            Topic::Sleep,
            &[r"\b(can't sleep|insomnia|sleeping all day|sleepy)\b"],
        ),
        topic(Topic::Pain, &[r"\b(pain|hurts|ache|aching)\b"]),
        topic(
            Topic::MemoryOrConfusion,
            &[r"\b(forgetful|memory|confused|confusion|dementia|delirium)\b"],
        ),
        topic(
            Topic::EatingDrinking,
            &[r"\b(not eating|not drinking|won't eat|won't drink|loss of appetite)\b"],
        ),
        topic(
            Topic::CaregiverStress,
            &[r"\b(burnout|overwhelmed|exhausted|can't do this|no support)\b"],
        ),
        topic(
            Topic::Safety,
            &[r"\b(wandering|left the stove on|unsafe|falls risk|choking)\b"],
        ),
        topic(Topic::Mood, &[r"\b(depressed|hopeless|crying|sad)\b"]),
    ]
});

static MEDICATION_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(med|meds|medicine|medication|pill|dose|dosage|prescription|refill)\b")
});

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("Invalid triage regex pattern")
}

fn rule(pattern: &str, label: &'static str) -> PatternRule {
    PatternRule {
        regex: compile(pattern),
        label,
    }
}

fn topic(topic: Topic, variants: &[&str]) -> TopicRule {
    TopicRule {
        topic,
        variants: variants.iter().map(|p| compile(p)).collect(),
    }
}

/// Labels of every rule whose pattern occurs anywhere in `text`,
/// in rule-table order.
pub fn find_matches(rules: &[PatternRule], text: &str) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|r| r.is_match(text))
        .map(|r| r.label)
        .collect()
}

/// Distinct topics present in `text`, sorted by topic name.
///
/// Each topic stops at its first matching variant.
pub fn detect_topics(text: &str) -> Vec<Topic> {
    let mut topics: Vec<Topic> = TOPIC_RULES
        .iter()
        .filter(|t| t.variants.iter().any(|v| v.is_match(text)))
        .map(|t| t.topic)
        .collect();
    topics.sort_by_key(|t| t.as_str());
    topics.dedup();
    topics
}

/// Whether `text` mentions medication in any form.
pub fn mentions_medication(text: &str) -> bool {
    MEDICATION_MENTION.is_match(text)
}
