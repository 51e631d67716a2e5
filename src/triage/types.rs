use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Urgency tier derived from a [`MatchResult`] by fixed precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTier {
    /// At least one emergency rule matched.
    Emergency,
    /// No emergency match, at least one urgent match.
    Urgent,
    /// Neither rule set matched.
    NonUrgent,
}

impl UrgencyTier {
    /// Banner text shown to the caregiver.
    pub fn label(self) -> &'static str {
        match self {
            Self::Emergency => "EMERGENCY — act now",
            Self::Urgent => "URGENT — contact a clinician soon",
            Self::NonUrgent => "NON-URGENT — supportive steps & monitoring",
        }
    }

    /// Presentation tag for the banner colour. Carries no semantics.
    pub fn severity(self) -> SeverityTag {
        match self {
            Self::Emergency => SeverityTag::Red,
            Self::Urgent => SeverityTag::Orange,
            Self::NonUrgent => SeverityTag::Green,
        }
    }
}

/// Banner colour for an [`UrgencyTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTag {
    Red,
    Orange,
    Green,
}

/// Supportive-guidance category, independent of urgency.
///
/// Variant order is the emission order used by the assembler. Topic
/// lists in a [`MatchResult`] are sorted by [`Topic::as_str`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    AgitationOrAnxiety,
    Sleep,
    Pain,
    MemoryOrConfusion,
    EatingDrinking,
    Safety,
    Mood,
    CaregiverStress,
}

impl Topic {
    /// All topics in assembler emission order.
    pub const ALL: [Topic; 8] = [
        Topic::AgitationOrAnxiety,
        Topic::Sleep,
        Topic::Pain,
        Topic::MemoryOrConfusion,
        Topic::EatingDrinking,
        Topic::Safety,
        Topic::Mood,
        Topic::CaregiverStress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AgitationOrAnxiety => "agitation_or_anxiety",
            Self::Sleep => "sleep",
            Self::Pain => "pain",
            Self::MemoryOrConfusion => "memory_or_confusion",
            Self::EatingDrinking => "eating_drinking",
            Self::Safety => "safety",
            Self::Mood => "mood",
            Self::CaregiverStress => "caregiver_stress",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the pattern matcher found in one normalized input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Labels of matched emergency rules, in rule-table order.
    pub emergency_hits: Vec<&'static str>,
    /// Labels of matched urgent rules, in rule-table order.
    pub urgent_hits: Vec<&'static str>,
    /// Distinct matched topics, sorted by name.
    pub topics: Vec<Topic>,
    /// Whether a medication-related term is present.
    pub mentions_meds: bool,
}

impl MatchResult {
    pub fn has_topic(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }
}

/// One element of the ordered suggestion sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum SuggestionItem {
    /// A guidance line. Lines starting with `**` are section headers,
    /// lines starting with `- ` are bullets.
    Text(String),
    /// Visual break before the general-steps block.
    Divider,
}

impl SuggestionItem {
    pub fn text(line: impl Into<String>) -> Self {
        Self::Text(line.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(line) => Some(line),
            Self::Divider => None,
        }
    }
}

/// The complete, immutable output of one classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBundle {
    pub urgency: UrgencyTier,
    pub urgency_label: &'static str,
    pub severity: SeverityTag,
    pub matches: MatchResult,
    pub suggestions: Vec<SuggestionItem>,
    pub tracking: Vec<&'static str>,
    pub clinician_message: String,
}

/// Errors surfaced by the classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    /// Input was empty or whitespace-only after normalization.
    #[error("Please enter a brief description first.")]
    InvalidInput,
}

/// The classification seam the shell depends on.
pub trait Responder: Send + Sync {
    /// Classify free text and assemble guidance for it.
    fn classify(&self, text: &str) -> Result<ResponseBundle, TriageError>;

    /// Serialize a classification into the flat text report.
    fn export_report(
        &self,
        original_text: &str,
        timestamp: &str,
        bundle: &ResponseBundle,
    ) -> String;
}
