use super::types::{MatchResult, UrgencyTier};

/// Map matcher output to an urgency tier.
///
/// Emergency beats urgent beats non-urgent. Topics and the medication
/// flag never influence the tier.
pub fn resolve_urgency(matches: &MatchResult) -> UrgencyTier {
    if !matches.emergency_hits.is_empty() {
        UrgencyTier::Emergency
    } else if !matches.urgent_hits.is_empty() {
        UrgencyTier::Urgent
    } else {
        UrgencyTier::NonUrgent
    }
}
