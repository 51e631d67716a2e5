/// Trim and lowercase raw caregiver text before matching.
///
/// Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
