use super::types::ResponseBundle;

pub const EXPORT_TITLE: &str = "Caregiver Support (Rule-Based Demo) — Export";

/// Suggested download name for the text report.
pub const EXPORT_FILENAME: &str = "caregiver_support_export.txt";
pub const EXPORT_MIME: &str = "text/plain";

/// Serialize a classification into a flat text report.
///
/// The user input section carries the full trimmed text, even when the
/// clinician draft only holds an excerpt. Dividers are dropped from the
/// suggestion list. Output depends only on the arguments.
pub fn export_report(original_text: &str, timestamp: &str, bundle: &ResponseBundle) -> String {
    let matches = &bundle.matches;
    let mut lines: Vec<String> = vec![
        EXPORT_TITLE.to_string(),
        format!("Generated: {timestamp}"),
        String::new(),
        "USER INPUT:".to_string(),
        original_text.trim().to_string(),
        String::new(),
        format!("URGENCY: {}", bundle.urgency_label),
    ];

    if !matches.emergency_hits.is_empty() {
        lines.push(format!("EMERGENCY FLAGS: {}", matches.emergency_hits.join(", ")));
    }
    if !matches.urgent_hits.is_empty() {
        lines.push(format!("URGENT FLAGS: {}", matches.urgent_hits.join(", ")));
    }
    if !matches.topics.is_empty() {
        let topics: Vec<&str> = matches.topics.iter().map(|t| t.as_str()).collect();
        lines.push(format!("TOPICS: {}", topics.join(", ")));
    }

    lines.push(String::new());
    lines.push("SUGGESTIONS:".to_string());
    lines.extend(
        bundle
            .suggestions
            .iter()
            .filter_map(|item| item.as_text())
            .map(|line| format!("- {line}")),
    );

    lines.push(String::new());
    lines.push("TRACKING CHECKLIST:".to_string());
    lines.extend(bundle.tracking.iter().map(|item| format!("- {item}")));

    lines.push(String::new());
    lines.push("CLINICIAN MESSAGE TEMPLATE:".to_string());
    lines.push(bundle.clinician_message.clone());

    lines.join("\n")
}
