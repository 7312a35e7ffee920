//! Markdown feedback block appended to the chat transcript.

use kos_model::GroundingReport;

use crate::suggest::MAX_SUGGESTIONS;

/// Unverified entries rendered before the overflow footer.
pub const MAX_FEEDBACK_ITEMS: usize = 10;

/// Render the warning/success block for a grounding report.
///
/// Returns an empty string when there is nothing to say: an empty report,
/// or the no-docs short circuit where nothing was validated. A warning
/// block always wins over success language.
pub fn build_feedback(report: &GroundingReport) -> String {
    if report.verified.is_empty() && report.unverified.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if report.unverified.is_empty() {
        out.push_str("---\n\n");
        out.push_str("**Grounded**: all identifiers verified against the kOS documentation.\n");
        return out;
    }

    out.push_str("---\n\n");
    out.push_str("**Grounded Check Failed**\n\n");
    for item in report.unverified.iter().take(MAX_FEEDBACK_ITEMS) {
        out.push_str(&format!("- `{}` (line {})", item.identifier, item.line));
        if !item.suggested_matches.is_empty() {
            // Reports built elsewhere may carry more candidates than the
            // validator's own cap; the rendered list stays bounded.
            let shown: Vec<&str> = item
                .suggested_matches
                .iter()
                .take(MAX_SUGGESTIONS)
                .map(String::as_str)
                .collect();
            out.push_str(&format!(", did you mean: {}", shown.join(", ")));
        }
        out.push('\n');
    }
    if report.unverified.len() > MAX_FEEDBACK_ITEMS {
        out.push_str(&format!(
            "...and {} more\n",
            report.unverified.len() - MAX_FEEDBACK_ITEMS
        ));
    }
    out
}
