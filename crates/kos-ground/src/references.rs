//! `## References` section listing the documentation behind verified
//! identifiers.

use std::collections::HashSet;

use kos_model::{DocEntry, DocIndex, GroundingReport, VerifiedIdentifier};

const DESCRIPTION_LIMIT: usize = 60;

/// Render the references section for a grounding report.
///
/// One line per distinct source doc: several verified identifiers pointing
/// at the same entry collapse into the first. The doc behind a line is the
/// verified identifier's own `source_doc` when set, otherwise a lookup in
/// `index` by matched path.
pub fn build_references(report: &GroundingReport, index: Option<&DocIndex>) -> String {
    if report.verified.is_empty() {
        if report.unverified.is_empty() {
            return String::new();
        }
        return "## References\n\nNo documentation references available.\n".to_string();
    }

    let mut out = String::from("## References\n\n");
    let mut seen = HashSet::new();
    for verified in &report.verified {
        let doc = resolve_doc(verified, index);
        let key = doc
            .map(|d| d.id.to_ascii_uppercase())
            .unwrap_or_else(|| verified.matched_path.to_ascii_uppercase());
        if !seen.insert(key) {
            continue;
        }
        out.push_str(&reference_line(verified, doc));
        out.push('\n');
    }
    out
}

fn resolve_doc<'a>(
    verified: &'a VerifiedIdentifier,
    index: Option<&'a DocIndex>,
) -> Option<&'a DocEntry> {
    verified
        .source_doc
        .as_ref()
        .or_else(|| index.and_then(|idx| idx.get_by_id_or_alias(&verified.matched_path)))
}

fn reference_line(verified: &VerifiedIdentifier, doc: Option<&DocEntry>) -> String {
    let mut line = format!("- `{}`", verified.identifier);
    if let Some(description) = doc.and_then(|d| d.description.as_deref()) {
        line.push_str(&format!(" — {}", truncate(description)));
    }
    let source_ref = doc
        .and_then(|d| d.source_ref.as_deref())
        .or(verified.source_ref.as_deref());
    match source_ref {
        Some(url) => line.push_str(&format!(" ([docs]({url}))")),
        None => line.push_str(" (local docs)"),
    }
    line
}

fn truncate(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let cut: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    format!("{cut}...")
}
