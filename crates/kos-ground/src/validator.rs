//! Identifier grounding against retrieved documentation.
//!
//! Matching runs against a flattened token set rebuilt per call from the
//! retrieved doc subset, never against a persistent index, so validation
//! stays a pure function of its inputs. The optional full index is consulted
//! only for suggestions, never for pass/fail.

use std::collections::HashMap;

use kos_model::{
    CaseInsensitiveLookup, DocEntry, DocIndex, GroundingReport, UnverifiedIdentifier,
    VerifiedIdentifier,
};
use kos_script::{ExtractedIdentifier, IdentifierSet};

use crate::suggest::{MAX_SUGGESTIONS, suggest};

/// Advisory emitted when the retrieval layer supplied no documentation.
/// Deliberately distinct from "validation ran and everything failed".
pub const NO_DOCS_WARNING: &str =
    "No documentation was retrieved for this response; identifier grounding was skipped.";

/// Case-insensitive union of every retrieved entry's id, id segments, name,
/// and aliases. Rebuilt per validation call.
#[derive(Debug)]
struct KnownTokenSet<'a> {
    tokens: CaseInsensitiveLookup,
    /// Full id / name / alias, uppercased, to the first entry carrying it.
    by_name: HashMap<String, &'a DocEntry>,
}

impl<'a> KnownTokenSet<'a> {
    fn from_entries(entries: &'a [DocEntry]) -> Self {
        let mut tokens = CaseInsensitiveLookup::default();
        let mut by_name: HashMap<String, &'a DocEntry> = HashMap::new();
        for entry in entries {
            for token in std::iter::once(entry.id.as_str())
                .chain(entry.id_segments())
                .chain(std::iter::once(entry.name.as_str()))
                .chain(entry.aliases.iter().map(String::as_str))
            {
                tokens.insert(token);
            }
            for name in std::iter::once(entry.id.as_str())
                .chain(std::iter::once(entry.name.as_str()))
                .chain(entry.aliases.iter().map(String::as_str))
            {
                by_name.entry(name.to_ascii_uppercase()).or_insert(entry);
            }
        }
        Self { tokens, by_name }
    }

    fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    fn resolve(&self, name: &str) -> Option<&'a DocEntry> {
        self.by_name.get(name).copied()
    }
}

/// Validates an identifier set against the docs retrieved for one response.
#[derive(Debug, Clone)]
pub struct GroundingValidator<'a> {
    retrieved: &'a [DocEntry],
    full_index: Option<&'a DocIndex>,
}

impl<'a> GroundingValidator<'a> {
    pub fn new(retrieved: &'a [DocEntry]) -> Self {
        Self {
            retrieved,
            full_index: None,
        }
    }

    /// Attach the full corpus index, enabling typo suggestions.
    pub fn with_full_index(mut self, index: &'a DocIndex) -> Self {
        self.full_index = Some(index);
        self
    }

    pub fn validate(&self, identifiers: &IdentifierSet) -> GroundingReport {
        let mut report = GroundingReport::default();
        if identifiers.is_empty() {
            return report;
        }
        if self.retrieved.is_empty() {
            tracing::debug!("no documentation retrieved, skipping grounding");
            report.warning = Some(NO_DOCS_WARNING.to_string());
            return report;
        }

        let tokens = KnownTokenSet::from_entries(self.retrieved);

        for identifier in identifiers.iter() {
            if identifier.is_user_defined {
                report.add_user_defined(&identifier.text);
            }
        }

        for identifier in identifiers.api_identifiers() {
            match self.first_missing_segment(&tokens, identifier) {
                None => report.add_verified(self.verified(&tokens, identifier)),
                Some(segment) => {
                    let suggested_matches = self
                        .full_index
                        .map(|index| suggest(index, segment, MAX_SUGGESTIONS))
                        .unwrap_or_default();
                    report.add_unverified(UnverifiedIdentifier {
                        identifier: identifier.text.clone(),
                        line: identifier.line,
                        suggested_matches,
                    });
                }
            }
        }

        tracing::debug!(
            verified = report.verified.len(),
            unverified = report.unverified.len(),
            user_defined = report.user_defined.len(),
            "grounding validation complete"
        );
        report
    }

    /// `None` when the identifier is attested: either verbatim, or with
    /// every `:`-segment known somewhere in the retrieved docs (a suffix
    /// documented under one structure is accepted under any other).
    fn first_missing_segment<'b>(
        &self,
        tokens: &KnownTokenSet<'_>,
        identifier: &'b ExtractedIdentifier,
    ) -> Option<&'b str> {
        if tokens.contains(&identifier.normalized) {
            return None;
        }
        identifier
            .normalized
            .split(':')
            .find(|segment| !tokens.contains(segment))
    }

    fn verified(
        &self,
        tokens: &KnownTokenSet<'_>,
        identifier: &ExtractedIdentifier,
    ) -> VerifiedIdentifier {
        let source_doc = tokens.resolve(&identifier.normalized).cloned();
        VerifiedIdentifier {
            identifier: identifier.text.clone(),
            matched_path: identifier.normalized.clone(),
            source_ref: source_doc.as_ref().and_then(|doc| doc.source_ref.clone()),
            source_doc,
        }
    }
}

/// Extract and validate in one step.
pub fn ground_script(
    script: &str,
    retrieved: &[DocEntry],
    full_index: Option<&DocIndex>,
) -> GroundingReport {
    let identifiers = kos_script::extract(script);
    let mut validator = GroundingValidator::new(retrieved);
    if let Some(index) = full_index {
        validator = validator.with_full_index(index);
    }
    validator.validate(&identifiers)
}
