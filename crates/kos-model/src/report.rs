//! Result types produced by one grounding validation pass.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::entry::DocEntry;

/// An identifier attested by the retrieved documentation.
#[derive(Debug, Clone, Serialize)]
pub struct VerifiedIdentifier {
    /// The identifier as written in the script.
    pub identifier: String,
    /// The documentation path it matched (normalized).
    pub matched_path: String,
    /// Link into the online docs, when the matched entry carries one.
    pub source_ref: Option<String>,
    /// The matched entry, when the full identifier resolved to one.
    pub source_doc: Option<DocEntry>,
}

/// An identifier the retrieved documentation does not attest.
#[derive(Debug, Clone, Serialize)]
pub struct UnverifiedIdentifier {
    pub identifier: String,
    /// 1-based line of the first occurrence.
    pub line: usize,
    /// Best-effort "did you mean" candidates, possibly empty.
    pub suggested_matches: Vec<String>,
}

/// Outcome of validating one identifier set against retrieved docs.
///
/// Constructed fresh per validation call and only mutated through the
/// `add_*` methods while being built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroundingReport {
    pub verified: Vec<VerifiedIdentifier>,
    pub unverified: Vec<UnverifiedIdentifier>,
    /// Uppercased names the script declared itself; never validated.
    pub user_defined: BTreeSet<String>,
    /// Advisory only, e.g. when no documentation was retrieved. Does not
    /// affect `is_valid`.
    pub warning: Option<String>,
}

impl GroundingReport {
    pub fn is_valid(&self) -> bool {
        self.unverified.is_empty()
    }

    /// Add a verified identifier, ignoring case-insensitive duplicates.
    pub fn add_verified(&mut self, verified: VerifiedIdentifier) {
        if self
            .verified
            .iter()
            .any(|existing| existing.identifier.eq_ignore_ascii_case(&verified.identifier))
        {
            return;
        }
        self.verified.push(verified);
    }

    /// Add an unverified identifier, ignoring case-insensitive duplicates.
    pub fn add_unverified(&mut self, unverified: UnverifiedIdentifier) {
        if self
            .unverified
            .iter()
            .any(|existing| existing.identifier.eq_ignore_ascii_case(&unverified.identifier))
        {
            return;
        }
        self.unverified.push(unverified);
    }

    pub fn add_user_defined(&mut self, name: &str) {
        self.user_defined.insert(name.to_ascii_uppercase());
    }
}
