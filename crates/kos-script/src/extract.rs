//! Identifier extraction from raw kerboscript text.
//!
//! The extractor walks the scanned character stream, skips everything that
//! is not code, and collects API-looking identifiers while classifying names
//! the script declares itself (`SET x TO ...`, `LOCAL x IS ...`, loop
//! iterators, function names) as user-defined.

use std::collections::HashMap;

use crate::keywords::{is_builtin_lockable, is_keyword};
use crate::scanner::{ScannedChar, scan};

/// One identifier occurrence surviving deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIdentifier {
    /// Original casing as first seen in the script.
    pub text: String,
    /// Uppercase form; identity for set membership.
    pub normalized: String,
    /// 1-based line of the first occurrence.
    pub line: usize,
    pub is_user_defined: bool,
}

/// Insertion-ordered identifier collection, deduplicated by normalized form.
///
/// The first occurrence fixes `text` and `line`. A later occurrence in a
/// declaration slot still upgrades `is_user_defined`, so a variable used
/// before it is declared is not validated as an API name.
#[derive(Debug, Clone, Default)]
pub struct IdentifierSet {
    items: Vec<ExtractedIdentifier>,
    by_normalized: HashMap<String, usize>,
}

impl IdentifierSet {
    pub fn insert(&mut self, text: &str, line: usize, is_user_defined: bool) {
        let normalized = text.to_ascii_uppercase();
        if let Some(&idx) = self.by_normalized.get(&normalized) {
            if is_user_defined {
                self.items[idx].is_user_defined = true;
            }
            return;
        }
        self.by_normalized.insert(normalized.clone(), self.items.len());
        self.items.push(ExtractedIdentifier {
            text: text.to_string(),
            normalized,
            line,
            is_user_defined,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn identifiers(&self) -> &[ExtractedIdentifier] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedIdentifier> {
        self.items.iter()
    }

    pub fn is_user_defined(&self, name: &str) -> bool {
        self.by_normalized
            .get(&name.to_ascii_uppercase())
            .is_some_and(|&idx| self.items[idx].is_user_defined)
    }

    /// Identifiers that reference the API, i.e. everything not declared by
    /// the script itself.
    pub fn api_identifiers(&self) -> impl Iterator<Item = &ExtractedIdentifier> {
        self.items.iter().filter(|id| !id.is_user_defined)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_normalized.contains_key(&name.to_ascii_uppercase())
    }
}

/// Statement shape whose next single-segment identifier is a declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Set,
    Declare,
    Local,
    Global,
    Parameter,
    Function,
    For,
    Lock,
}

/// Extract every API-like identifier from `script`.
///
/// Empty or whitespace-only input yields an empty set. Content inside
/// comments and string literals never contributes identifiers.
pub fn extract(script: &str) -> IdentifierSet {
    let mut set = IdentifierSet::default();
    if script.trim().is_empty() {
        return set;
    }

    let scanned = scan(script);
    let mut pending = Pending::None;
    let mut i = 0usize;

    while i < scanned.len() {
        let sc = scanned[i];
        if !sc.in_code() {
            i += 1;
            continue;
        }
        let ch = sc.ch;

        if ch.is_ascii_digit() {
            i = consume_number(&scanned, i);
            continue;
        }

        if is_ident_start(ch) {
            let (text, line, next) = consume_chain(&scanned, i);
            i = next;
            pending = handle_token(&mut set, &text, line, pending);
            continue;
        }

        if ch == '.' {
            // Statement terminator ends any open declaration slot.
            pending = Pending::None;
        }
        i += 1;
    }
    set
}

fn handle_token(set: &mut IdentifierSet, text: &str, line: usize, pending: Pending) -> Pending {
    let segments: Vec<&str> = text.split(':').collect();

    if segments.len() == 1 {
        if is_keyword(text) {
            return pending_for_keyword(text);
        }
        let (user_defined, next) = classify_single(text, pending);
        set.insert(text, line, user_defined);
        return next;
    }

    // Colon-chain: the full chain plus every segment, no partial prefixes.
    // A chain cannot be a declared name, so it consumes any open slot.
    set.insert(text, line, false);
    for segment in segments {
        set.insert(segment, line, false);
    }
    Pending::None
}

fn classify_single(text: &str, pending: Pending) -> (bool, Pending) {
    match pending {
        Pending::Set
        | Pending::Declare
        | Pending::Local
        | Pending::Global
        | Pending::Function
        | Pending::For => (true, Pending::None),
        // PARAMETER binds a comma-separated list of names.
        Pending::Parameter => (true, Pending::Parameter),
        Pending::Lock => (!is_builtin_lockable(text), Pending::None),
        Pending::None => (false, Pending::None),
    }
}

fn pending_for_keyword(word: &str) -> Pending {
    if word.eq_ignore_ascii_case("SET") {
        Pending::Set
    } else if word.eq_ignore_ascii_case("DECLARE") {
        Pending::Declare
    } else if word.eq_ignore_ascii_case("LOCAL") {
        Pending::Local
    } else if word.eq_ignore_ascii_case("GLOBAL") {
        Pending::Global
    } else if word.eq_ignore_ascii_case("PARAMETER") {
        Pending::Parameter
    } else if word.eq_ignore_ascii_case("FUNCTION") {
        Pending::Function
    } else if word.eq_ignore_ascii_case("FOR") {
        Pending::For
    } else if word.eq_ignore_ascii_case("LOCK") {
        Pending::Lock
    } else {
        // TO, IS, IN, and every other structural word close the slot.
        Pending::None
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn code_char(scanned: &[ScannedChar], i: usize) -> Option<char> {
    scanned.get(i).filter(|sc| sc.in_code()).map(|sc| sc.ch)
}

/// Consume an identifier token, following `:` into a chain.
fn consume_chain(scanned: &[ScannedChar], start: usize) -> (String, usize, usize) {
    let line = scanned[start].line;
    let mut text = String::new();
    let mut i = start;

    i = consume_run(scanned, i, &mut text);
    while code_char(scanned, i) == Some(':')
        && code_char(scanned, i + 1).is_some_and(is_ident_start)
    {
        text.push(':');
        i = consume_run(scanned, i + 1, &mut text);
    }
    (text, line, i)
}

fn consume_run(scanned: &[ScannedChar], mut i: usize, text: &mut String) -> usize {
    while let Some(ch) = code_char(scanned, i).filter(|&ch| is_ident_continue(ch)) {
        text.push(ch);
        i += 1;
    }
    i
}

/// Consume a numeric literal: digits, optional fraction, optional exponent.
/// None of it becomes an identifier, not even the exponent letter.
fn consume_number(scanned: &[ScannedChar], start: usize) -> usize {
    let mut i = consume_digits(scanned, start);

    if code_char(scanned, i) == Some('.')
        && code_char(scanned, i + 1).is_some_and(|ch| ch.is_ascii_digit())
    {
        i = consume_digits(scanned, i + 1);
    }

    if matches!(code_char(scanned, i), Some('e') | Some('E')) {
        let mut j = i + 1;
        if matches!(code_char(scanned, j), Some('+') | Some('-')) {
            j += 1;
        }
        if code_char(scanned, j).is_some_and(|ch| ch.is_ascii_digit()) {
            i = consume_digits(scanned, j);
        }
    }
    i
}

fn consume_digits(scanned: &[ScannedChar], mut i: usize) -> usize {
    while code_char(scanned, i).is_some_and(|ch| ch.is_ascii_digit()) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &IdentifierSet) -> Vec<&str> {
        set.iter().map(|id| id.normalized.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(extract("").is_empty());
        assert!(extract("   \n\t ").is_empty());
    }

    #[test]
    fn chain_emits_full_path_and_segments() {
        let set = extract("PRINT SHIP:OBT:APOAPSIS.");
        assert_eq!(names(&set), vec!["SHIP:OBT:APOAPSIS", "SHIP", "OBT", "APOAPSIS"]);
        // No intermediate prefix.
        assert!(!set.contains("SHIP:OBT"));
    }

    #[test]
    fn keywords_are_never_identifiers() {
        let set = extract("PRINT SHIP. WAIT UNTIL TRUE.");
        assert!(!set.contains("PRINT"));
        assert!(!set.contains("WAIT"));
        assert!(!set.contains("UNTIL"));
        assert!(!set.contains("TRUE"));
        assert!(set.contains("SHIP"));
    }

    #[test]
    fn set_statement_declares_target() {
        let set = extract("SET x TO SHIP:ALTITUDE.");
        assert!(set.is_user_defined("x"));
        assert!(!set.is_user_defined("SHIP:ALTITUDE"));
        assert!(!set.is_user_defined("SHIP"));
    }

    #[test]
    fn set_on_suffix_chain_declares_nothing() {
        let set = extract("SET SHIP:CONTROL:PILOTMAINTHROTTLE TO 0.");
        assert!(set.api_identifiers().count() >= 4);
        assert!(!set.is_user_defined("SHIP"));
    }

    #[test]
    fn declare_variants_mark_user_defined() {
        let set = extract(
            "DECLARE a. DECLARE LOCAL b. DECLARE PARAMETER c. LOCAL d IS 1. GLOBAL e TO 2.",
        );
        for name in ["a", "b", "c", "d", "e"] {
            assert!(set.is_user_defined(name), "{name} should be user-defined");
        }
    }

    #[test]
    fn parameter_list_binds_every_name() {
        let set = extract("PARAMETER alpha, beta. PRINT alpha.");
        assert!(set.is_user_defined("alpha"));
        assert!(set.is_user_defined("beta"));
    }

    #[test]
    fn parameter_slot_ends_at_terminator() {
        let set = extract("PARAMETER alpha. gamma.");
        assert!(set.is_user_defined("alpha"));
        assert!(!set.is_user_defined("gamma"));
    }

    #[test]
    fn for_loop_marks_iterator_only() {
        let set = extract("FOR part IN SHIP:PARTS { PRINT part. }");
        assert!(set.is_user_defined("part"));
        assert!(!set.is_user_defined("SHIP"));
        assert!(!set.is_user_defined("PARTS"));
    }

    #[test]
    fn function_name_is_user_defined() {
        let set = extract("FUNCTION circularize { PRINT SHIP:APOAPSIS. }");
        assert!(set.is_user_defined("circularize"));
        assert!(!set.is_user_defined("SHIP"));
    }

    #[test]
    fn lock_of_builtin_stays_api() {
        let set = extract("LOCK STEERING TO PROGRADE. LOCK mySpeed TO SHIP:VELOCITY:SURFACE.");
        assert!(!set.is_user_defined("STEERING"));
        assert!(set.is_user_defined("mySpeed"));
    }

    #[test]
    fn numeric_literals_never_leak_exponents() {
        let set = extract("SET x TO 1.5e10. PRINT 2E+3. PRINT -42.");
        assert!(!set.contains("e10"));
        assert!(!set.contains("E"));
        assert_eq!(set.api_identifiers().count(), 0);
    }

    #[test]
    fn comments_and_strings_are_opaque() {
        let set = extract(
            "PRINT \"SHIP:FAKE\". // SHIP:COMMENTED\n/* SHIP:BLOCKED:OUT */ PRINT SHIP:REAL.",
        );
        assert!(!set.contains("SHIP:FAKE"));
        assert!(!set.contains("SHIP:COMMENTED"));
        assert!(!set.contains("SHIP:BLOCKED:OUT"));
        assert!(set.contains("SHIP:REAL"));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let set = extract("PRINT Altitude.\nPRINT ALTITUDE.\nPRINT altitude.");
        assert_eq!(set.len(), 1);
        let id = &set.identifiers()[0];
        assert_eq!(id.text, "Altitude");
        assert_eq!(id.line, 1);
    }

    #[test]
    fn later_declaration_upgrades_to_user_defined() {
        let set = extract("PRINT counter. SET counter TO 1.");
        assert!(set.is_user_defined("counter"));
        assert_eq!(set.identifiers()[0].line, 1);
    }

    #[test]
    fn deep_chain_is_fully_extracted() {
        let chain = (0..12).map(|n| format!("S{n}")).collect::<Vec<_>>().join(":");
        let set = extract(&format!("PRINT {chain}."));
        assert!(set.contains(&chain));
        for n in 0..12 {
            assert!(set.contains(&format!("S{n}")));
        }
        assert_eq!(set.len(), 13);
    }

    #[test]
    fn extraction_is_idempotent() {
        let script = "SET a TO SHIP:ALTITUDE. PRINT a. LOCK THROTTLE TO 1.";
        let first_set = extract(script);
        let second_set = extract(script);
        let first = names(&first_set);
        let second = names(&second_set);
        assert_eq!(first, second);
    }
}
