//! Reserved kerboscript words.
//!
//! Statement and operator words are structural, never identifiers, so the
//! extractor drops them entirely. Matching is case-insensitive.

pub const KEYWORDS: &[&str] = &[
    "ADD", "ALL", "AND", "AT", "BATCH", "BREAK", "CLEARSCREEN", "COMPILE", "COPY", "DECLARE",
    "DELETE", "DEPLOY", "DO", "EDIT", "ELSE", "FALSE", "FILE", "FOR", "FROM", "FUNCTION",
    "GLOBAL", "IF", "IN", "IS", "LAZYGLOBAL", "LIST", "LOCAL", "LOCK", "LOG", "NOT", "OFF",
    "ON", "OR", "PARAMETER", "PRESERVE", "PRINT", "REBOOT", "REMOVE", "RENAME", "RETURN",
    "RUN", "RUNONCEPATH", "RUNPATH", "SET", "SHUTDOWN", "STAGE", "STEP", "SWITCH", "THEN",
    "TO", "TOGGLE", "TRUE", "UNLOCK", "UNSET", "UNTIL", "VOLUME", "WAIT", "WHEN",
];

/// Names that stay API identifiers even in a `LOCK <name> TO` slot.
pub const BUILTIN_LOCKABLES: &[&str] = &["STEERING", "THROTTLE", "WHEELSTEERING", "WHEELTHROTTLE"];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word))
}

pub fn is_builtin_lockable(word: &str) -> bool {
    BUILTIN_LOCKABLES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(word))
}
