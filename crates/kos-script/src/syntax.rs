//! Structural lint for LLM-generated kerboscript.
//!
//! Flags damage that typically comes from chat output rather than from the
//! language itself: unbalanced braces and parens, Markdown artifacts,
//! smart quotes, and missing statement terminators. Shares the scanner with
//! the extractor so nothing inside comments or strings is counted.

use serde::Serialize;

use crate::scanner::{ScanMode, ScannedChar, scan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxIssueKind {
    UnbalancedBrace,
    UnbalancedParen,
    MarkdownArtifact,
    SmartQuote,
    MissingTerminator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntaxIssue {
    pub kind: SyntaxIssueKind,
    pub line: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SyntaxCheckResult {
    pub issues: Vec<SyntaxIssue>,
}

impl SyntaxCheckResult {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    fn push(&mut self, kind: SyntaxIssueKind, line: usize) {
        self.issues.push(SyntaxIssue { kind, line });
    }
}

/// Run all structural checks over `script`.
pub fn check(script: &str) -> SyntaxCheckResult {
    let mut result = SyntaxCheckResult::default();
    if script.trim().is_empty() {
        return result;
    }
    let scanned = scan(script);

    check_balance(&scanned, &mut result, '{', '}', SyntaxIssueKind::UnbalancedBrace);
    check_balance(&scanned, &mut result, '(', ')', SyntaxIssueKind::UnbalancedParen);
    check_markdown_artifacts(&scanned, &mut result);
    check_smart_quotes(&scanned, &mut result);
    check_terminators(&scanned, &mut result);

    result.issues.sort_by_key(|issue| issue.line);
    result
}

/// Depth-track one bracket kind; at most one issue per kind. An unmatched
/// close reports at its own line, unmatched opens report at end-of-input.
fn check_balance(
    scanned: &[ScannedChar],
    result: &mut SyntaxCheckResult,
    open: char,
    close: char,
    kind: SyntaxIssueKind,
) {
    let mut depth = 0i32;
    for sc in scanned.iter().filter(|sc| sc.in_code()) {
        if sc.ch == open {
            depth += 1;
        } else if sc.ch == close {
            if depth == 0 {
                result.push(kind, sc.line);
                return;
            }
            depth -= 1;
        }
    }
    if depth > 0 {
        result.push(kind, last_line(scanned));
    }
}

/// Backticks in code, plus lines starting with bullet or heading syntax.
fn check_markdown_artifacts(scanned: &[ScannedChar], result: &mut SyntaxCheckResult) {
    for sc in scanned.iter().filter(|sc| sc.in_code()) {
        if sc.ch == '`' {
            result.push(SyntaxIssueKind::MarkdownArtifact, sc.line);
        }
    }
    for line in split_lines(scanned) {
        let Some(pos) = line.iter().position(|sc| !sc.ch.is_whitespace()) else {
            continue;
        };
        let first = line[pos];
        if first.mode != ScanMode::Normal {
            continue;
        }
        let bullet = matches!(first.ch, '-' | '*')
            && line.get(pos + 1).is_some_and(|sc| sc.ch == ' ');
        let heading = first.ch == '#';
        if bullet || heading {
            result.push(SyntaxIssueKind::MarkdownArtifact, first.line);
        }
    }
}

/// Smart/curly quotes break the tokenizer wherever they appear.
fn check_smart_quotes(scanned: &[ScannedChar], result: &mut SyntaxCheckResult) {
    for sc in scanned {
        if matches!(sc.ch, '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}') {
            result.push(SyntaxIssueKind::SmartQuote, sc.line);
        }
    }
}

/// A line must end in `.`, a brace, a trailing comment, or a continuation
/// operator; anything else is a missing statement terminator.
fn check_terminators(scanned: &[ScannedChar], result: &mut SyntaxCheckResult) {
    const CONTINUATION: &[char] = &['+', '-', '*', '/', '^', '(', ',', '=', '<', '>', ':'];
    for line in split_lines(scanned) {
        let Some(last) = line.iter().rev().find(|sc| !sc.ch.is_whitespace()) else {
            continue;
        };
        // A trailing comment, or a string/block comment running past the end
        // of the line, exempts it.
        if last.mode != ScanMode::Normal {
            continue;
        }
        if matches!(last.ch, '.' | '{' | '}') || CONTINUATION.contains(&last.ch) {
            continue;
        }
        result.push(SyntaxIssueKind::MissingTerminator, last.line);
    }
}

fn split_lines(scanned: &[ScannedChar]) -> impl Iterator<Item = &[ScannedChar]> {
    scanned.split(|sc| sc.ch == '\n')
}

fn last_line(scanned: &[ScannedChar]) -> usize {
    scanned.last().map_or(1, |sc| sc.line)
}
