//! Comment/string-aware scanning shared by the extractor and the syntax
//! checker.
//!
//! A single forward pass annotates every character with the lexical mode it
//! sits in and its 1-based line. Delimiters count as part of the region they
//! open or close: both slashes of `//`, the `/*` and `*/` pairs, and the
//! quotes of a string literal are all non-code. Line numbers keep advancing
//! inside comments and strings so downstream positions stay accurate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Normal,
    LineComment,
    BlockComment,
    StringLiteral,
}

/// One input character with its lexical context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScannedChar {
    pub ch: char,
    pub line: usize,
    pub mode: ScanMode,
}

impl ScannedChar {
    pub fn in_code(&self) -> bool {
        self.mode == ScanMode::Normal
    }
}

/// Annotate every character of `script` with mode and line.
pub fn scan(script: &str) -> Vec<ScannedChar> {
    let chars: Vec<char> = script.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut mode = ScanMode::Normal;
    let mut line = 1usize;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();
        match mode {
            ScanMode::Normal => {
                if ch == '/' && next == Some('/') {
                    mode = ScanMode::LineComment;
                    out.push(ScannedChar { ch, line, mode });
                    out.push(ScannedChar { ch: '/', line, mode });
                    i += 2;
                    continue;
                }
                if ch == '/' && next == Some('*') {
                    mode = ScanMode::BlockComment;
                    out.push(ScannedChar { ch, line, mode });
                    out.push(ScannedChar { ch: '*', line, mode });
                    i += 2;
                    continue;
                }
                if ch == '"' {
                    mode = ScanMode::StringLiteral;
                    out.push(ScannedChar { ch, line, mode });
                    i += 1;
                    continue;
                }
                out.push(ScannedChar { ch, line, mode });
            }
            ScanMode::LineComment => {
                out.push(ScannedChar { ch, line, mode });
                if ch == '\n' {
                    mode = ScanMode::Normal;
                }
            }
            ScanMode::BlockComment => {
                if ch == '*' && next == Some('/') {
                    out.push(ScannedChar { ch, line, mode });
                    out.push(ScannedChar { ch: '/', line, mode });
                    mode = ScanMode::Normal;
                    i += 2;
                    continue;
                }
                out.push(ScannedChar { ch, line, mode });
            }
            ScanMode::StringLiteral => {
                if ch == '\\' && next == Some('"') {
                    // Escaped quote stays inside the literal.
                    out.push(ScannedChar { ch, line, mode });
                    out.push(ScannedChar { ch: '"', line, mode });
                    i += 2;
                    continue;
                }
                out.push(ScannedChar { ch, line, mode });
                if ch == '"' {
                    mode = ScanMode::Normal;
                }
            }
        }
        if ch == '\n' {
            line += 1;
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes(script: &str) -> Vec<(char, ScanMode)> {
        scan(script).into_iter().map(|sc| (sc.ch, sc.mode)).collect()
    }

    #[test]
    fn line_comment_runs_to_newline() {
        let scanned = scan("a // b\nc");
        let code: String = scanned.iter().filter(|sc| sc.in_code()).map(|sc| sc.ch).collect();
        assert_eq!(code, "a c");
    }

    #[test]
    fn empty_block_comment_closes_immediately() {
        let scanned = modes("/**/x");
        assert_eq!(scanned.last(), Some(&('x', ScanMode::Normal)));
        assert!(
            scanned[..4]
                .iter()
                .all(|(_, mode)| *mode == ScanMode::BlockComment)
        );
    }

    #[test]
    fn block_comment_spans_lines() {
        let scanned = scan("/* a\nb */ c");
        let c = scanned.iter().find(|sc| sc.ch == 'c').unwrap();
        assert_eq!(c.mode, ScanMode::Normal);
        assert_eq!(c.line, 2);
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let scanned = scan(r#""a\"b" c"#);
        let c = scanned.iter().find(|sc| sc.ch == 'c').unwrap();
        assert!(c.in_code());
        let b = scanned.iter().find(|sc| sc.ch == 'b').unwrap();
        assert_eq!(b.mode, ScanMode::StringLiteral);
    }

    #[test]
    fn empty_string_literal_scans_cleanly() {
        let scanned = scan(r#""" x"#);
        let x = scanned.iter().find(|sc| sc.ch == 'x').unwrap();
        assert!(x.in_code());
    }

    #[test]
    fn lines_count_inside_comments() {
        let scanned = scan("/*\n\n*/x");
        let x = scanned.iter().find(|sc| sc.ch == 'x').unwrap();
        assert_eq!(x.line, 3);
    }
}
