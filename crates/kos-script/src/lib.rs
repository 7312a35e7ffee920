pub mod extract;
pub mod keywords;
pub mod scanner;
pub mod syntax;

pub use extract::{ExtractedIdentifier, IdentifierSet, extract};
pub use keywords::{BUILTIN_LOCKABLES, KEYWORDS, is_builtin_lockable, is_keyword};
pub use scanner::{ScanMode, ScannedChar, scan};
pub use syntax::{SyntaxCheckResult, SyntaxIssue, SyntaxIssueKind, check};
