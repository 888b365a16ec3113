use glob::Pattern;
use std::fmt;

/// TypeScript sources the review applies to
pub const SOURCE_PATTERNS: &[&str] = &["*.ts"];
/// Declaration files are never reviewed
pub const DECLARATION_PATTERNS: &[&str] = &["*.d.ts"];
/// Test files get a pass on logging and loose typing
pub const TEST_PATTERNS: &[&str] = &["*.test.ts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported, does not block
    Warning,
    /// Blocks the edit
    Critical,
}

/// A single review finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self.severity {
            Severity::Warning => "⚠️  ",
            Severity::Critical => "❌ ",
        };
        write!(f, "{}{}", glyph, self.message)
    }
}

/// The file under review, as handed to every check
#[derive(Debug)]
pub struct SourceFile<'a> {
    pub path: &'a str,
    pub content: &'a str,
    /// Staged changes for the path; empty when git had nothing or failed
    pub staged_diff: String,
}

impl SourceFile<'_> {
    pub fn is_test_file(&self) -> bool {
        matches_any(self.path, TEST_PATTERNS)
    }
}

/// Check if a path matches any of the glob patterns.
/// `*` crosses directory separators, so `*.ts` behaves as a suffix match.
pub fn matches_any(path: &str, patterns: &[&str]) -> bool {
    patterns
        .iter()
        .any(|p| Pattern::new(p).is_ok_and(|pattern| pattern.matches(path)))
}

/// Whether a path is a reviewable source file (not a declaration file)
pub fn is_reviewable(path: &str) -> bool {
    matches_any(path, SOURCE_PATTERNS) && !matches_any(path, DECLARATION_PATTERNS)
}
