use crate::checks::common::{Issue, SourceFile};
use regex::Regex;
use std::sync::LazyLock;

// `.` stops at newlines, so this counts at most one match per line
#[allow(clippy::expect_used)]
static TODO_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*(?:TODO|FIXME).*").expect("valid regex"));

/// Flag unresolved TODO/FIXME line comments
pub fn check(file: &SourceFile) -> Option<Issue> {
    let count = TODO_COMMENT.find_iter(file.content).count();
    if count == 0 {
        return None;
    }

    Some(Issue::warning(format!(
        "Contains {} TODO/FIXME comment(s) - consider addressing before commit",
        count
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(content: &str) -> SourceFile<'_> {
        SourceFile {
            path: "src/app.ts",
            content,
            staged_diff: String::new(),
        }
    }

    #[test]
    fn test_no_todos() {
        assert!(check(&source("// regular comment\nconst x = 1;\n")).is_none());
    }

    #[test]
    fn test_counts_each_line() {
        let content = "// TODO: one\nconst x = 1; // FIXME later\n// TODO and FIXME\n";
        let issue = check(&source(content)).unwrap();
        assert_eq!(
            issue.message,
            "Contains 3 TODO/FIXME comment(s) - consider addressing before commit"
        );
        assert!(!issue.is_critical());
    }

    #[test]
    fn test_requires_line_comment() {
        assert!(check(&source("/* TODO: block comment */\nconst TODO = 1;\n")).is_none());
    }

    #[test]
    fn test_applies_to_test_files() {
        let file = SourceFile {
            path: "src/app.test.ts",
            content: "// TODO: more cases",
            staged_diff: String::new(),
        };
        assert!(check(&file).is_some());
    }
}
