use crate::checks::common::{Issue, SourceFile};
use regex::Regex;
use std::sync::LazyLock;

// console.warn and console.error are fine
#[allow(clippy::expect_used)]
static DEBUG_LOGGING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bconsole\.(log|debug)\b").expect("valid regex"));

/// Flag console.log/console.debug calls outside of test files
pub fn check(file: &SourceFile) -> Option<Issue> {
    if file.is_test_file() || !DEBUG_LOGGING.is_match(file.content) {
        return None;
    }
    Some(Issue::warning(
        "Contains console.log/debug - consider using proper logging",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source<'a>(path: &'a str, content: &'a str) -> SourceFile<'a> {
        SourceFile {
            path,
            content,
            staged_diff: String::new(),
        }
    }

    #[test]
    fn test_console_log_flagged() {
        let issue = check(&source("src/app.ts", "console.log('hi');")).unwrap();
        assert!(!issue.is_critical());
        assert!(issue.message.contains("console.log/debug"));
    }

    #[test]
    fn test_console_debug_flagged() {
        assert!(check(&source("src/app.ts", "  console.debug(state)")).is_some());
    }

    #[test]
    fn test_warn_and_error_allowed() {
        let content = "console.warn('careful');\nconsole.error(err);\n";
        assert!(check(&source("src/app.ts", content)).is_none());
    }

    #[test]
    fn test_similar_identifiers_ignored() {
        assert!(check(&source("src/app.ts", "myconsole.log(x); console.logger(x);")).is_none());
    }

    #[test]
    fn test_test_files_exempt() {
        assert!(check(&source("src/app.test.ts", "console.log('hi');")).is_none());
    }
}
