pub mod any_type;
pub mod common;
pub mod console;
pub mod debugger;
pub mod todo;

pub use common::{is_reviewable, Issue, Severity, SourceFile};

/// A lexical check: at most one issue per file
pub type Check = fn(&SourceFile) -> Option<Issue>;

/// Checks in reporting order
pub const CHECKS: &[(&str, Check)] = &[
    ("console", console::check),
    ("any_type", any_type::check),
    ("todo", todo::check),
    ("debugger", debugger::check),
];

/// Run every check against the file, collecting issues in order
pub fn review(file: &SourceFile) -> Vec<Issue> {
    CHECKS
        .iter()
        .filter_map(|(name, check)| {
            let issue = check(file);
            match &issue {
                Some(issue) => tracing::debug!(check = *name, issue = %issue, "check flagged"),
                None => tracing::debug!(check = *name, "check pass"),
            }
            issue
        })
        .collect()
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
    fn test_clean_file_has_no_issues() {
        let content = "export function add(a: number, b: number): number {\n  return a + b;\n}\n";
        assert!(review(&source("src/math.ts", content)).is_empty());
    }

    #[test]
    fn test_issues_in_check_order() {
        let content = "debugger;\n// TODO: fix\nconsole.log(x);\n";
        let issues = review(&source("src/app.ts", content));
        assert_eq!(issues.len(), 3);
        assert!(issues[0].message.contains("console.log"));
        assert!(issues[1].message.contains("TODO/FIXME"));
        assert!(issues[2].is_critical());
    }

    #[test]
    fn test_test_file_skips_logging_and_any() {
        let content = "console.log(a);\nlet a: any; let b: any; let c: any;\n";
        assert!(review(&source("src/app.test.ts", content)).is_empty());
        assert_eq!(review(&source("src/app.ts", content)).len(), 2);
    }
}
