//! Post-edit code review: lexical checks on the TypeScript file that was just
//! edited or written.
//!
//! Tooling problems (unreadable file, git unavailable) never block the edit.
//! Only a critical issue does.

use crate::checks::{self, Issue, SourceFile};
use crate::diagnostics::Diagnostics;
use crate::git;
use crate::input::HookEvent;
use crate::outcome::Outcome;
use crate::runner::CommandRunner;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

const REVIEWED_TOOLS: &[&str] = &["Edit", "Write"];
const RULE: &str = "============================================================";

/// Run the review hook for one event, writing any report to `out`
pub fn run(event: &HookEvent, runner: &dyn CommandRunner, out: &mut dyn Write) -> Outcome {
    let mut diag = Diagnostics::new(out);

    if !REVIEWED_TOOLS.contains(&event.tool_name()) {
        tracing::debug!(tool = event.tool_name(), "not an edit, skipping review");
        return Outcome::Allow;
    }

    let file_path = event.file_path();
    if !checks::is_reviewable(file_path) {
        tracing::debug!(file_path, "not a reviewable source file");
        return Outcome::Allow;
    }

    let content = match read_source(file_path) {
        Ok(c) => c,
        Err(e) => {
            diag.line(format_args!("Warning: Could not read file for review: {:#}", e));
            return Outcome::Allow;
        }
    };

    let file = SourceFile {
        path: file_path,
        content: &content,
        staged_diff: git::staged_diff(runner, file_path, &event.working_dir()),
    };
    tracing::debug!(
        file_path,
        diff_lines = file.staged_diff.lines().count(),
        "reviewing"
    );

    let issues = checks::review(&file);
    if issues.is_empty() {
        return Outcome::Allow;
    }

    write_report(&mut diag, file_path, &issues);

    if issues.iter().any(Issue::is_critical) {
        tracing::info!(file_path, issues = issues.len(), "critical issue, blocking");
        Outcome::Block
    } else {
        Outcome::Allow
    }
}

fn read_source(file_path: &str) -> Result<String> {
    std::fs::read_to_string(file_path).with_context(|| format!("Failed to read {}", file_path))
}

fn write_report(diag: &mut Diagnostics, file_path: &str, issues: &[Issue]) {
    let name = Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string());

    diag.blank();
    diag.line(RULE);
    diag.line(format_args!("📝 Code Review: {}", name));
    diag.line(RULE);
    for issue in issues {
        diag.line(issue);
    }
    diag.line(RULE);
    diag.blank();
}
