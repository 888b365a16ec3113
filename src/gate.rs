//! Pre-commit gate: `git commit` only goes through once type check, build,
//! lint and tests all pass.

use crate::diagnostics::Diagnostics;
use crate::input::HookEvent;
use crate::outcome::Outcome;
use crate::runner::{CommandOutput, CommandRunner};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

const COMMIT_INVOCATION: &str = "git commit";
const AMEND_FLAG: &str = "--amend";
const RULE: &str = "============================================================";

/// Upper bound on each validation command
pub const VALIDATION_TIMEOUT: Duration = Duration::from_secs(120);

/// One step of the validation battery
#[derive(Debug)]
pub struct Validation {
    /// Display name, e.g. "Type check"
    pub name: &'static str,
    pub command: &'static str,
    /// Shown while the step runs: "Running {activity}..."
    pub activity: &'static str,
}

/// Validation steps, in execution order
pub const VALIDATIONS: &[Validation] = &[
    Validation {
        name: "Type check",
        command: "bun run typecheck",
        activity: "type check",
    },
    Validation {
        name: "Build",
        command: "bun run build",
        activity: "build",
    },
    Validation {
        name: "Lint",
        command: "bun run lint",
        activity: "lint",
    },
    Validation {
        name: "Tests",
        command: "bun test",
        activity: "tests",
    },
];

#[derive(Debug)]
pub struct ValidationResult {
    pub validation: &'static Validation,
    pub passed: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Is this Bash invocation a commit we should gate?
pub fn is_commit(event: &HookEvent) -> bool {
    event.tool_name() == "Bash" && event.command().contains(COMMIT_INVOCATION)
}

/// Run the commit gate for one event, writing progress and verdict to `out`
pub fn run(event: &HookEvent, runner: &dyn CommandRunner, out: &mut dyn Write) -> Outcome {
    let mut diag = Diagnostics::new(out);

    if !is_commit(event) {
        tracing::debug!(tool = event.tool_name(), "not a git commit, allowing");
        return Outcome::Allow;
    }

    if event.command().contains(AMEND_FLAG) {
        diag.line("⏭️  Skipping validation for --amend commit");
        return Outcome::Allow;
    }

    diag.line(RULE);
    diag.line("🔍 Running pre-commit validation...");
    diag.line(RULE);

    let results = validate(runner, &event.working_dir(), &mut diag);
    let failures: Vec<&ValidationResult> = results.iter().filter(|r| !r.passed).collect();

    diag.blank();
    diag.line(RULE);

    if failures.is_empty() {
        diag.line("✅ All pre-commit checks passed!");
        diag.line(RULE);
        return Outcome::Allow;
    }

    tracing::info!(failed = failures.len(), "validation failed, blocking commit");
    diag.line("❌ Pre-commit validation FAILED");
    diag.line(RULE);
    for failure in failures {
        diag.line(format_args!(
            "❌ {} failed ({}):\n{}",
            failure.validation.name, failure.validation.command, failure.stderr
        ));
    }
    diag.blank();
    diag.line("Please fix the errors above before committing.");
    diag.line("Tip: Run the failed command(s) manually to see full output.");

    Outcome::Block
}

/// Run every validation in order. A failure never stops the later steps.
pub fn validate(
    runner: &dyn CommandRunner,
    cwd: &Path,
    diag: &mut Diagnostics,
) -> Vec<ValidationResult> {
    let mut results = Vec::with_capacity(VALIDATIONS.len());

    for validation in VALIDATIONS {
        diag.line(format_args!("Running {}...", validation.activity));
        let CommandOutput {
            success,
            stdout,
            stderr,
        } = runner.run(validation.command, cwd, VALIDATION_TIMEOUT);

        if success {
            diag.line(format_args!("✓ {} passed", validation.name));
        }
        tracing::debug!(check = validation.name, passed = success, "validation finished");

        results.push(ValidationResult {
            validation,
            passed: success,
            stdout,
            stderr,
        });
    }

    results
}
