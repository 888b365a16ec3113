//! Claude Code hooks for a TypeScript project: a post-edit code review and a
//! pre-commit validation gate.
//!
//! Both read one hook event as JSON on stdin and answer through the exit code:
//! 0 allows, 2 blocks (stderr explains why), 1 means the event was malformed.

pub mod checks;
pub mod diagnostics;
pub mod gate;
pub mod git;
pub mod input;
pub mod logging;
pub mod outcome;
pub mod review;
pub mod runner;

pub use input::{read_event, HookEvent};
pub use outcome::Outcome;
pub use runner::{CommandOutput, CommandRunner, ShellRunner};

use std::io::{self, Write};
use std::process::ExitCode;

/// Hook entry point shared by the binaries: parse stdin, run the hook, map
/// the outcome to an exit code.
pub fn main_with(hook: fn(&HookEvent, &dyn CommandRunner, &mut dyn Write) -> Outcome) -> ExitCode {
    logging::init();
    let mut stderr = io::stderr().lock();

    let event = match read_event(io::stdin().lock()) {
        Ok(e) => e,
        Err(e) => {
            let _ = writeln!(stderr, "Error: {:#}", e);
            return ExitCode::from(outcome::EXIT_MALFORMED_INPUT);
        }
    };
    tracing::debug!(tool = event.tool_name(), cwd = event.cwd(), "hook event received");

    hook(&event, &ShellRunner, &mut stderr).into()
}
