use std::path::Path;
use std::time::{Duration, Instant};

/// Captured result of one external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A failed run with an explanatory message standing in for stderr
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}

/// Runs a shell command line in a directory, bounded by a timeout.
/// Launch failures and timeouts come back as unsuccessful output, never as errors.
pub trait CommandRunner {
    fn run(&self, command: &str, cwd: &Path, timeout: Duration) -> CommandOutput;
}

/// Runs commands through `sh -c`
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    #[tracing::instrument(skip(self, cwd, timeout), fields(cwd = %cwd.display(), timeout_secs = timeout.as_secs()))]
    fn run(&self, command: &str, cwd: &Path, timeout: Duration) -> CommandOutput {
        let started = Instant::now();

        let handle = match duct::cmd("sh", ["-c", command])
            .before_spawn(own_process_group)
            .dir(cwd)
            .stdin_null()
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .start()
        {
            Ok(h) => h,
            Err(e) => {
                tracing::debug!(error = %e, "command failed to start");
                return CommandOutput::failed(format!("Command failed: {}", e));
            }
        };

        match handle.wait_timeout(timeout) {
            Ok(Some(output)) => {
                tracing::debug!(
                    status = ?output.status.code(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "command finished"
                );
                CommandOutput {
                    success: output.status.success(),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                }
            }
            Ok(None) => {
                tracing::debug!("command timed out, killing");
                for pid in handle.pids() {
                    kill_process_group(pid);
                }
                let _ = handle.kill();
                CommandOutput::failed(format!("Command timed out: {}", command))
            }
            Err(e) => CommandOutput::failed(format!("Command failed: {}", e)),
        }
    }
}

/// Put `sh` at the head of a new process group so a timeout can take down
/// everything it started (e.g. the `tsc` under `bun run typecheck`).
#[cfg(unix)]
fn own_process_group(command: &mut std::process::Command) -> std::io::Result<()> {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
    Ok(())
}

#[cfg(not(unix))]
fn own_process_group(_command: &mut std::process::Command) -> std::io::Result<()> {
    Ok(())
}

/// SIGKILL every process in the group led by `pgid`
fn kill_process_group(pgid: u32) {
    let target = format!("-{}", pgid);
    if let Err(e) = duct::cmd("kill", ["-KILL", "--", target.as_str()])
        .stdout_null()
        .stderr_null()
        .unchecked()
        .run()
    {
        tracing::debug!(pgid, error = %e, "failed to kill process group");
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Scripted runner: returns canned output per command and records every call
    #[derive(Default)]
    pub struct FakeRunner {
        outputs: HashMap<String, CommandOutput>,
        pub calls: RefCell<Vec<(String, PathBuf, Duration)>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, command: &str, output: CommandOutput) -> Self {
            self.outputs.insert(command.to_string(), output);
            self
        }

        pub fn commands(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(c, _, _)| c.clone()).collect()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, command: &str, cwd: &Path, timeout: Duration) -> CommandOutput {
            self.calls
                .borrow_mut()
                .push((command.to_string(), cwd.to_path_buf(), timeout));
            self.outputs.get(command).cloned().unwrap_or(CommandOutput {
                success: true,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }
}
