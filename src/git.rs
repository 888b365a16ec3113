use crate::runner::CommandRunner;
use std::path::Path;
use std::time::Duration;

/// Upper bound on the staged-diff query
pub const DIFF_TIMEOUT: Duration = Duration::from_secs(10);

/// Staged changes for one path. Any failure reads as an empty diff.
pub fn staged_diff(runner: &dyn CommandRunner, file_path: &str, cwd: &Path) -> String {
    let command = shell_words::join(["git", "diff", "--cached", file_path]);
    let output = runner.run(&command, cwd, DIFF_TIMEOUT);

    if output.success {
        output.stdout
    } else {
        tracing::debug!(stderr = %output.stderr.trim(), "staged diff unavailable");
        String::new()
    }
}
