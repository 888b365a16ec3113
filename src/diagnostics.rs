use std::fmt::Display;
use std::io::Write;

/// Best-effort line writer for a hook's report.
/// A failed write is logged once and never changes the hook's verdict.
pub struct Diagnostics<'a> {
    out: &'a mut dyn Write,
    broken: bool,
}

impl<'a> Diagnostics<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out, broken: false }
    }

    pub fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            if !self.broken {
                tracing::warn!(error = %e, "failed to write hook report");
            }
            self.broken = true;
        }
    }

    pub fn blank(&mut self) {
        self.line("");
    }
}


#[cfg(test)]
mod tests {
    use super::broken::BrokenPipe;
    use super::*;

    #[test]
    fn test_lines_written() {
        let mut buf = Vec::new();
        let mut diag = Diagnostics::new(&mut buf);
        diag.line("first");
        diag.blank();
        diag.line(format_args!("{} {}", "second", 2));
        assert_eq!(String::from_utf8(buf).unwrap(), "first\n\nsecond 2\n");
    }

    #[test]
    fn test_write_failures_are_absorbed() {
        let mut pipe = BrokenPipe::default();
        let mut diag = Diagnostics::new(&mut pipe);
        diag.line("one");
        diag.line("two");
        assert!(diag.broken);
        drop(diag);
        assert_eq!(pipe.attempts, 2);
    }
}
