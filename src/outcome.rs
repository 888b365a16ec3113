use std::process::ExitCode;

/// What the calling tool should do with the action that triggered the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Proceed; also used when the hook does not apply
    Allow,
    /// Stop the action; stderr carries the explanation
    Block,
}

/// The hook event on stdin could not be parsed
pub const EXIT_MALFORMED_INPUT: u8 = 1;
const EXIT_BLOCK: u8 = 2;

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Allow => 0,
            Outcome::Block => EXIT_BLOCK,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}
