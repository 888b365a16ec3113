use crate::checks::common::{Issue, SourceFile};

const BREAKPOINT: &str = "debugger;";

/// Block any `debugger;` statement, wherever it appears in the text
pub fn check(file: &SourceFile) -> Option<Issue> {
    file.content
        .contains(BREAKPOINT)
        .then(|| Issue::critical("Contains debugger statement - must be removed"))
}
