use crate::checks::common::{Issue, SourceFile};
use regex::Regex;
use std::sync::LazyLock;

/// A couple of escape hatches are tolerated
const MAX_ANY_ANNOTATIONS: usize = 2;

#[allow(clippy::expect_used)]
static ANY_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*any\b").expect("valid regex"));

/// Flag heavy use of `: any` annotations outside of test files
pub fn check(file: &SourceFile) -> Option<Issue> {
    if file.is_test_file() {
        return None;
    }

    let count = ANY_ANNOTATION.find_iter(file.content).count();
    if count <= MAX_ANY_ANNOTATIONS {
        return None;
    }

    Some(Issue::warning(format!(
        "Found {} uses of 'any' type - consider using specific types",
        count
    )))
}
