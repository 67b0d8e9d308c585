//! Pull request report comments.
//!
//! Report types hold metrics gathered elsewhere and know how to describe
//! them as a markup [`Document`](crate::markup::Document). They never pick a
//! dialect themselves: rendering goes through the formatter factory handed
//! to `format`.

mod issue;
mod snapshot;
mod summary;

pub use issue::{
    AnalysisIssueSummary, AnalysisIssueSummaryBuilder, DEFAULT_FALSE_POSITIVE_URL,
    IssueCommentConfig, IssueType, ResolvedIssueSummary, Severity,
};
pub use snapshot::{CommentKind, IssueSnapshot, RenderedComment, ReportSnapshot};
pub use summary::{AnalysisSummary, AnalysisSummaryBuilder};

/// Gap between links and trailing text on a comment line.
const SPACER: &str = "      ";

/// Formats a count with its label.
///
/// The singular label is used iff the count is exactly one. The result is
/// `"{count} {label}"`, so labels that start with a space produce a double
/// space after the number.
///
/// # Arguments
///
/// * `count`: Number of items
/// * `singular`: Label for exactly one item
/// * `plural`: Label for any other count, including zero
///
/// # Returns
///
/// Count followed by the chosen label
pub fn plural_of(count: u64, singular: &str, plural: &str) -> String {
    let label = if count == 1 { singular } else { plural };
    format!("{count} {label}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_of_singular_only_for_one() {
        assert_eq!(plural_of(1, "bug", "bugs"), "1 bug");
        assert_eq!(plural_of(0, "bug", "bugs"), "0 bugs");
        assert_eq!(plural_of(2, "bug", "bugs"), "2 bugs");
        assert_eq!(plural_of(911, "bug", "bugs"), "911 bugs");
    }

    #[test]
    fn test_plural_of_keeps_label_spacing() {
        assert_eq!(plural_of(911, " bug, ", " bugs, "), "911  bugs, ");
        assert_eq!(plural_of(1, " code smell", " code smells"), "1  code smell");
    }

    #[test]
    fn test_plural_of_large_counts() {
        for count in [3_u64, 10, 1_000, u64::MAX] {
            assert_eq!(
                plural_of(count, "Issue", "Issues"),
                format!("{count} Issues")
            );
        }
    }
}
