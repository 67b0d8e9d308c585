//! Serialized analysis snapshots.
//!
//! A snapshot bundles the summary metrics and issue list exported by the
//! analysis retrieval step, so the comments for one pull request can be
//! rendered in a single pass.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AnalysisIssueSummaryBuilder, AnalysisSummaryBuilder, IssueCommentConfig};
use crate::markup::FormatterFactory;

/// Summary and issues of one pull request analysis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSnapshot {
    pub summary: Option<AnalysisSummaryBuilder>,
    pub issues: Vec<IssueSnapshot>,
}

/// Issue fields plus the rule id resolved for it, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueSnapshot {
    #[serde(flatten)]
    pub issue: AnalysisIssueSummaryBuilder,
    #[serde(default)]
    pub rule: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    Summary,
    Issue,
}

/// One comment body ready to post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedComment {
    pub kind: CommentKind,
    /// Issue key, or the unique comment key when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub body: String,
}

impl ReportSnapshot {
    /// Renders every comment of the snapshot.
    ///
    /// The summary comment comes first when present, followed by one comment
    /// per issue in snapshot order. Issues carrying a rule id get the
    /// suppression hint.
    ///
    /// # Arguments
    ///
    /// * `formatter_factory`: Dialect to render with
    /// * `config`: Issue comment settings
    ///
    /// # Returns
    ///
    /// Rendered comments ready to post
    pub fn render(
        &self,
        formatter_factory: &dyn FormatterFactory,
        config: &IssueCommentConfig,
    ) -> Vec<RenderedComment> {
        let mut comments = Vec::with_capacity(self.issues.len() + 1);

        if let Some(summary) = &self.summary {
            comments.push(RenderedComment {
                kind: CommentKind::Summary,
                key: None,
                body: summary.clone().build().format(formatter_factory),
            });
        }

        for snapshot in &self.issues {
            let issue = snapshot.issue.clone().build();
            let key = issue
                .uniq_key()
                .or_else(|| issue.issue_key())
                .map(String::from);

            let body = match &snapshot.rule {
                Some(rule) => issue.with_rule(rule.as_str()).format_with(formatter_factory, config),
                None => issue.format_with(formatter_factory, config),
            };

            comments.push(RenderedComment {
                kind: CommentKind::Issue,
                key,
                body,
            });
        }

        info!(
            comments = comments.len(),
            issues = self.issues.len(),
            "rendered snapshot"
        );
        comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{HtmlFormatterFactory, MarkdownFormatterFactory};

    const SNAPSHOT: &str = r#"{
        "summary": {
            "total_issue_count": 2,
            "bug_count": 1,
            "code_smell_count": 1,
            "dashboard_url": "https://sq/dashboard?id=p&pullRequest=7"
        },
        "issues": [
            {
                "issue_key": "AX-1",
                "type": "BUG",
                "severity": "MAJOR",
                "message": "Possible null dereference",
                "issue_url": "https://sq/issue/AX-1",
                "rule": "S2259"
            },
            {
                "issue_key": "AX-2",
                "uniq_key": "file.cs:12",
                "type": "CODE_SMELL",
                "severity": "MINOR",
                "message": "Rename this field"
            }
        ]
    }"#;

    #[test]
    fn test_render_orders_summary_then_issues() {
        // Arrange
        let snapshot: ReportSnapshot = serde_json::from_str(SNAPSHOT).expect("Should parse");

        // Act
        let comments = snapshot.render(&MarkdownFormatterFactory, &IssueCommentConfig::default());

        // Assert
        assert_eq!(comments.len(), 3);
        assert_eq!(comments[0].kind, CommentKind::Summary);
        assert!(
            comments[0]
                .body
                .starts_with("Analysis Details: [2 Issues](https://sq/dashboard?id=p&pullRequest=7)")
        );
        assert_eq!(comments[1].kind, CommentKind::Issue);
        assert_eq!(comments[1].key.as_deref(), Some("AX-1"));
        assert!(comments[1].body.starts_with("🪳 🟡 Possible null dereference"));
        assert!(comments[1].body.contains("#pragma warning disable S2259"));
        assert_eq!(comments[2].key.as_deref(), Some("file.cs:12"));
        assert!(!comments[2].body.contains("#pragma"));
    }

    #[test]
    fn test_render_without_summary() {
        // Arrange
        let snapshot: ReportSnapshot =
            serde_json::from_str(r#"{"issues": [{"message": "m"}]}"#).expect("Should parse");

        // Act
        let comments = snapshot.render(&HtmlFormatterFactory, &IssueCommentConfig::default());

        // Assert
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].key, None);
        assert!(comments[0].body.starts_with("<p>  m</p>"));
    }

    #[test]
    fn test_empty_snapshot_renders_nothing() {
        let snapshot: ReportSnapshot = serde_json::from_str("{}").expect("Should parse");

        let comments = snapshot.render(&MarkdownFormatterFactory, &IssueCommentConfig::default());

        assert!(comments.is_empty());
    }

    #[test]
    fn test_rendered_comment_serializes_kind() {
        // Arrange
        let comment = RenderedComment {
            kind: CommentKind::Summary,
            key: None,
            body: "text".to_string(),
        };

        // Act
        let json = serde_json::to_string(&comment).expect("Should serialize");

        // Assert
        assert_eq!(json, r#"{"kind":"summary","body":"text"}"#);
    }
}
