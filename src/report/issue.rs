//! Inline comment for a single issue.

use serde::Deserialize;
use tracing::debug;

use super::SPACER;
use crate::markup::{Block, Document, FormatterFactory, Heading, Link, Paragraph, Text};

/// Target of the "Report false positive" link unless configured otherwise.
pub const DEFAULT_FALSE_POSITIVE_URL: &str = "https://link.orangelogic.com/Tasks/262A92";

const IGNORE_INSTRUCTIONS: &str = "to ignore comment: surround bad code line with:";

/// Kind of issue reported by the analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    CodeSmell,
    Bug,
    Vulnerability,
    SecurityHotspot,
    /// Any type the analyzer reports that has no glyph.
    #[default]
    #[serde(other)]
    Unknown,
}

impl IssueType {
    pub fn glyph(self) -> &'static str {
        match self {
            IssueType::CodeSmell => "🦨",
            IssueType::Bug => "🪳",
            IssueType::Vulnerability => "🔓",
            IssueType::SecurityHotspot => "🔥",
            IssueType::Unknown => "",
        }
    }
}

impl From<&str> for IssueType {
    fn from(value: &str) -> Self {
        match value {
            "CODE_SMELL" => IssueType::CodeSmell,
            "BUG" => IssueType::Bug,
            "VULNERABILITY" => IssueType::Vulnerability,
            "SECURITY_HOTSPOT" => IssueType::SecurityHotspot,
            _ => IssueType::Unknown,
        }
    }
}

/// Issue severity as reported by the analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "⚠",
            Severity::Minor => "⚠️",
            Severity::Major => "🟡",
            Severity::Critical => "🔴",
            Severity::Blocker => "⛔",
            Severity::Unknown => "",
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "INFO" => Severity::Info,
            "MINOR" => Severity::Minor,
            "MAJOR" => Severity::Major,
            "CRITICAL" => Severity::Critical,
            "BLOCKER" => Severity::Blocker,
            _ => Severity::Unknown,
        }
    }
}

/// Settings for issue comments that depend on the deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCommentConfig {
    /// Where the "Report false positive" link points.
    pub false_positive_url: String,
    /// Append duration and resolution paragraphs.
    pub include_details: bool,
}

impl Default for IssueCommentConfig {
    fn default() -> Self {
        Self {
            false_positive_url: DEFAULT_FALSE_POSITIVE_URL.to_string(),
            include_details: false,
        }
    }
}

/// Snapshot of one issue, without rule information.
///
/// Rule ids come from a separate lookup. Attach one with
/// [`AnalysisIssueSummary::with_rule`], which yields a
/// [`ResolvedIssueSummary`]; formatting without a rule leaves the
/// suppression hint empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisIssueSummary {
    type_image_url: Option<String>,
    severity_image_url: Option<String>,
    issue_url: Option<String>,
    issue_key: Option<String>,
    project_key: Option<String>,
    uniq_key: Option<String>,
    effort_in_minutes: Option<u64>,
    issue_type: IssueType,
    message: Option<String>,
    severity: Severity,
    resolution: Option<String>,
}

impl AnalysisIssueSummary {
    pub fn builder() -> AnalysisIssueSummaryBuilder {
        AnalysisIssueSummaryBuilder::default()
    }

    pub fn type_image_url(&self) -> Option<&str> {
        self.type_image_url.as_deref()
    }

    pub fn severity_image_url(&self) -> Option<&str> {
        self.severity_image_url.as_deref()
    }

    pub fn issue_url(&self) -> Option<&str> {
        self.issue_url.as_deref()
    }

    pub fn issue_key(&self) -> Option<&str> {
        self.issue_key.as_deref()
    }

    pub fn project_key(&self) -> Option<&str> {
        self.project_key.as_deref()
    }

    /// Key callers use to recognise a comment they already posted.
    pub fn uniq_key(&self) -> Option<&str> {
        self.uniq_key.as_deref()
    }

    pub fn effort_in_minutes(&self) -> Option<u64> {
        self.effort_in_minutes
    }

    pub fn issue_type(&self) -> IssueType {
        self.issue_type
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }

    /// Attaches the rule id resolved for this issue.
    pub fn with_rule(self, rule: impl Into<String>) -> ResolvedIssueSummary {
        ResolvedIssueSummary {
            summary: self,
            rule: rule.into(),
        }
    }

    /// Builds the comment document with the default configuration.
    pub fn document(&self) -> Document {
        self.document_with(&IssueCommentConfig::default())
    }

    pub fn document_with(&self, config: &IssueCommentConfig) -> Document {
        issue_document(self, None, config)
    }

    /// Renders the comment with the default configuration.
    pub fn format(&self, formatter_factory: &dyn FormatterFactory) -> String {
        self.format_with(formatter_factory, &IssueCommentConfig::default())
    }

    pub fn format_with(
        &self,
        formatter_factory: &dyn FormatterFactory,
        config: &IssueCommentConfig,
    ) -> String {
        formatter_factory
            .document_formatter()
            .format(&self.document_with(config))
    }
}

/// Issue snapshot with its rule id attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIssueSummary {
    summary: AnalysisIssueSummary,
    rule: String,
}

impl ResolvedIssueSummary {
    pub fn summary(&self) -> &AnalysisIssueSummary {
        &self.summary
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn document(&self) -> Document {
        self.document_with(&IssueCommentConfig::default())
    }

    pub fn document_with(&self, config: &IssueCommentConfig) -> Document {
        issue_document(&self.summary, Some(&self.rule), config)
    }

    pub fn format(&self, formatter_factory: &dyn FormatterFactory) -> String {
        self.format_with(formatter_factory, &IssueCommentConfig::default())
    }

    pub fn format_with(
        &self,
        formatter_factory: &dyn FormatterFactory,
        config: &IssueCommentConfig,
    ) -> String {
        formatter_factory
            .document_formatter()
            .format(&self.document_with(config))
    }
}

/// Lays out an issue comment.
///
/// The suppression heading and snippet are always present as nodes; without
/// a rule they hold empty text so comment layout stays stable.
fn issue_document(
    summary: &AnalysisIssueSummary,
    rule: Option<&str>,
    config: &IssueCommentConfig,
) -> Document {
    debug!(
        issue = summary.issue_key().unwrap_or_default(),
        rule = rule.unwrap_or_default(),
        "building issue comment"
    );

    let headline = format!(
        "{} {} {}",
        summary.issue_type.glyph(),
        summary.severity.glyph(),
        summary.message().unwrap_or_default()
    );

    let mut blocks: Vec<Block> = vec![
        Paragraph::new([Text::new(headline).into()]).into(),
        Paragraph::new([
            Link::new(
                summary.issue_url().unwrap_or_default(),
                [Text::new("View in SonarQube").into()],
            )
            .into(),
            Text::new(SPACER).into(),
            Link::new(
                config.false_positive_url.as_str(),
                [Text::new("Report false positive").into()],
            )
            .into(),
        ])
        .into(),
        Heading::new(
            6,
            [rule.map_or_else(Text::empty, |_| Text::new(IGNORE_INSTRUCTIONS)).into()],
        )
        .into(),
        Paragraph::new([rule.map_or_else(Text::empty, suppression_snippet).into()]).into(),
    ];

    if config.include_details {
        let duration = summary
            .effort_in_minutes
            .map_or_else(Text::empty, |effort| {
                Text::new(format!("**Duration (min):** {effort}"))
            });
        let resolution = summary
            .resolution()
            .filter(|resolution| !resolution.trim().is_empty())
            .map_or_else(Text::empty, |resolution| {
                Text::new(format!("**Resolution:** {resolution}"))
            });

        blocks.push(Paragraph::new([duration.into()]).into());
        blocks.push(Paragraph::new([resolution.into()]).into());
    }

    Document::new(blocks)
}

fn suppression_snippet(rule: &str) -> Text {
    Text::new(format!(
        "```\n#pragma warning disable {rule}\nLINE WITH BAD CODE HERE \n#pragma warning restore {rule}\n```"
    ))
}

/// Collects issue fields before freezing them into an [`AnalysisIssueSummary`].
///
/// Setters assign one field each without validation. The `type` and
/// `severity` keys of a serialized snapshot accept the analyzer's upper
/// case names; unrecognised values map to `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisIssueSummaryBuilder {
    type_image_url: Option<String>,
    severity_image_url: Option<String>,
    issue_url: Option<String>,
    issue_key: Option<String>,
    project_key: Option<String>,
    uniq_key: Option<String>,
    effort_in_minutes: Option<u64>,
    #[serde(rename = "type")]
    issue_type: IssueType,
    message: Option<String>,
    severity: Severity,
    resolution: Option<String>,
}

impl AnalysisIssueSummaryBuilder {
    pub fn with_type_image_url(mut self, url: impl Into<String>) -> Self {
        self.type_image_url = Some(url.into());
        self
    }

    pub fn with_severity_image_url(mut self, url: impl Into<String>) -> Self {
        self.severity_image_url = Some(url.into());
        self
    }

    pub fn with_issue_url(mut self, url: impl Into<String>) -> Self {
        self.issue_url = Some(url.into());
        self
    }

    pub fn with_issue_key(mut self, key: impl Into<String>) -> Self {
        self.issue_key = Some(key.into());
        self
    }

    pub fn with_project_key(mut self, key: impl Into<String>) -> Self {
        self.project_key = Some(key.into());
        self
    }

    pub fn with_uniq_key(mut self, key: impl Into<String>) -> Self {
        self.uniq_key = Some(key.into());
        self
    }

    pub fn with_effort_in_minutes(mut self, effort: Option<u64>) -> Self {
        self.effort_in_minutes = effort;
        self
    }

    pub fn with_type(mut self, issue_type: impl Into<IssueType>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<Severity>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn build(self) -> AnalysisIssueSummary {
        AnalysisIssueSummary {
            type_image_url: self.type_image_url,
            severity_image_url: self.severity_image_url,
            issue_url: self.issue_url,
            issue_key: self.issue_key,
            project_key: self.project_key,
            uniq_key: self.uniq_key,
            effort_in_minutes: self.effort_in_minutes,
            issue_type: self.issue_type,
            message: self.message,
            severity: self.severity,
            resolution: self.resolution,
        }
    }
}
