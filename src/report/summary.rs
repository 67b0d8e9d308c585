//! Aggregate analysis summary comment.

use serde::Deserialize;
use tracing::debug;

use super::{SPACER, plural_of};
use crate::markup::{Document, FormatterFactory, Heading, Link, Paragraph, Text};

const SYNC_DISCLAIMER: &str = "*sonarqube may show more due to slow master sync";

/// Aggregate metrics of one analysis.
///
/// Built once per report through [`AnalysisSummaryBuilder`] and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSummary {
    summary_image_url: Option<String>,
    project_key: Option<String>,

    status_description: Option<String>,
    status_image_url: Option<String>,
    failed_quality_gate_conditions: Vec<String>,
    dashboard_url: Option<String>,

    new_coverage: Option<f64>,
    coverage: Option<f64>,
    coverage_url: Option<String>,
    coverage_image_url: Option<String>,

    new_duplications: Option<f64>,
    duplications: Option<f64>,
    duplications_url: Option<String>,
    duplications_image_url: Option<String>,

    total_issue_count: u64,

    bug_count: u64,
    bug_url: Option<String>,
    bug_image_url: Option<String>,

    security_hotspot_count: u64,
    vulnerability_count: u64,
    vulnerability_url: Option<String>,
    vulnerability_image_url: Option<String>,

    code_smell_count: u64,
    code_smell_url: Option<String>,
    code_smell_image_url: Option<String>,
}

impl AnalysisSummary {
    pub fn builder() -> AnalysisSummaryBuilder {
        AnalysisSummaryBuilder::default()
    }

    pub fn summary_image_url(&self) -> Option<&str> {
        self.summary_image_url.as_deref()
    }

    pub fn project_key(&self) -> Option<&str> {
        self.project_key.as_deref()
    }

    pub fn status_description(&self) -> Option<&str> {
        self.status_description.as_deref()
    }

    pub fn status_image_url(&self) -> Option<&str> {
        self.status_image_url.as_deref()
    }

    pub fn failed_quality_gate_conditions(&self) -> &[String] {
        &self.failed_quality_gate_conditions
    }

    pub fn dashboard_url(&self) -> Option<&str> {
        self.dashboard_url.as_deref()
    }

    pub fn new_coverage(&self) -> Option<f64> {
        self.new_coverage
    }

    pub fn coverage(&self) -> Option<f64> {
        self.coverage
    }

    pub fn coverage_url(&self) -> Option<&str> {
        self.coverage_url.as_deref()
    }

    pub fn coverage_image_url(&self) -> Option<&str> {
        self.coverage_image_url.as_deref()
    }

    pub fn new_duplications(&self) -> Option<f64> {
        self.new_duplications
    }

    pub fn duplications(&self) -> Option<f64> {
        self.duplications
    }

    pub fn duplications_url(&self) -> Option<&str> {
        self.duplications_url.as_deref()
    }

    pub fn duplications_image_url(&self) -> Option<&str> {
        self.duplications_image_url.as_deref()
    }

    pub fn total_issue_count(&self) -> u64 {
        self.total_issue_count
    }

    pub fn bug_count(&self) -> u64 {
        self.bug_count
    }

    pub fn bug_url(&self) -> Option<&str> {
        self.bug_url.as_deref()
    }

    pub fn bug_image_url(&self) -> Option<&str> {
        self.bug_image_url.as_deref()
    }

    pub fn security_hotspot_count(&self) -> u64 {
        self.security_hotspot_count
    }

    pub fn vulnerability_count(&self) -> u64 {
        self.vulnerability_count
    }

    pub fn vulnerability_url(&self) -> Option<&str> {
        self.vulnerability_url.as_deref()
    }

    pub fn vulnerability_image_url(&self) -> Option<&str> {
        self.vulnerability_image_url.as_deref()
    }

    pub fn code_smell_count(&self) -> u64 {
        self.code_smell_count
    }

    pub fn code_smell_url(&self) -> Option<&str> {
        self.code_smell_url.as_deref()
    }

    pub fn code_smell_image_url(&self) -> Option<&str> {
        self.code_smell_image_url.as_deref()
    }

    /// Builds the summary comment document.
    ///
    /// A clean analysis collapses to a single paragraph. Otherwise the issue
    /// total links to the dashboard and is followed by per-category counts,
    /// where a category with no issues contributes an empty text node rather
    /// than a "0" clause. Vulnerabilities and security hotspots are counted
    /// together.
    pub fn document(&self) -> Document {
        if self.total_issue_count == 0 {
            debug!("analysis has no issues, emitting short summary");
            return Document::new([
                Paragraph::new([Text::new("Analysis Details: 0 Issues").into()]).into(),
            ]);
        }

        let vulnerabilities = self
            .vulnerability_count
            .saturating_add(self.security_hotspot_count);

        Document::new([
            Paragraph::new([
                Text::new("Analysis Details: ").into(),
                Link::new(
                    self.dashboard_url.as_deref().unwrap_or_default(),
                    [Text::new(plural_of(self.total_issue_count, "Issue", "Issues")).into()],
                )
                .into(),
                Text::new(SPACER).into(),
                count_clause(self.bug_count, " bug, ", " bugs, ").into(),
                count_clause(vulnerabilities, " vulnerability, ", " vulnerabilities, ").into(),
                count_clause(self.code_smell_count, " code smell", " code smells").into(),
            ])
            .into(),
            Heading::new(6, [Text::new(SYNC_DISCLAIMER).into()]).into(),
        ])
    }

    /// Renders the summary comment with the factory's dialect.
    pub fn format(&self, formatter_factory: &dyn FormatterFactory) -> String {
        formatter_factory.document_formatter().format(&self.document())
    }
}

fn count_clause(count: u64, singular: &str, plural: &str) -> Text {
    if count > 0 {
        Text::new(plural_of(count, singular, plural))
    } else {
        Text::empty()
    }
}

/// Collects summary fields before freezing them into an [`AnalysisSummary`].
///
/// Every setter assigns one field and performs no validation. Fields left
/// unset stay `None` or zero. Deserializing accepts any subset of the
/// fields by their snake case names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSummaryBuilder {
    summary_image_url: Option<String>,
    project_key: Option<String>,
    status_description: Option<String>,
    status_image_url: Option<String>,
    failed_quality_gate_conditions: Vec<String>,
    dashboard_url: Option<String>,
    new_coverage: Option<f64>,
    coverage: Option<f64>,
    coverage_url: Option<String>,
    coverage_image_url: Option<String>,
    new_duplications: Option<f64>,
    duplications: Option<f64>,
    duplications_url: Option<String>,
    duplications_image_url: Option<String>,
    total_issue_count: u64,
    bug_count: u64,
    bug_url: Option<String>,
    bug_image_url: Option<String>,
    security_hotspot_count: u64,
    vulnerability_count: u64,
    vulnerability_url: Option<String>,
    vulnerability_image_url: Option<String>,
    code_smell_count: u64,
    code_smell_url: Option<String>,
    code_smell_image_url: Option<String>,
}

impl AnalysisSummaryBuilder {
    pub fn with_summary_image_url(mut self, url: impl Into<String>) -> Self {
        self.summary_image_url = Some(url.into());
        self
    }

    pub fn with_project_key(mut self, key: impl Into<String>) -> Self {
        self.project_key = Some(key.into());
        self
    }

    pub fn with_status_description(mut self, description: impl Into<String>) -> Self {
        self.status_description = Some(description.into());
        self
    }

    pub fn with_status_image_url(mut self, url: impl Into<String>) -> Self {
        self.status_image_url = Some(url.into());
        self
    }

    pub fn with_failed_quality_gate_conditions(
        mut self,
        conditions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.failed_quality_gate_conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dashboard_url(mut self, url: impl Into<String>) -> Self {
        self.dashboard_url = Some(url.into());
        self
    }

    pub fn with_new_coverage(mut self, coverage: Option<f64>) -> Self {
        self.new_coverage = coverage;
        self
    }

    pub fn with_coverage(mut self, coverage: Option<f64>) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_coverage_url(mut self, url: impl Into<String>) -> Self {
        self.coverage_url = Some(url.into());
        self
    }

    pub fn with_coverage_image_url(mut self, url: impl Into<String>) -> Self {
        self.coverage_image_url = Some(url.into());
        self
    }

    pub fn with_new_duplications(mut self, duplications: Option<f64>) -> Self {
        self.new_duplications = duplications;
        self
    }

    pub fn with_duplications(mut self, duplications: Option<f64>) -> Self {
        self.duplications = duplications;
        self
    }

    pub fn with_duplications_url(mut self, url: impl Into<String>) -> Self {
        self.duplications_url = Some(url.into());
        self
    }

    pub fn with_duplications_image_url(mut self, url: impl Into<String>) -> Self {
        self.duplications_image_url = Some(url.into());
        self
    }

    pub fn with_total_issue_count(mut self, count: u64) -> Self {
        self.total_issue_count = count;
        self
    }

    pub fn with_bug_count(mut self, count: u64) -> Self {
        self.bug_count = count;
        self
    }

    pub fn with_bug_url(mut self, url: impl Into<String>) -> Self {
        self.bug_url = Some(url.into());
        self
    }

    pub fn with_bug_image_url(mut self, url: impl Into<String>) -> Self {
        self.bug_image_url = Some(url.into());
        self
    }

    pub fn with_security_hotspot_count(mut self, count: u64) -> Self {
        self.security_hotspot_count = count;
        self
    }

    pub fn with_vulnerability_count(mut self, count: u64) -> Self {
        self.vulnerability_count = count;
        self
    }

    pub fn with_vulnerability_url(mut self, url: impl Into<String>) -> Self {
        self.vulnerability_url = Some(url.into());
        self
    }

    pub fn with_vulnerability_image_url(mut self, url: impl Into<String>) -> Self {
        self.vulnerability_image_url = Some(url.into());
        self
    }

    pub fn with_code_smell_count(mut self, count: u64) -> Self {
        self.code_smell_count = count;
        self
    }

    pub fn with_code_smell_url(mut self, url: impl Into<String>) -> Self {
        self.code_smell_url = Some(url.into());
        self
    }

    pub fn with_code_smell_image_url(mut self, url: impl Into<String>) -> Self {
        self.code_smell_image_url = Some(url.into());
        self
    }

    pub fn build(self) -> AnalysisSummary {
        AnalysisSummary {
            summary_image_url: self.summary_image_url,
            project_key: self.project_key,
            status_description: self.status_description,
            status_image_url: self.status_image_url,
            failed_quality_gate_conditions: self.failed_quality_gate_conditions,
            dashboard_url: self.dashboard_url,
            new_coverage: self.new_coverage,
            coverage: self.coverage,
            coverage_url: self.coverage_url,
            coverage_image_url: self.coverage_image_url,
            new_duplications: self.new_duplications,
            duplications: self.duplications,
            duplications_url: self.duplications_url,
            duplications_image_url: self.duplications_image_url,
            total_issue_count: self.total_issue_count,
            bug_count: self.bug_count,
            bug_url: self.bug_url,
            bug_image_url: self.bug_image_url,
            security_hotspot_count: self.security_hotspot_count,
            vulnerability_count: self.vulnerability_count,
            vulnerability_url: self.vulnerability_url,
            vulnerability_image_url: self.vulnerability_image_url,
            code_smell_count: self.code_smell_count,
            code_smell_url: self.code_smell_url,
            code_smell_image_url: self.code_smell_image_url,
        }
    }
}
