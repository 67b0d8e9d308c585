//! Pull request decoration for code analysis results.

pub mod action;
mod config;
pub mod markup;
mod preview;
pub mod report;

pub use config::Config;
pub use markup::{Dialect, Document, Formatter, FormatterFactory};
pub use preview::MarkdownPreview;
pub use report::{
    AnalysisIssueSummary, AnalysisSummary, IssueCommentConfig, ReportSnapshot,
    ResolvedIssueSummary, plural_of,
};
