//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use crate::markup::Dialect;
use crate::report::{DEFAULT_FALSE_POSITIVE_URL, IssueCommentConfig, ReportSnapshot};

/// Reads snapshots from standard input when given as the input path.
const STDIN_PATH: &str = "-";

/// Command line configuration for prdeco.
#[derive(Debug, Clone, Parser)]
#[command(name = "prdeco", version, about, long_about = None)]
pub struct Config {
    /// Analysis snapshot (JSON), or "-" for standard input
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Markup dialect of the rendered comments
    #[arg(short, long, value_enum, default_value_t = Dialect::Markdown)]
    pub dialect: Dialect,

    /// Target of the "Report false positive" link
    #[arg(long, env = "PRDECO_FALSE_POSITIVE_URL", default_value = DEFAULT_FALSE_POSITIVE_URL)]
    pub false_positive_url: String,

    /// Append duration and resolution paragraphs to issue comments
    #[arg(long)]
    pub details: bool,

    /// Also print an HTML preview of each Markdown comment
    #[arg(long)]
    pub preview: bool,

    /// Print comments as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist, the false positive
    /// URL is blank, or a preview is requested for a non Markdown dialect.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Snapshot file does not exist: {}", self.input.display());
        }

        if self.false_positive_url.trim().is_empty() {
            bail!("False positive URL must not be empty");
        }

        if self.preview && self.dialect != Dialect::Markdown {
            bail!("Preview is only available for the markdown dialect");
        }

        Ok(())
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }

    /// Returns issue comment settings derived from the flags.
    pub fn issue_config(&self) -> IssueCommentConfig {
        IssueCommentConfig {
            false_positive_url: self.false_positive_url.clone(),
            include_details: self.details,
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Loads the snapshot named by the input path.
    ///
    /// # Errors
    ///
    /// Returns error if the input cannot be read or is not a valid snapshot.
    pub fn load_snapshot(&self) -> Result<ReportSnapshot> {
        let content = if self.reads_stdin() {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read snapshot from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("Failed to read snapshot: {}", self.input.display()))?
        };

        serde_json::from_str(&content).context("Failed to parse snapshot")
    }
}
