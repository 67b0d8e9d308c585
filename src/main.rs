use anyhow::{Context, Result};
use prdeco::report::RenderedComment;
use prdeco::{Config, MarkdownPreview};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Printed between comments in plain output.
const COMMENT_SEPARATOR: &str = "---";

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prdeco={}", config.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Writes rendered comments in the configured output shape.
///
/// JSON output is a single array. Plain output prints each body followed by
/// its HTML preview when requested, with a separator line between comments.
fn write_comments(
    out: &mut impl Write,
    comments: &[RenderedComment],
    config: &Config,
) -> Result<()> {
    if config.json {
        serde_json::to_writer_pretty(&mut *out, comments).context("Failed to encode comments")?;
        writeln!(out)?;
        return Ok(());
    }

    let preview = config.preview.then(MarkdownPreview::new);

    for (index, comment) in comments.iter().enumerate() {
        if index > 0 {
            writeln!(out, "{}", COMMENT_SEPARATOR)?;
        }
        write!(out, "{}", comment.body)?;
        if let Some(preview) = &preview {
            writeln!(out)?;
            write!(out, "{}", preview.render(&comment.body))?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config);
    config.validate().context("Invalid configuration")?;

    let snapshot = config.load_snapshot()?;
    let factory = config.dialect.factory();
    let comments = snapshot.render(factory.as_ref(), &config.issue_config());

    info!(dialect = ?config.dialect, count = comments.len(), "writing comments");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_comments(&mut out, &comments, &config).context("Failed to write comments")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use prdeco::report::CommentKind;

    fn comments() -> Vec<RenderedComment> {
        vec![
            RenderedComment {
                kind: CommentKind::Summary,
                key: None,
                body: "Analysis Details: 0 Issues\n\n".to_string(),
            },
            RenderedComment {
                kind: CommentKind::Issue,
                key: Some("AX-1".to_string()),
                body: "issue\n\n".to_string(),
            },
        ]
    }

    fn render(args: &[&str]) -> String {
        let config = Config::try_parse_from(args).expect("Should parse");
        let mut out = Vec::new();
        write_comments(&mut out, &comments(), &config).expect("Should write");
        String::from_utf8(out).expect("Should be UTF8")
    }

    #[test]
    fn test_plain_output_separates_comments() {
        // Act
        let output = render(&["prdeco"]);

        // Assert
        assert_eq!(output, "Analysis Details: 0 Issues\n\n---\nissue\n\n");
    }

    #[test]
    fn test_json_output() {
        // Act
        let output = render(&["prdeco", "--json"]);

        // Assert
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Should be JSON");
        assert_eq!(parsed[0]["kind"], "summary");
        assert_eq!(parsed[1]["key"], "AX-1");
        assert_eq!(parsed[1]["body"], "issue\n\n");
    }

    #[test]
    fn test_preview_output_appends_html() {
        // Act
        let output = render(&["prdeco", "--preview"]);

        // Assert
        assert!(
            output.contains("<p>Analysis Details: 0 Issues</p>"),
            "Should include preview: {}",
            output
        );
        assert!(output.contains("<p>issue</p>"));
    }

    #[test]
    fn test_empty_comment_list() {
        let config = Config::try_parse_from(["prdeco"]).expect("Should parse");
        let mut out = Vec::new();

        write_comments(&mut out, &[], &config).expect("Should write");

        assert!(out.is_empty());
    }
}
