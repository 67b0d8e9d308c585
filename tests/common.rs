//! Shared test utilities for integration tests.
//!
//! Provides a formatter factory that records the documents it is asked to
//! render, and helpers for writing snapshot files.

#![allow(dead_code)]

use anyhow::Result;
use prdeco::{Document, Formatter, FormatterFactory};
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::TempDir;

/// Formatter factory that captures every document and returns fixed output.
pub struct RecordingFormatterFactory {
    output: String,
    documents: RefCell<Vec<Document>>,
}

impl RecordingFormatterFactory {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            documents: RefCell::new(Vec::new()),
        }
    }

    /// Returns the captured documents in the order they were formatted.
    pub fn documents(&self) -> Vec<Document> {
        self.documents.borrow().clone()
    }
}

struct RecordingFormatter<'a> {
    factory: &'a RecordingFormatterFactory,
}

impl Formatter<Document> for RecordingFormatter<'_> {
    fn format(&self, node: &Document) -> String {
        self.factory.documents.borrow_mut().push(node.clone());
        self.factory.output.clone()
    }
}

impl FormatterFactory for RecordingFormatterFactory {
    fn document_formatter(&self) -> Box<dyn Formatter<Document> + '_> {
        Box::new(RecordingFormatter { factory: self })
    }
}

/// Writes snapshot content to a file in a fresh temporary directory.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_snapshot(content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, content)?;
    Ok((dir, path))
}
