//! Miette diagnostic wrapper for catalog parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed catalog snapshots.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid catalog: {message}")]
#[diagnostic(
    code(skusel::catalog),
    help("expected an object with an `items` array and an optional `variations` array")
)]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,
}

impl CatalogDiagnostic {
    /// Point at the 1-based `line` and `column` reported by the JSON parser.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);
        let offset = offset.min(content.len());

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
        }
    }
}
