use std::{io, path::PathBuf};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use thiserror::Error;

/// Errors surfaced by the application.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A lexing or parsing error, along with the source it occurred in.
    #[error("{0}")]
    Parse(strint_parse::Error, String),
}

/// Generalized error handler.
pub(crate) trait ErrorHandler {
    /// Displays an error.
    fn display_error(&self, error: AppError);
}

/// A simple error handler, displaying errors on a single line.
pub(crate) struct SimpleErrorHandler;
impl ErrorHandler for SimpleErrorHandler {
    fn display_error(&self, error: AppError) {
        eprintln!("strint: {error}");
    }
}

/// A guiding error handler, displaying errors within their source.
pub(crate) struct GuidingErrorHandler;
impl ErrorHandler for GuidingErrorHandler {
    fn display_error(&self, error: AppError) {
        match error {
            AppError::Parse(error, src) => print_parse_error_details(&src, &error),
            error => eprintln!("strint: {error}"),
        }
    }
}

/// Prints details related to a parse error.
fn print_parse_error_details(src: &str, error: &strint_parse::Error) {
    match render_parse_error(src, error) {
        Some(details) => eprintln!("{details}"),
        None => eprintln!("strint: {error}"),
    }
}

/// Renders a parse error as an annotated snippet of its source.
///
/// Returns `None` if there is no source to annotate.
pub(crate) fn render_parse_error(src: &str, error: &strint_parse::Error) -> Option<String> {
    let range = annotation_range(src, error.position().offset)?;
    let label = error.to_string();

    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(&label),
            id: None,
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![],
        slices: vec![Slice {
            source: src,
            line_start: 1,
            origin: None,
            fold: true,
            annotations: vec![SourceAnnotation {
                label: error.help(),
                annotation_type: AnnotationType::Error,
                range,
            }],
        }],
        opt: FormatOptions {
            color: true,
            ..Default::default()
        },
    };

    Some(DisplayList::from(snippet).to_string())
}

/// Converts a byte offset into a one character range within `src`, counted in chars.
///
/// Offsets at the end of input are moved onto the last character. Returns `None` for an
/// empty source.
pub(crate) fn annotation_range(src: &str, offset: usize) -> Option<(usize, usize)> {
    let len = src.chars().count();
    if len == 0 {
        return None;
    }

    let prefix = src.get(..offset).unwrap_or(src);
    let start = prefix.chars().count().min(len - 1);
    Some((start, start + 1))
}
