//! Error reports for diagnostics.
//!
//! An `ErrorReport` flattens an error into wrapped `Key : Value` lines: the
//! error itself, where it was raised, and one `---[cause #i]---` block per
//! underlying cause. Rendering never fails.
//!
//! Failure sites call [`ErrorReport::fail`], which logs the report at warn
//! level and hands the original error back for propagation.

use std::error::Error;
use std::panic::Location;
use textwrap::Options;
use tracing::warn;

pub mod view;

pub use view::{format_result_code, ErrorView};

/// Default column width of a report
pub const DEFAULT_REPORT_WIDTH: usize = 140;

/// Narrowest width a report is rendered at
pub const MIN_REPORT_WIDTH: usize = 20;

/// Where an error was observed
#[derive(Debug, Clone, Copy)]
pub struct ErrorContext {
    /// Pipeline stage that failed
    pub operation: &'static str,
    pub location: &'static Location<'static>,
}

impl ErrorContext {
    /// Capture the caller's source location
    #[track_caller]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            location: Location::caller(),
        }
    }
}

/// Line-wrapped error report renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReport {
    width: usize,
}

impl Default for ErrorReport {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_WIDTH)
    }
}

impl ErrorReport {
    /// Create a renderer; widths below `MIN_REPORT_WIDTH` are raised to it
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_REPORT_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render `error` and its cause chain into lines no wider than `width`
    pub fn lines(&self, error: &(dyn Error + 'static), context: Option<&ErrorContext>) -> Vec<String> {
        let mut lines = self.block(&ErrorView::from_error(error).rows());

        if let Some(context) = context {
            let location = context.location.to_string();
            lines.extend(self.block(&[
                ("Operation", context.operation),
                ("Location", location.as_str()),
            ]));
        }

        let mut source = error.source();
        let mut index = 0;
        while let Some(cause) = source {
            lines.push(self.separator(index));
            lines.extend(self.block(&ErrorView::from_error(cause).rows()));
            source = cause.source();
            index += 1;
        }

        lines
    }

    /// Render the report as one string
    pub fn render(&self, error: &(dyn Error + 'static), context: Option<&ErrorContext>) -> String {
        self.lines(error, context).join("\n")
    }

    /// Log the report at warn level
    pub fn emit(&self, error: &(dyn Error + 'static), context: &ErrorContext) {
        warn!(
            operation = context.operation,
            "{}\n{}",
            error,
            self.render(error, Some(context))
        );
    }

    /// Log the report for `error` and return it unchanged
    #[track_caller]
    pub fn fail<E>(&self, operation: &'static str, error: E) -> E
    where
        E: Error + 'static,
    {
        let context = ErrorContext::new(operation);
        self.emit(&error, &context);
        error
    }

    /// `---[cause #i]---...` padded to exactly `width`
    fn separator(&self, index: usize) -> String {
        let mut line = format!("---[cause #{}]", index);
        if line.len() >= self.width {
            line.truncate(self.width);
        } else {
            let fill = self.width - line.len();
            line.push_str(&"-".repeat(fill));
        }
        line
    }

    fn block(&self, rows: &[(&str, &str)]) -> Vec<String> {
        let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        let continuation = " ".repeat(key_width + 3);
        let mut lines = Vec::new();

        for (key, value) in rows {
            let head = format!("{:<width$} : ", key, width = key_width);
            for (i, value_line) in value.split('\n').enumerate() {
                let initial = if i == 0 { head.as_str() } else { continuation.as_str() };
                let options = Options::new(self.width)
                    .initial_indent(initial)
                    .subsequent_indent(&continuation);
                lines.extend(
                    textwrap::wrap(value_line.trim_end(), options)
                        .into_iter()
                        .map(|line| line.into_owned()),
                );
            }
        }

        lines
    }
}
