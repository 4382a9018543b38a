//! Presentation view of a single error.
//!
//! The view is built from an error without touching it. Anything computed for
//! display, like the hexadecimal result code, lives here.

use std::error::Error;
use std::io;

use crate::error::LinkError;

/// Name/value rows describing one error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub kind: String,
    pub message: String,
    pub properties: Vec<(String, String)>,
    /// Result code formatted as `0x%08X`
    pub result_code: Option<String>,
}

impl ErrorView {
    /// Build a view of `error`, without its causes
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        if let Some(link_error) = error.downcast_ref::<LinkError>() {
            return Self {
                kind: link_error.kind_name().to_string(),
                message: link_error.to_string(),
                properties: link_error
                    .properties()
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
                result_code: link_error.result_code().map(format_result_code),
            };
        }

        if let Some(io_error) = error.downcast_ref::<io::Error>() {
            return Self {
                kind: "IoError".to_string(),
                message: io_error.to_string(),
                properties: vec![("ErrorKind".to_string(), format!("{:?}", io_error.kind()))],
                result_code: io_error.raw_os_error().map(format_result_code),
            };
        }

        Self {
            kind: "Error".to_string(),
            message: error.to_string(),
            properties: Vec::new(),
            result_code: None,
        }
    }

    /// Rows in display order
    pub fn rows(&self) -> Vec<(&str, &str)> {
        let mut rows = vec![("Kind", self.kind.as_str()), ("Message", self.message.as_str())];
        rows.extend(
            self.properties
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
        if let Some(code) = &self.result_code {
            rows.push(("ResultCode", code.as_str()));
        }
        rows
    }
}

/// Zero-padded hexadecimal rendering of a result code
pub fn format_result_code(code: i32) -> String {
    format!("0x{:08X}", code as u32)
}
