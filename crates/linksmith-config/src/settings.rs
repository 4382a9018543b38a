//! linksmith.toml configuration parsing and serialization

use camino::Utf8Path;
use linksmith_core::error::LinkError;
use linksmith_core::report::{DEFAULT_REPORT_WIDTH, MIN_REPORT_WIDTH};
use linksmith_core::types::{LinkTool, LinkType};
use serde::{Deserialize, Serialize};

use crate::ConfigResult;

/// Complete linksmith.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksmithToml {
    /// Error report rendering
    pub report: ReportSection,

    /// Defaults for `linksmith create`
    pub link: LinkSection,

    /// External link-creation tool
    pub tool: LinkTool,
}

/// `[report]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Column width of diagnostic reports
    pub width: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            width: DEFAULT_REPORT_WIDTH,
        }
    }
}

/// `[link]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSection {
    /// Link type used when none is given on the command line
    pub default_type: LinkType,

    /// Ask before running the link command
    pub confirm: bool,
}

/// Parse configuration text into a raw table, keeping unset keys unset so
/// layers can be merged before defaults apply
pub fn parse_table(content: &str, path: &Utf8Path) -> ConfigResult<toml::Table> {
    content.parse::<toml::Table>().map_err(|e| LinkError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Turn a merged table into a validated configuration
pub fn from_table(table: toml::Table, path: &Utf8Path) -> ConfigResult<LinksmithToml> {
    let config: LinksmithToml = toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| LinkError::ConfigParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

    validate_config(&config)?;

    Ok(config)
}

/// Parse a complete linksmith.toml document
pub fn parse_linksmith_toml(content: &str, path: &Utf8Path) -> ConfigResult<LinksmithToml> {
    from_table(parse_table(content, path)?, path)
}

/// Serialize the configuration back to TOML
pub fn serialize_linksmith_toml(config: &LinksmithToml) -> ConfigResult<String> {
    toml::to_string_pretty(config).map_err(|e| LinkError::ConfigValidation {
        field: "config".to_string(),
        reason: format!("TOML serialization error: {}", e),
    })
}

/// Validate configuration values serde cannot check
pub fn validate_config(config: &LinksmithToml) -> ConfigResult<()> {
    if config.report.width < MIN_REPORT_WIDTH {
        return Err(LinkError::ConfigValidation {
            field: "report.width".to_string(),
            reason: format!(
                "width {} is below the minimum of {}",
                config.report.width, MIN_REPORT_WIDTH
            ),
        });
    }

    if config.tool.program.trim().is_empty() {
        return Err(LinkError::ConfigValidation {
            field: "tool.program".to_string(),
            reason: "program must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Load a raw configuration table from a file
pub fn load_table_from_file(path: &Utf8Path) -> ConfigResult<toml::Table> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LinkError::io(format!("Failed to read {}", path), e))?;

    parse_table(&content, path)
}
