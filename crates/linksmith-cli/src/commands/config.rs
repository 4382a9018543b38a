//! `linksmith config`

use linksmith_config::settings::serialize_linksmith_toml;
use linksmith_config::ConfigSource;
use linksmith_core::error::LinkResult;

use super::CommandContext;

/// Print the effective configuration as TOML, preceded by a comment listing
/// the layers it came from
pub fn execute(ctx: &CommandContext) -> LinkResult<()> {
    let sources: Vec<String> = ctx.sources.iter().map(describe_source).collect();
    ctx.output.plain(&format!("# sources: {}", sources.join(", ")));
    ctx.output.plain(serialize_linksmith_toml(&ctx.config)?.trim_end());
    Ok(())
}

pub(crate) fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Defaults => "defaults".to_string(),
        ConfigSource::Global(path) => format!("global {}", path),
        ConfigSource::Project(path) => format!("project {}", path),
        ConfigSource::Environment(key) => format!("env {}", key),
        ConfigSource::CommandLine => "command line".to_string(),
    }
}
