//! Command implementations and dispatch logic.
//!
//! Each command is a plain function that takes a `CommandContext`.

use camino::Utf8PathBuf;
use linksmith_config::{ConfigLayering, ConfigLoader, ConfigSource, LinksmithToml};
use linksmith_core::error::{LinkError, LinkResult};
use linksmith_core::report::{ErrorReport, DEFAULT_REPORT_WIDTH};
use linksmith_core::types::LinkType;
use linksmith_core::utils::utf8_path;
use std::collections::HashMap;
use tracing::debug;

pub mod config;
pub mod create;
pub mod list;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
    pub config: LinksmithToml,
    pub sources: Vec<ConfigSource>,
}

impl CommandContext {
    /// Create a context for the current directory, loading configuration
    /// with `report_width` as a command line override
    pub fn new(report_width: Option<usize>) -> LinkResult<Self> {
        let report = ErrorReport::new(report_width.unwrap_or(DEFAULT_REPORT_WIDTH));
        let cwd = std::env::current_dir()
            .map_err(|e| report.fail("config", LinkError::io("Failed to get current directory".to_string(), e)))?;
        let cwd = utf8_path(cwd).map_err(|e| report.fail("config", e))?;
        let env = ConfigLayering::collect_env_overrides().map_err(|e| report.fail("config", e))?;

        Self::load(cwd.clone(), &ConfigLoader::new(cwd), &env, report_width)
    }

    /// Create a context rooted at `cwd` from `loader` and explicit
    /// environment overrides. Failures are reported before they are returned.
    pub fn load(
        cwd: Utf8PathBuf,
        loader: &ConfigLoader,
        env: &HashMap<String, String>,
        report_width: Option<usize>,
    ) -> LinkResult<Self> {
        let report = ErrorReport::new(report_width.unwrap_or(DEFAULT_REPORT_WIDTH));

        let mut overrides = HashMap::new();
        if let Some(width) = report_width {
            overrides.insert("report-width".to_string(), width.to_string());
        }
        let (config, sources) = loader
            .load_with(env, &overrides)
            .map_err(|e| report.fail("config", e))?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
            config,
            sources,
        })
    }

    /// Report renderer at the configured width
    pub fn report(&self) -> ErrorReport {
        ErrorReport::new(self.config.report.width)
    }
}

/// Dispatch a command to its handler
pub fn dispatch_command(command: Commands, ctx: &CommandContext) -> LinkResult<()> {
    match command {
        Commands::Create {
            name,
            destination,
            link_type,
            confirm,
            json,
        } => {
            let link_type = match link_type {
                Some(value) => value.parse::<LinkType>().map_err(|e| ctx.report().fail("parse", e))?,
                None => ctx.config.link.default_type,
            };
            let confirm = confirm || ctx.config.link.confirm;
            debug!("Creating {} {} -> {} (confirm: {})", link_type, name, destination, confirm);
            create::execute(&name, &destination, link_type, confirm, json, ctx)
        },
        Commands::List {
            dir,
            filter,
            recursive,
            json,
        } => {
            debug!("Listing links (filter: {:?}, recursive: {})", filter, recursive);
            list::execute(dir, filter.as_deref(), recursive, json, ctx)
        },
        Commands::Config => config::execute(ctx),
        Commands::Version => show_version(ctx),
    }
}

fn show_version(ctx: &CommandContext) -> LinkResult<()> {
    ctx.output.plain(&format!("linksmith v{}", env!("CARGO_PKG_VERSION")));
    ctx.output.info(&format!("Built: {}", env!("BUILD_DATE")));
    ctx.output.info(&format!("Target: {}", env!("BUILD_TARGET")));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));
    Ok(())
}

/// Serialize `value` as pretty JSON
pub(crate) fn to_json<T: serde::Serialize>(value: &T, report: &ErrorReport) -> LinkResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| report.fail("output", LinkError::io("Failed to serialize output".to_string(), e.into())))
}
