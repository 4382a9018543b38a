//! `linksmith create`

use linksmith_core::error::LinkResult;
use linksmith_core::types::LinkType;
use linksmith_link::Linker;

use super::{to_json, CommandContext};
use crate::output::prompt::TerminalConfirmer;

/// Create one link with the configured tool, asking on the terminal first
/// when `confirm` is set
pub fn execute(
    name: &str,
    destination: &str,
    link_type: LinkType,
    confirm: bool,
    json: bool,
    ctx: &CommandContext,
) -> LinkResult<()> {
    let linker = Linker::new(ctx.cwd.clone(), ctx.config.tool.clone())
        .with_report(ctx.report())
        .with_confirmer(TerminalConfirmer::new());
    run(&linker, name, destination, link_type, confirm, json, ctx)
}

pub(crate) fn run(
    linker: &Linker,
    name: &str,
    destination: &str,
    link_type: LinkType,
    confirm: bool,
    json: bool,
    ctx: &CommandContext,
) -> LinkResult<()> {
    let Some(status) = linker.create(name, destination, link_type, confirm)? else {
        ctx.output.warn("Link creation cancelled");
        return Ok(());
    };

    if json {
        ctx.output.plain(&to_json(&status, &ctx.report())?);
    } else {
        ctx.output.plain(&status.to_string());
        if let Some(created) = &status.link_created {
            ctx.output.success(&format!("{} created: {}", link_type, created));
        }
    }
    Ok(())
}
