//! `linksmith list`

use camino::Utf8PathBuf;
use linksmith_core::error::LinkResult;
use linksmith_core::utils::absolutize;
use linksmith_link::list_links;

use super::{to_json, CommandContext};

/// Print the links found under `dir` (or the current directory)
pub fn execute(
    dir: Option<Utf8PathBuf>,
    filter: Option<&str>,
    recursive: bool,
    json: bool,
    ctx: &CommandContext,
) -> LinkResult<()> {
    let dir = match dir {
        Some(dir) => absolutize(&ctx.cwd, &dir),
        None => ctx.cwd.clone(),
    };
    let links = list_links(&dir, filter, recursive, &ctx.report())?;

    if json {
        ctx.output.plain(&to_json(&links, &ctx.report())?);
        return Ok(());
    }

    if links.is_empty() {
        ctx.output.info(&format!("No links found in {}", dir));
        return Ok(());
    }

    for link in &links {
        let target = link.target.as_ref().map(|t| t.as_str()).unwrap_or("?");
        let marker = if link.is_directory { "/" } else { "" };
        ctx.output.plain(&format!("{}{} -> {}", link.path, marker, target));
    }
    Ok(())
}
