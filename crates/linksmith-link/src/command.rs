//! Command construction for the external link tool

use linksmith_core::types::{CommandInvocation, LinkRequest, LinkTool, LinkType, ResolvedDestination};

/// Build the tool invocation for a validated request. Pure; performs no I/O.
pub fn build_command(
    request: &LinkRequest,
    destination: &ResolvedDestination,
    tool: &LinkTool,
) -> CommandInvocation {
    let mut invocation = CommandInvocation::new(&tool.program);
    for argument in &tool.subcommand {
        invocation = invocation.flag(argument);
    }

    let flags = match request.link_type {
        LinkType::SymbolicLink => [
            tool.symbolic_flag.as_ref(),
            tool.directory_flag.as_ref().filter(|_| destination.is_directory),
        ],
        LinkType::Junction => [tool.junction_flag.as_ref(), None],
        LinkType::Hardlink => [tool.hardlink_flag.as_ref(), None],
    };
    for flag in flags.into_iter().flatten() {
        invocation = invocation.flag(flag);
    }

    let name = request.name.as_str();
    let target = destination.full_path.as_str();
    if tool.target_first {
        invocation.path(target).path(name)
    } else {
        invocation.path(name).path(target)
    }
}
