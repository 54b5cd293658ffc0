//! Show command - display one interface group

use super::list::print_json;
use crate::api::create_api;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::IfGroupResult;
use crate::group::InterfaceGroup;
use crate::resolver::GroupResolver;
use console::style;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Execute the show command
pub async fn execute(
    args: ShowArgs,
    config: &Config,
    groups_file: Option<&Path>,
    cancel: &CancellationToken,
) -> IfGroupResult<()> {
    let resolver = GroupResolver::new(create_api(config, groups_file).await?);
    let group = resolver.group_by_uid(args.uid, cancel).await?;

    match args.format {
        OutputFormat::Table => print_details(&group),
        OutputFormat::Json => print_json(&group)?,
        OutputFormat::Plain => println!("{}", group),
    }

    Ok(())
}

fn print_details(group: &InterfaceGroup) {
    let rows = [
        ("Name", group.name.clone()),
        ("UID", group.uid.to_string()),
        ("Type", group.group_type.to_string()),
        ("Status", group.status.clone()),
        ("Subnet mask", group.subnet_mask.clone()),
        ("Gateway", group.gateway.clone()),
        ("Manage GIDs", group.allow_manage_gids.to_string()),
        ("IPs", group.ips.join(", ")),
    ];

    for (label, value) in rows {
        println!("{:<12} {}", style(label).bold(), value);
    }
}
