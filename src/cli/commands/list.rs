//! List command - show interface groups

use crate::api::create_api;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::IfGroupResult;
use crate::group::{GroupType, InterfaceGroup};
use crate::resolver::GroupResolver;
use console::style;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Execute the list command
pub async fn execute(
    args: ListArgs,
    config: &Config,
    groups_file: Option<&Path>,
    cancel: &CancellationToken,
) -> IfGroupResult<()> {
    let resolver = GroupResolver::new(create_api(config, groups_file).await?);

    let groups = match args.group_type {
        Some(kind) => resolver.list_by_type(GroupType::from(kind), cancel).await?,
        None => resolver.list_all(cancel).await?,
    };

    match args.format {
        OutputFormat::Table => print_table(&groups),
        OutputFormat::Json => print_json(&groups)?,
        OutputFormat::Plain => print_plain(&groups),
    }

    Ok(())
}

fn print_table(groups: &[InterfaceGroup]) {
    if groups.is_empty() {
        println!("No interface groups");
        return;
    }

    println!(
        "{:<20} {:<6} {:<38} {:<10} {}",
        style("NAME").bold(),
        style("TYPE").bold(),
        style("UID").bold(),
        style("STATUS").bold(),
        style("IPS").bold()
    );
    println!("{}", "-".repeat(90));

    for group in groups {
        println!(
            "{:<20} {:<6} {:<38} {:<10} {}",
            group.name,
            group.group_type,
            group.uid.to_string(),
            group.status,
            group.ips.join(",")
        );
    }

    println!();
    println!("{} interface group(s)", groups.len());
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> IfGroupResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(groups: &[InterfaceGroup]) {
    for group in groups {
        println!("{}", group.name);
    }
}
