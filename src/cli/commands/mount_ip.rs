//! Mount-ip command - print the address this host should mount from

use crate::api::create_api;
use crate::cli::args::MountIpArgs;
use crate::config::Config;
use crate::error::IfGroupResult;
use crate::mount::MountIpResolver;
use crate::resolver::GroupResolver;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Execute the mount-ip command
pub async fn execute(
    args: MountIpArgs,
    config: &Config,
    groups_file: Option<&Path>,
    cancel: &CancellationToken,
) -> IfGroupResult<()> {
    let api = create_api(config, groups_file).await?;
    let mut facade = MountIpResolver::new(GroupResolver::new(api));

    if let Some(host) = args.host.or_else(|| config.mount.host_identifier.clone()) {
        facade = facade.with_host_identifier(host);
    }

    let group = args.group.or_else(|| config.mount.group.clone());
    debug!(
        "Selecting mount address from {} for host {} via {} backend",
        group.as_deref().unwrap_or("the default NFS group"),
        facade.host_identifier(),
        facade.resolver().api().backend_name()
    );

    let address = facade.get_mount_address(group.as_deref(), cancel).await?;
    println!("{}", address);
    Ok(())
}
