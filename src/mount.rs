//! Mount address selection
//!
//! Answers "which address should this host mount from": resolves the NFS
//! interface group and hashes the host identifier onto its addresses.

use crate::cache::GroupCache;
use crate::error::{IfGroupError, IfGroupResult};
use crate::resolver::GroupResolver;
use crate::selector::{local_host_identifier, select_address};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Picks a stable NFS mount address for this host
///
/// Safe to share between tasks behind an `Arc`; see [`GroupCache`] for the
/// single-flight guarantee on concurrent first resolutions. No retries and
/// no timeouts happen here; cancel through the token instead.
pub struct MountIpResolver {
    resolver: GroupResolver,
    host_identifier: Option<String>,
}

impl MountIpResolver {
    /// Select addresses for the local host
    pub fn new(resolver: GroupResolver) -> Self {
        Self {
            resolver,
            host_identifier: None,
        }
    }

    /// Hash `host_identifier` instead of the local hostname
    pub fn with_host_identifier(mut self, host_identifier: impl Into<String>) -> Self {
        self.host_identifier = Some(host_identifier.into());
        self
    }

    pub fn resolver(&self) -> &GroupResolver {
        &self.resolver
    }

    /// Identifier hashed to pick an address
    pub fn host_identifier(&self) -> String {
        match &self.host_identifier {
            Some(id) if !id.is_empty() => id.clone(),
            _ => local_host_identifier(),
        }
    }

    /// Address this host should mount the NFS interface group from
    ///
    /// `group_name` of `None` uses the default NFS group.
    pub async fn get_mount_address(
        &self,
        group_name: Option<&str>,
        cancel: &CancellationToken,
    ) -> IfGroupResult<String> {
        let key = GroupCache::key_for(group_name);
        let group = match self.resolver.cache().lookup(key) {
            Some(group) => group,
            None => {
                debug!("Interface group {} not cached, resolving", key);
                self.resolver.resolve_nfs_group(group_name, cancel).await?
            }
        };

        // The cache can be filled directly, bypassing the resolver's checks.
        if !group.has_addresses() {
            return Err(IfGroupError::NoAddresses(group.name));
        }

        let host = self.host_identifier();
        let address = select_address(&group.ips, &host)?;
        info!(
            "Selected {} from interface group {} for host {}",
            address, group.name, host
        );
        Ok(address)
    }
}
