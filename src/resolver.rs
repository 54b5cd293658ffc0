//! Interface group resolution
//!
//! Turns a logical group reference (a name, or nothing for the default
//! group) into a concrete, address-bearing interface group and caches it.

use crate::api::GroupApi;
use crate::cache::GroupCache;
use crate::error::{IfGroupError, IfGroupResult};
use crate::group::{GroupType, InterfaceGroup};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

/// Resolves interface groups against a backend, caching by logical name
///
/// Owns its [`GroupCache`]. A resolved key is never fetched again for the
/// lifetime of the resolver; a key whose resolution failed is fetched again
/// on the next call. Concurrent resolutions of one key share a single fetch.
pub struct GroupResolver {
    api: Arc<dyn GroupApi>,
    cache: GroupCache,
}

impl GroupResolver {
    /// Create a resolver with an empty cache
    pub fn new(api: Arc<dyn GroupApi>) -> Self {
        Self::with_cache(api, GroupCache::new())
    }

    /// Create a resolver over an existing cache
    pub fn with_cache(api: Arc<dyn GroupApi>, cache: GroupCache) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &GroupCache {
        &self.cache
    }

    pub fn api(&self) -> &Arc<dyn GroupApi> {
        &self.api
    }

    /// List every interface group, uncached
    pub async fn list_all(&self, cancel: &CancellationToken) -> IfGroupResult<Vec<InterfaceGroup>> {
        self.api.list_all(cancel).await
    }

    /// List the interface groups of one type, uncached
    ///
    /// Keeps the backend's order. Backend failures are returned as errors,
    /// never as an empty listing.
    pub async fn list_by_type(
        &self,
        kind: GroupType,
        cancel: &CancellationToken,
    ) -> IfGroupResult<Vec<InterfaceGroup>> {
        let groups = self.api.list_all(cancel).await?;
        let filtered: Vec<InterfaceGroup> = groups
            .into_iter()
            .filter(|group| group.group_type() == kind)
            .collect();
        debug!("Found {} {} interface groups", filtered.len(), kind);
        Ok(filtered)
    }

    /// Fetch one interface group by uid, uncached
    pub async fn group_by_uid(
        &self,
        uid: Uuid,
        cancel: &CancellationToken,
    ) -> IfGroupResult<InterfaceGroup> {
        self.api.get_by_uid(uid, cancel).await
    }

    /// Resolve an NFS interface group by name, or the default one
    ///
    /// With a name, the first NFS group carrying that name is used. Without
    /// one, the first NFS group in backend order becomes the default and is
    /// cached under [`DEFAULT_KEY`](crate::cache::DEFAULT_KEY). The returned
    /// group has at least one address, sorted ascending.
    pub async fn resolve_nfs_group(
        &self,
        name: Option<&str>,
        cancel: &CancellationToken,
    ) -> IfGroupResult<InterfaceGroup> {
        let key = GroupCache::key_for(name);
        self.cache
            .get_or_try_resolve(key, cancel, || self.fetch_nfs_group(name, cancel))
            .await
    }

    async fn fetch_nfs_group(
        &self,
        name: Option<&str>,
        cancel: &CancellationToken,
    ) -> IfGroupResult<InterfaceGroup> {
        let groups = self.list_by_type(GroupType::Nfs, cancel).await?;
        if groups.is_empty() {
            return Err(IfGroupError::NoGroupsFound {
                kind: GroupType::Nfs,
            });
        }

        let mut group = match name {
            Some(name) => groups
                .into_iter()
                .find(|group| group.name == name)
                .ok_or_else(|| IfGroupError::GroupNotFound(name.to_string()))?,
            None => groups
                .into_iter()
                .next()
                .ok_or(IfGroupError::NoGroupsFound {
                    kind: GroupType::Nfs,
                })?,
        };

        if !group.has_addresses() {
            return Err(IfGroupError::NoAddresses(group.name));
        }

        group.normalize();
        info!(
            "Resolved NFS interface group {} ({} addresses)",
            group.name,
            group.ips.len()
        );
        Ok(group)
    }
}
