//! Backend API access for interface groups
//!
//! The resolver only needs two calls from the backend: list every interface
//! group, and fetch one by uid. [`GroupApi`] abstracts them so the resolver
//! works the same against the REST API or an in-memory listing.

mod factory;
mod http;
mod memory;

pub use factory::create_api;
pub use http::HttpGroupApi;
pub use memory::StaticGroupApi;

use crate::error::IfGroupResult;
use crate::group::InterfaceGroup;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Abstract interface group backend
///
/// Implementations must return [`IfGroupError::Cancelled`] promptly once
/// `cancel` fires instead of a late result.
///
/// [`IfGroupError::Cancelled`]: crate::error::IfGroupError::Cancelled
#[async_trait]
pub trait GroupApi: Send + Sync {
    /// List every interface group, of all types
    async fn list_all(&self, cancel: &CancellationToken) -> IfGroupResult<Vec<InterfaceGroup>>;

    /// Fetch a single interface group by uid
    async fn get_by_uid(
        &self,
        uid: Uuid,
        cancel: &CancellationToken,
    ) -> IfGroupResult<InterfaceGroup>;

    /// Human-readable backend name for diagnostics
    fn backend_name(&self) -> &'static str;
}
