//! In-memory interface group backend
//!
//! Serves a fixed listing. Used for offline resolution from an exported
//! JSON file and as the call-counting backend in tests.

use super::GroupApi;
use crate::error::{IfGroupError, IfGroupResult};
use crate::group::InterfaceGroup;
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::fs;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

/// Interface group backend over a fixed listing
#[derive(Debug, Default)]
pub struct StaticGroupApi {
    groups: Mutex<Vec<InterfaceGroup>>,
    failure: Mutex<Option<String>>,
    latency: Option<Duration>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl StaticGroupApi {
    /// Serve the given groups in the given order
    pub fn new(groups: Vec<InterfaceGroup>) -> Self {
        Self {
            groups: Mutex::new(groups),
            ..Self::default()
        }
    }

    /// Load a listing from a JSON file holding an array of group records
    pub async fn from_file(path: &Path) -> IfGroupResult<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            IfGroupError::io(format!("reading interface groups from {}", path.display()), e)
        })?;
        let groups: Vec<InterfaceGroup> = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} interface groups from {}",
            groups.len(),
            path.display()
        );
        Ok(Self::new(groups))
    }

    /// Delay every call by `latency`, still honouring cancellation
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every following call fail with a transport error
    pub fn fail_with(&self, reason: impl Into<String>) {
        *lock(&self.failure) = Some(reason.into());
    }

    /// Stop injecting failures
    pub fn recover(&self) {
        *lock(&self.failure) = None;
    }

    /// Replace the served listing
    pub fn set_groups(&self, groups: Vec<InterfaceGroup>) {
        *lock(&self.groups) = groups;
    }

    /// Number of `list_all` calls served so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of `get_by_uid` calls served so far
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    async fn respond(&self, context: &str, cancel: &CancellationToken) -> IfGroupResult<()> {
        if let Some(latency) = self.latency {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(IfGroupError::Cancelled),
                _ = tokio::time::sleep(latency) => {}
            }
        }
        if cancel.is_cancelled() {
            return Err(IfGroupError::Cancelled);
        }
        if let Some(reason) = lock(&self.failure).clone() {
            return Err(IfGroupError::transport(context, reason));
        }
        Ok(())
    }
}

#[async_trait]
impl GroupApi for StaticGroupApi {
    async fn list_all(&self, cancel: &CancellationToken) -> IfGroupResult<Vec<InterfaceGroup>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(InterfaceGroup::BASE_PATH, cancel).await?;
        Ok(lock(&self.groups).clone())
    }

    async fn get_by_uid(
        &self,
        uid: Uuid,
        cancel: &CancellationToken,
    ) -> IfGroupResult<InterfaceGroup> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(&InterfaceGroup::path_for(&uid), cancel).await?;
        lock(&self.groups)
            .iter()
            .find(|group| group.uid == uid)
            .cloned()
            .ok_or_else(|| IfGroupError::GroupNotFound(uid.to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "static"
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
