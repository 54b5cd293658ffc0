//! REST backend for interface groups
//!
//! Talks to the storage cluster's management API. Every response wraps its
//! payload in a `{"data": ...}` envelope.

use super::GroupApi;
use crate::config::schema::ApiConfig;
use crate::error::{IfGroupError, IfGroupResult};
use crate::group::InterfaceGroup;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Interface group backend over HTTP
pub struct HttpGroupApi {
    agent: ureq::Agent,
    endpoint: String,
    token: Option<String>,
}

impl HttpGroupApi {
    /// Create a client for the configured endpoint
    pub fn new(config: &ApiConfig) -> IfGroupResult<Self> {
        let endpoint = config.endpoint.trim().trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(IfGroupError::ApiNotConfigured);
        }

        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();

        Ok(Self {
            agent,
            endpoint: endpoint.to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Base URL requests are made against
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET `path` and decode the enveloped payload
    ///
    /// The blocking request runs on the blocking pool. When `cancel` fires
    /// first the call returns `Cancelled` right away and the request's
    /// eventual result is discarded.
    async fn get<T>(&self, path: String, cancel: &CancellationToken) -> IfGroupResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        if cancel.is_cancelled() {
            return Err(IfGroupError::Cancelled);
        }

        let url = format!("{}/{}", self.endpoint, path);
        let agent = self.agent.clone();
        let token = self.token.clone();
        debug!("GET {}", url);

        let request = tokio::task::spawn_blocking(move || {
            fetch_json::<T>(&agent, &url, token.as_deref(), &path)
        });

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Request cancelled");
                Err(IfGroupError::Cancelled)
            }
            joined = request => joined
                .map_err(|e| IfGroupError::Internal(format!("request task failed: {}", e)))?,
        }
    }
}

fn fetch_json<T: DeserializeOwned>(
    agent: &ureq::Agent,
    url: &str,
    token: Option<&str>,
    path: &str,
) -> IfGroupResult<T> {
    let mut request = agent.get(url).header("Accept", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    let mut response = request.call().map_err(|e| match e {
        ureq::Error::StatusCode(status) => IfGroupError::HttpStatus {
            path: path.to_string(),
            status,
        },
        other => IfGroupError::transport(path, other),
    })?;

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| IfGroupError::transport(path, e))?;

    let envelope: Envelope<T> = serde_json::from_str(&body)?;
    Ok(envelope.data)
}

#[async_trait]
impl GroupApi for HttpGroupApi {
    async fn list_all(&self, cancel: &CancellationToken) -> IfGroupResult<Vec<InterfaceGroup>> {
        let groups: Vec<InterfaceGroup> =
            self.get(InterfaceGroup::BASE_PATH.to_string(), cancel).await?;
        debug!("Fetched {} interface groups", groups.len());
        Ok(groups)
    }

    async fn get_by_uid(
        &self,
        uid: Uuid,
        cancel: &CancellationToken,
    ) -> IfGroupResult<InterfaceGroup> {
        match self.get(InterfaceGroup::path_for(&uid), cancel).await {
            Err(IfGroupError::HttpStatus { status: 404, .. }) => {
                Err(IfGroupError::GroupNotFound(uid.to_string()))
            }
            other => other,
        }
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
