//! Backend factory
//!
//! Picks the interface group backend from configuration.

use super::{GroupApi, HttpGroupApi, StaticGroupApi};
use crate::config::Config;
use crate::error::IfGroupResult;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Create the interface group backend
///
/// # Arguments
/// * `config` - The application configuration
/// * `listing` - Exported JSON listing to serve instead of the REST API
///
/// # Returns
/// * `Ok(Arc<dyn GroupApi>)` - A shared backend implementation
/// * `Err` - If the listing cannot be read or no endpoint is configured
pub async fn create_api(
    config: &Config,
    listing: Option<&Path>,
) -> IfGroupResult<Arc<dyn GroupApi>> {
    let api: Arc<dyn GroupApi> = match listing {
        Some(path) => Arc::new(StaticGroupApi::from_file(path).await?),
        None => Arc::new(HttpGroupApi::new(&config.api)?),
    };
    debug!("Using {} interface group backend", api.backend_name());
    Ok(api)
}
