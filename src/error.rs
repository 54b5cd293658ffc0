//! Error types for ifgroup
//!
//! All modules use `IfGroupResult<T>` as their return type.

use crate::group::GroupType;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ifgroup operations
pub type IfGroupResult<T> = Result<T, IfGroupError>;

/// All errors that can occur in ifgroup
#[derive(Error, Debug)]
pub enum IfGroupError {
    // Transport errors
    #[error("Request to {context} failed: {reason}")]
    Transport { context: String, reason: String },

    #[error("Request to {path} returned HTTP {status}")]
    HttpStatus { path: String, status: u16 },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("API endpoint not configured")]
    ApiNotConfigured,

    // Resolution errors
    #[error("No {kind} interface groups found")]
    NoGroupsFound { kind: GroupType },

    #[error("Interface group not found: {0}")]
    GroupNotFound(String),

    #[error("No IP addresses found for interface group {0}")]
    NoAddresses(String),

    // Selection errors
    #[error("Cannot select an address from an empty address set")]
    EmptyAddressSet,

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IfGroupError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a transport error with context
    pub fn transport(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the error means the requested group (or any group) does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoGroupsFound { .. } | Self::GroupNotFound(_) | Self::NoAddresses(_)
        )
    }

    /// Check if error is retryable
    ///
    /// Nothing in this crate retries; callers use this to decide for themselves.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoGroupsFound { .. } => {
                Some("Create an interface group on the storage cluster first")
            }
            Self::GroupNotFound(_) => Some("Run: ifgroup list --type nfs"),
            Self::NoAddresses(_) => Some("Assign floating IPs to the interface group"),
            Self::HttpStatus { status: 401, .. } | Self::HttpStatus { status: 403, .. } => {
                Some("Check api.token in the configuration")
            }
            Self::Transport { .. } => Some("Check api.endpoint in the configuration"),
            Self::ApiNotConfigured => Some("Run: ifgroup config init, then set api.endpoint"),
            _ => None,
        }
    }
}
