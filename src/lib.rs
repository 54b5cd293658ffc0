//! ifgroup - storage interface group resolution
//!
//! Resolves the NFS interface groups a storage cluster exposes and picks one
//! address per client host, stable for that host and spread across hosts.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod group;
pub mod mount;
pub mod resolver;
pub mod selector;

#[cfg(test)]
mod fixtures;

pub use error::{IfGroupError, IfGroupResult};
pub use group::{GroupType, InterfaceGroup};
pub use mount::MountIpResolver;
pub use resolver::GroupResolver;
