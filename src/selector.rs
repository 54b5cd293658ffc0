//! Deterministic per-host address selection
//!
//! Every host hashes its own identifier onto the group's address list, so
//! hosts spread across the addresses without sharing any state, and a given
//! host always lands on the same address. Distribution is only as even as the
//! hash makes it; there is no load feedback.

use crate::error::{IfGroupError, IfGroupResult};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Host identifier used when the hostname cannot be determined
pub const FALLBACK_HOST_IDENTIFIER: &str = "localhost";

/// Stable 64-bit hash of a host identifier
///
/// SHA-256 of the identifier bytes, first 8 digest bytes read big-endian.
/// Identical on every platform and across process restarts.
pub fn host_hash(host_identifier: &str) -> u64 {
    let digest = Sha256::digest(host_identifier.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Index into a list of `len` addresses for the given host
pub fn host_index(host_identifier: &str, len: usize) -> IfGroupResult<usize> {
    if len == 0 {
        return Err(IfGroupError::EmptyAddressSet);
    }
    Ok((host_hash(host_identifier) % len as u64) as usize)
}

/// Pick one address for the given host
pub fn select_address(addresses: &[String], host_identifier: &str) -> IfGroupResult<String> {
    let index = host_index(host_identifier, addresses.len())?;
    debug!(
        "Host {} maps to address {} of {}",
        host_identifier,
        index,
        addresses.len()
    );
    Ok(addresses[index].clone())
}

/// Identifier of the local host: its network hostname, or `"localhost"`
pub fn local_host_identifier() -> String {
    match hostname() {
        Some(name) if !name.is_empty() => name,
        Some(_) => {
            debug!("Hostname is empty, using {}", FALLBACK_HOST_IDENTIFIER);
            FALLBACK_HOST_IDENTIFIER.to_string()
        }
        None => {
            warn!(
                "Could not determine hostname, using {}",
                FALLBACK_HOST_IDENTIFIER
            );
            FALLBACK_HOST_IDENTIFIER.to_string()
        }
    }
}

#[cfg(unix)]
fn hostname() -> Option<String> {
    let mut buf = [0u8; 256];
    // gethostname writes at most buf.len() bytes and NUL-terminates on success.
    let ret = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if ret != 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..end]).trim().to_string())
}

#[cfg(not(unix))]
fn hostname() -> Option<String> {
    std::env::var("COMPUTERNAME").ok()
}
