//! Interface group records as exposed by the storage backend
//!
//! An interface group is a named set of floating IPs serving one protocol.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Protocol served by an interface group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupType {
    #[serde(rename = "NFS")]
    Nfs,
    #[serde(rename = "SMB")]
    Smb,
}

impl GroupType {
    /// Wire name of the group type
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Nfs => "NFS",
            GroupType::Smb => "SMB",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One interface group and its addresses
///
/// Treated as immutable once fetched. Resolution hands out owned snapshots;
/// nothing updates a group in place after it has been cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceGroup {
    /// Subnet mask of the group's addresses
    #[serde(default)]
    pub subnet_mask: String,

    /// Human-readable name, unique within a type by convention
    pub name: String,

    /// Unique identifier used for direct lookups
    pub uid: Uuid,

    /// Floating IPs of the group
    #[serde(default)]
    pub ips: Vec<String>,

    /// Whether the group may manage supplementary GIDs
    #[serde(default)]
    pub allow_manage_gids: bool,

    /// Protocol served by the group
    #[serde(rename = "type")]
    pub group_type: GroupType,

    /// Default gateway of the group's subnet
    #[serde(default)]
    pub gateway: String,

    /// Backend-reported status
    #[serde(default)]
    pub status: String,
}

impl InterfaceGroup {
    /// Collection path of interface groups on the backend API
    pub const BASE_PATH: &'static str = "interfaceGroups";

    /// Fields that identify a group; only `status` and `ips` may change between fetches
    pub const IMMUTABLE_FIELDS: [&'static str; 4] = ["name", "gateway", "subnet_mask", "type"];

    /// Object type name used in diagnostics
    pub fn object_type(&self) -> &'static str {
        "interfaceGroup"
    }

    /// API path of this group
    pub fn api_path(&self) -> String {
        Self::path_for(&self.uid)
    }

    /// API path of the group with the given uid
    pub fn path_for(uid: &Uuid) -> String {
        format!("{}/{}", Self::BASE_PATH, uid)
    }

    pub fn group_type(&self) -> GroupType {
        self.group_type
    }

    pub fn is_nfs(&self) -> bool {
        self.group_type == GroupType::Nfs
    }

    pub fn is_smb(&self) -> bool {
        self.group_type == GroupType::Smb
    }

    /// Whether the group has at least one address to mount from
    pub fn has_addresses(&self) -> bool {
        !self.ips.is_empty()
    }

    /// Whether `other` is a later fetch of the same logical group
    ///
    /// Compares only the identity-defining fields listed in `IMMUTABLE_FIELDS`.
    pub fn same_identity(&self, other: &InterfaceGroup) -> bool {
        self.name == other.name
            && self.gateway == other.gateway
            && self.subnet_mask == other.subnet_mask
            && self.group_type == other.group_type
    }

    /// Sort the addresses ascending so index-based selection is reproducible
    pub fn normalize(&mut self) {
        self.ips.sort();
    }
}

impl fmt::Display for InterfaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InterfaceGroup {} uid: {} type: {} status: {}",
            self.name, self.uid, self.group_type, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InterfaceGroup {
        InterfaceGroup {
            subnet_mask: "255.255.255.0".to_string(),
            name: "nfs-ig".to_string(),
            uid: Uuid::nil(),
            ips: vec!["10.0.0.2".to_string(), "10.0.0.1".to_string()],
            allow_manage_gids: true,
            group_type: GroupType::Nfs,
            gateway: "10.0.0.254".to_string(),
            status: "OK".to_string(),
        }
    }

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "subnet_mask": "255.255.0.0",
            "name": "smb-ig",
            "uid": "4e3b1d5a-59a2-4a8e-9f57-4f4f7b1c2d3e",
            "ips": ["192.168.1.10"],
            "allow_manage_gids": false,
            "type": "SMB",
            "gateway": "192.168.0.1",
            "status": "OK"
        }"#;
        let group: InterfaceGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "smb-ig");
        assert!(group.is_smb());
        assert!(!group.is_nfs());
        assert_eq!(group.ips, vec!["192.168.1.10"]);
        assert_eq!(
            group.uid.to_string(),
            "4e3b1d5a-59a2-4a8e-9f57-4f4f7b1c2d3e"
        );
    }

    #[test]
    fn missing_metadata_defaults() {
        let json = r#"{
            "name": "bare",
            "uid": "00000000-0000-0000-0000-000000000000",
            "type": "NFS"
        }"#;
        let group: InterfaceGroup = serde_json::from_str(json).unwrap();
        assert!(group.is_nfs());
        assert!(!group.has_addresses());
        assert!(group.status.is_empty());
    }

    #[test]
    fn rejects_unknown_type() {
        let json = r#"{"name": "x", "uid": "00000000-0000-0000-0000-000000000000", "type": "S3"}"#;
        assert!(serde_json::from_str::<InterfaceGroup>(json).is_err());
    }

    #[test]
    fn serializes_type_field() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains(r#""type":"NFS""#));
    }

    #[test]
    fn display_format() {
        let text = sample().to_string();
        assert_eq!(
            text,
            "InterfaceGroup nfs-ig uid: 00000000-0000-0000-0000-000000000000 type: NFS status: OK"
        );
    }

    #[test]
    fn api_path_uses_uid() {
        assert_eq!(
            sample().api_path(),
            "interfaceGroups/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(sample().object_type(), "interfaceGroup");
    }

    #[test]
    fn immutable_fields_listed() {
        assert_eq!(
            InterfaceGroup::IMMUTABLE_FIELDS,
            ["name", "gateway", "subnet_mask", "type"]
        );
    }

    #[test]
    fn identity_ignores_status_and_ips() {
        let a = sample();
        let mut b = sample();
        b.status = "DEGRADED".to_string();
        b.ips.push("10.0.0.3".to_string());
        assert!(a.same_identity(&b));
        assert_ne!(a, b);

        b.gateway = "10.0.0.1".to_string();
        assert!(!a.same_identity(&b));
    }

    #[test]
    fn normalize_sorts_addresses() {
        let mut group = sample();
        group.ips = vec![
            "10.0.0.3".to_string(),
            "10.0.0.1".to_string(),
            "10.0.0.2".to_string(),
        ];
        group.normalize();
        assert_eq!(group.ips, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
    }
}
