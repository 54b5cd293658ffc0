//! Interface group builders shared by unit tests

use crate::group::{GroupType, InterfaceGroup};
use uuid::Uuid;

pub(crate) fn group(name: &str, group_type: GroupType, ips: &[&str]) -> InterfaceGroup {
    InterfaceGroup {
        subnet_mask: "255.255.255.0".to_string(),
        name: name.to_string(),
        uid: Uuid::new_v4(),
        ips: ips.iter().map(|ip| ip.to_string()).collect(),
        allow_manage_gids: false,
        group_type,
        gateway: "10.0.0.254".to_string(),
        status: "OK".to_string(),
    }
}

pub(crate) fn nfs_group(name: &str, ips: &[&str]) -> InterfaceGroup {
    group(name, GroupType::Nfs, ips)
}

pub(crate) fn smb_group(name: &str, ips: &[&str]) -> InterfaceGroup {
    group(name, GroupType::Smb, ips)
}

pub(crate) fn group_with_uid(name: &str, uid: Uuid) -> InterfaceGroup {
    InterfaceGroup {
        uid,
        ..nfs_group(name, &["10.0.0.1"])
    }
}
