//! CLI command implementations

pub mod config;
pub mod list;
pub mod mount_ip;
pub mod show;

pub use config::execute as config;
pub use list::execute as list;
pub use mount_ip::execute as mount_ip;
pub use show::execute as show;
