//! CLI argument definitions using clap derive

use crate::group::GroupType;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

/// ifgroup - storage interface group resolver
///
/// Resolves NFS interface groups and picks a stable per-host mount address.
#[derive(Parser, Debug)]
#[command(name = "ifgroup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "IFGROUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read interface groups from a JSON file instead of the API
    #[arg(long, global = true, env = "IFGROUP_GROUPS_FILE")]
    pub groups_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the address this host should mount from
    MountIp(MountIpArgs),

    /// List interface groups
    List(ListArgs),

    /// Show one interface group by uid
    Show(ShowArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the mount-ip command
#[derive(Parser, Debug)]
pub struct MountIpArgs {
    /// NFS interface group name (defaults to mount.group, then the first NFS group)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Host identifier to hash instead of the hostname
    #[arg(long)]
    pub host: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list groups of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub group_type: Option<GroupTypeArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Interface group uid
    pub uid: Uuid,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Interface group type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupTypeArg {
    Nfs,
    Smb,
}

impl From<GroupTypeArg> for GroupType {
    fn from(arg: GroupTypeArg) -> Self {
        match arg {
            GroupTypeArg::Nfs => GroupType::Nfs,
            GroupTypeArg::Smb => GroupType::Smb,
        }
    }
}

/// Output format for listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
    /// Plain text (names only)
    Plain,
}
