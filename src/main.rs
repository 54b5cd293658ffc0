//! ifgroup - interface group resolver
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use ifgroup::cli::{Cli, Commands};
use ifgroup::config::ConfigManager;
use ifgroup::error::IfGroupResult;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> IfGroupResult<()> {
    let cli = Cli::parse();

    let manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager.load().await?;

    init_logging(cli.verbose, &config.general.log_format);
    debug!("Loaded configuration from {}", manager.path().display());

    // Ctrl-C aborts in-flight API requests
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupted, cancelling");
            trigger.cancel();
        }
    });

    let groups_file = cli.groups_file.as_deref();

    match cli.command {
        Commands::MountIp(args) => {
            ifgroup::cli::commands::mount_ip(args, &config, groups_file, &cancel).await
        }
        Commands::List(args) => {
            ifgroup::cli::commands::list(args, &config, groups_file, &cancel).await
        }
        Commands::Show(args) => {
            ifgroup::cli::commands::show(args, &config, groups_file, &cancel).await
        }
        Commands::Config(args) => ifgroup::cli::commands::config(args, &config, &manager).await,
    }
}

/// Logs go to stderr so stdout carries only command output.
/// 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, log_format: &str) {
    let filter = match verbose {
        0 => EnvFilter::new("ifgroup=warn"),
        1 => EnvFilter::new("ifgroup=info"),
        _ => EnvFilter::new("ifgroup=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
