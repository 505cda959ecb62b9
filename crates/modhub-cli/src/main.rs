//! Modding Hub CLI - command-line front end for the TW1 Modding Hub.
//!
//! Lists and launches modding tools, shows guides and the file-format
//! glossary, and edits the hub's configuration record.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use commands::Command;
use modhub_core::HubError;

#[derive(Parser, Debug)]
#[command(name = "modhub")]
#[command(about = "Tool launcher and guide browser for Two Worlds modding")]
#[command(version)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Install root (defaults to the directory of this executable)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for output and --json.
    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut hub = match args.root {
        Some(root) => modhub_core::ModdingHub::open(root)?,
        None => modhub_core::ModdingHub::from_executable()?,
    };
    debug!("Install root: {}", hub.install_root().display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = commands::run(&mut hub, args.command, args.json, &mut out);
    out.flush()?;

    if let Err(err) = result {
        // User errors: one line on stderr, exit code 2.
        if let Some(hub_err) = err.downcast_ref::<HubError>() {
            if hub_err.is_user_error() {
                eprintln!("{hub_err}");
                std::process::exit(2);
            }
        }
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["modhub", "tools", "lan", "--json", "--root", "/tmp"])
            .unwrap();
        assert!(args.json);
        assert_eq!(args.root, Some(PathBuf::from("/tmp")));
        assert!(matches!(args.command, Command::Tools { query: Some(ref q) } if q == "lan"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["modhub"]).is_err());
    }
}
