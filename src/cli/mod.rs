//! Command-line front end.

mod browse;
mod nearby;
mod parse_date;
mod state;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::bootstrap::AppRuntime;

pub use browse::BrowseArgs;
pub use nearby::NearbyArgs;
pub use state::StateCommand;

#[derive(Debug, Parser)]
#[command(name = "referral-desk", version, about = "Browse and manage referral sources")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level logging regardless of build profile
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Page through referral sources the way the dashboard list does
    Browse(BrowseArgs),
    /// Offices within a radius of a point
    Nearby(NearbyArgs),
    /// Show or change the persisted app state
    #[command(subcommand)]
    State(StateCommand),
    /// Normalise a free-form date
    ParseDate {
        text: String,
    },
}

pub async fn run<W: Write>(
    command: Command,
    runtime: &AppRuntime,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Browse(args) => browse::run(runtime, args, out).await,
        Command::Nearby(args) => nearby::run(runtime, args, out).await,
        Command::State(cmd) => state::run(runtime, cmd, out).await,
        Command::ParseDate { text } => parse_date::run(runtime, &text, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_browse_with_global_config() {
        let cli = Cli::try_parse_from([
            "referral-desk",
            "browse",
            "--page-size",
            "5",
            "--config",
            "/tmp/rd.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/rd.toml")));
        match cli.command {
            Command::Browse(args) => {
                assert_eq!(args.page_size, Some(5));
                assert_eq!(args.pages, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_state_subcommands() {
        let cli = Cli::try_parse_from(["referral-desk", "state", "set-page-size", "40"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::State(StateCommand::SetPageSize { page_size: 40 })
        ));
    }

    #[test]
    fn rejects_zero_page_size_flag() {
        assert!(Cli::try_parse_from(["referral-desk", "browse", "--page-size", "0"]).is_err());
    }
}
