use std::io::Write;

use clap::Subcommand;

use rd_core::app_state::{AppStateAction, Theme};

use crate::bootstrap::AppRuntime;

#[derive(Debug, Subcommand)]
pub enum StateCommand {
    /// Print the persisted state as JSON
    Show,
    /// Rows per page for list views
    SetPageSize { page_size: usize },
    /// Collapse or expand the sidebar
    ToggleSidebar,
    /// light, dark or system
    SetTheme {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

fn parse_theme(raw: &str) -> Result<Theme, String> {
    match raw.to_ascii_lowercase().as_str() {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        "system" => Ok(Theme::System),
        other => Err(format!("unknown theme `{other}`")),
    }
}

pub async fn run<W: Write>(
    runtime: &AppRuntime,
    command: StateCommand,
    out: &mut W,
) -> anyhow::Result<()> {
    let action = match command {
        StateCommand::Show => {
            let state = runtime.store.current();
            writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
            return Ok(());
        }
        StateCommand::SetPageSize { page_size } => AppStateAction::SetListPageSize { page_size },
        StateCommand::ToggleSidebar => AppStateAction::ToggleSidebar,
        StateCommand::SetTheme { theme } => AppStateAction::SetTheme { theme },
    };

    let state = runtime.store.dispatch(action).await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    Ok(())
}
