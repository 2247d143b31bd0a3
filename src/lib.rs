pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::{Session, SessionSettings, TerminalPrompter};
use crate::core::config::AppConfig;
use crate::core::{History, Prompter};
use anyhow::Result;
use tracing::{debug, info};

/// Runs an interactive conversion session on the terminal.
pub async fn run(config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut prompter: TerminalPrompter = TerminalPrompter::new();
    run_with_prompter(&config, &mut prompter).await?;
    Ok(())
}

/// Runs a session against the configured provider, returning the history it built.
pub async fn run_with_prompter(
    config: &AppConfig,
    prompter: &mut dyn Prompter,
) -> Result<History> {
    let converter = providers::FrankfurterProvider::new(config.frankfurter_base_url())?;

    let mut session = Session::new(&converter, prompter, SessionSettings::from(config));
    session.run().await?;
    Ok(session.into_history())
}
