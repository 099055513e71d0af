use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init(cli.config.as_deref())?;
    success(format!("Config file created: {}", path.display()));
    Ok(())
}
