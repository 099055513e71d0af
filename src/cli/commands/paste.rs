use crate::cli::parser::{Cli, Commands};
use crate::clipboard;
use crate::config::Config;
use crate::core::transfer::merge_from_clipboard;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `paste` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Paste { target } = &cli.command {
        let mut clip = clipboard::from_cli(cli.clipboard_file.as_deref().map(Path::new))?;
        let outcome = merge_from_clipboard(Path::new(target), clip.as_mut(), cfg.preview_rows)?;

        println!("Pasted data preview (no header):\n{}", outcome.preview);
        success(outcome.status);
    }
    Ok(())
}
