use crate::cli::parser::{Cli, Commands};
use crate::clipboard;
use crate::config::Config;
use crate::core::normalize::normalize;
use crate::core::transfer::serialize_to_clipboard;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `copy` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Copy { source } = &cli.command {
        let normalized = normalize(Path::new(source), cfg.preview_rows)?;

        let mut clip = clipboard::from_cli(cli.clipboard_file.as_deref().map(Path::new))?;
        let preview =
            serialize_to_clipboard(&normalized.table, clip.as_mut(), cfg.preview_rows)?;

        println!("Copied data preview (no header):\n{preview}");
        info(normalized.status);
        success("Data copied to clipboard!");
    }
    Ok(())
}
