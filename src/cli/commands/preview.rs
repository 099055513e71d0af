use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::CANONICAL_COLUMNS;
use crate::sheet;
use crate::ui::messages::info;
use crate::utils::preview::render_head;
use std::path::Path;

/// Handle the `preview` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { source, rows } = cmd {
        let table = sheet::read_source(Path::new(source))?;
        let n = rows.unwrap_or(cfg.preview_rows);

        println!("Columns: {}\n", CANONICAL_COLUMNS.join(", "));
        println!("{}", render_head(&table, n));
        info(format!("{} rows in '{source}'", table.len()));
    }
    Ok(())
}
