use clap::{Parser, Subcommand};

/// Command-line interface definition for batchsheet
/// CLI application to move stock rows between spreadsheets via the clipboard
#[derive(Parser)]
#[command(
    name = "batchsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize stock tables, stamp a monthly batch code, and append them to a target spreadsheet via the clipboard",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Use a file-backed clipboard instead of the system clipboard
    #[arg(global = true, long = "clipboard-file", hide = true)]
    pub clipboard_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the first rows of a source file without copying anything
    Preview {
        /// Source file (CSV or spreadsheet workbook)
        source: String,

        /// Number of rows to show (defaults to the configured preview size)
        #[arg(long, value_name = "N")]
        rows: Option<usize>,
    },

    /// Normalize a source file and copy its rows to the clipboard
    ///
    /// The source is coerced onto the canonical 8-column schema, every
    /// BatchDate is overwritten with the current month code, and the rows
    /// land on the clipboard as headerless tab-separated text.
    Copy {
        /// Source file (CSV or spreadsheet workbook)
        source: String,
    },

    /// Append clipboard rows to a target spreadsheet
    ///
    /// Reads tab-separated rows from the clipboard and rewrites the target
    /// file with the existing rows followed by the new ones. A missing or
    /// unreadable target starts out empty.
    Paste {
        /// Target spreadsheet file
        target: String,
    },
}
