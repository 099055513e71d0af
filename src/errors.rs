//! Unified application error type.
//! All modules (core, sheet, clipboard, cli) return AppError so every
//! failure surfaces at the command boundary as one readable message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Source loading
    // ---------------------------
    #[error("Failed to load source data: {0}")]
    DataLoad(String),

    #[error("Schema shape mismatch: expected {expected} columns, found {found}")]
    SchemaShape { expected: usize, found: usize },

    // ---------------------------
    // Clipboard
    // ---------------------------
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard read error: {0}")]
    ClipboardRead(String),

    #[error("Malformed clipboard data: line {line} has {found} fields, expected {expected}")]
    MalformedClipboardData {
        line: usize,
        expected: usize,
        found: usize,
    },

    // ---------------------------
    // Target spreadsheet
    // ---------------------------
    #[error("Failed to write target file: {0}")]
    TargetWrite(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
