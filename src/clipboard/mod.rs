//! Clipboard access.
//!
//! The clipboard is a single-slot resource shared with every other process
//! on the machine; nothing stops another program from replacing its content
//! between `copy` and `paste`, and that situation is not detectable. The
//! assumed workflow is single-user, single-session.
//!
//! It is always passed explicitly as a `Clipboard` trait object rather than
//! touched as an ambient global, so tests can substitute a fake.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

pub trait Clipboard {
    fn read_text(&mut self) -> AppResult<String>;
    fn write_text(&mut self, text: &str) -> AppResult<()>;
}

/// Platform clipboard backed by arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> AppResult<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> AppResult<String> {
        self.inner
            .get_text()
            .map_err(|e| AppError::ClipboardRead(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> AppResult<()> {
        self.inner
            .set_text(text)
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// File-backed clipboard, selected with the hidden `--clipboard-file` flag.
/// Used by the integration tests so they never touch the real clipboard.
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Clipboard for FileClipboard {
    fn read_text(&mut self) -> AppResult<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| AppError::ClipboardRead(format!("'{}': {e}", self.path.display())))
    }

    fn write_text(&mut self, text: &str) -> AppResult<()> {
        fs::write(&self.path, text).map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Pick the clipboard backend from the CLI globals.
pub fn from_cli(clipboard_file: Option<&Path>) -> AppResult<Box<dyn Clipboard>> {
    match clipboard_file {
        Some(path) => Ok(Box::new(FileClipboard::new(path))),
        None => Ok(Box::new(SystemClipboard::new()?)),
    }
}

/// In-memory clipboard for unit tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemClipboard {
    pub text: Option<String>,
}

#[cfg(test)]
impl Clipboard for MemClipboard {
    fn read_text(&mut self) -> AppResult<String> {
        self.text
            .clone()
            .ok_or_else(|| AppError::ClipboardRead("clipboard is empty".to_string()))
    }

    fn write_text(&mut self, text: &str) -> AppResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}
