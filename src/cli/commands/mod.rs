pub mod config;
pub mod copy;
pub mod init;
pub mod paste;
pub mod preview;
