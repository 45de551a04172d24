//! Command implementations for vaultpick

pub mod dispatch;
pub mod folders;
pub mod format;
pub mod init;
pub mod open;
pub mod orphan;
pub mod random;
pub mod status;
pub mod toggle;
