//! Error types and exit codes for vaultpick
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/vault error (missing vault, unknown folder, corrupt state file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/vault error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during vaultpick operations
#[derive(Error, Debug)]
pub enum VaultError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data/vault errors (exit code 3)
    #[error("vault not found (searched from {search_root:?})")]
    VaultNotFound { search_root: PathBuf },

    #[error("note not found: {path}")]
    NoteNotFound { path: String },

    #[error("folder not found in vault: {path}")]
    FolderNotFound { path: String },

    #[error("invalid state file {path:?}: {reason}")]
    InvalidState { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl VaultError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        VaultError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        VaultError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            VaultError::UsageError(_)
            | VaultError::InvalidValue { .. } => ExitCode::Usage,

            VaultError::VaultNotFound { .. }
            | VaultError::NoteNotFound { .. }
            | VaultError::FolderNotFound { .. }
            | VaultError::InvalidState { .. } => ExitCode::Data,

            VaultError::Io(_)
            | VaultError::Json(_)
            | VaultError::Toml(_)
            | VaultError::FailedOperationWithTarget { .. }
            | VaultError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            VaultError::UsageError(_) => "usage_error",
            VaultError::VaultNotFound { .. } => "vault_not_found",
            VaultError::NoteNotFound { .. } => "note_not_found",
            VaultError::FolderNotFound { .. } => "folder_not_found",
            VaultError::InvalidState { .. } => "invalid_state",
            VaultError::Io(_) => "io_error",
            VaultError::Json(_) => "json_error",
            VaultError::Toml(_) => "toml_error",
            VaultError::InvalidValue { .. } => "invalid_value",
            VaultError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            VaultError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for vaultpick operations
pub type Result<T> = std::result::Result<T, VaultError>;
