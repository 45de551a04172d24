//! Error macros for vaultpick

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::VaultError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::VaultError::UsageError($msg.to_string()))
    };
}

/// Macro for mapping IO errors with a target path
#[macro_export]
macro_rules! map_io_err {
    ($op:expr, $path:expr, $error:expr) => {
        $crate::error::VaultError::io_operation($op, $path.display(), $error)
    };
}
