//! Format dispatch macros for command output
//!
//! `output_by_format_result!` runs the branch for the active format. The
//! JSON branch returns a `Result`; the human and records branches print and
//! yield `()`.
//!
/// ```rust,ignore
/// use crate::commands::format::output_by_format_result;
///
/// output_by_format_result!(cli.format,
///     json => {
///         println!("{}", serde_json::to_string_pretty(&data)?);
///         Ok::<(), VaultError>(())
///     },
///     human => { println!("Done"); },
///     records => { println!("H vaultpick=1 records=1 mode=done"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}

pub use crate::output_by_format_result;
