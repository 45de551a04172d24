//! Shared output formatting helpers for commands

pub mod dispatch;
pub mod inspection;
pub mod status;

pub use dispatch::output_by_format_result;
pub use inspection::{print_inspection, InspectionLabels};
pub use status::{note_json, print_json_status, print_records_header, print_records_note};
