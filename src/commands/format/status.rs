//! Status message formatting helpers

use serde_json::json;
use vaultpick_core::error::Result;
use vaultpick_core::format::records_value;
use vaultpick_core::vault::Note;

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("found", None, &[("note", note_json(&note))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(msg) = message {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("message".to_string(), json!(msg));
        }
    }

    for (key, value) in extra_fields {
        if let Some(obj) = output.as_object_mut() {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// JSON object describing a note
pub fn note_json(note: &Note) -> serde_json::Value {
    json!({
        "path": note.path,
        "basename": note.basename,
    })
}

/// Print a Records header line
///
/// # Examples
/// ```ignore
/// print_records_header("random", &[("vault", "/notes"), ("status", "found")]);
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    let mut parts = vec![
        "H vaultpick=1 records=1".to_string(),
        format!("mode={}", mode),
    ];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, records_value(value)));
    }

    println!("{}", parts.join(" "));
}

/// Print a Records note line
pub fn print_records_note(note: &Note) {
    println!(
        "N path={} basename={}",
        records_value(&note.path),
        records_value(&note.basename)
    );
}
