//! YAML frontmatter handling

use serde_yaml::Value;

/// Split a note into its frontmatter block (without fences) and body.
///
/// Frontmatter must open on the first line with `---` and close with a line
/// containing only `---` or `...`. Anything else is all body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let rest = match content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return (None, content),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == "---" || trimmed == "..." {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, content)
}

/// Collect every string value in a YAML document, depth first
pub fn string_values(yaml: &str) -> Result<Vec<String>, serde_yaml::Error> {
    let value: Value = serde_yaml::from_str(yaml)?;
    let mut out = Vec::new();
    collect_strings(&value, &mut out);
    Ok(out)
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Sequence(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        Value::Mapping(map) => {
            for (_, item) in map {
                collect_strings(item, out);
            }
        }
        _ => {}
    }
}
