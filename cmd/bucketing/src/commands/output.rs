//! Rendering command results.

use serde::Serialize;

/// Serializes `value` as pretty JSON or YAML, newline-terminated.
pub fn render<T: Serialize>(value: &T, json: bool) -> anyhow::Result<String> {
    let mut text = if json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_yaml::to_string(value)?
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Writes rendered output to `path`, or stdout when unset.
pub fn emit<T: Serialize>(value: &T, path: Option<&str>, json: bool) -> anyhow::Result<()> {
    let text = render(value, json)?;
    match path {
        Some(p) => std::fs::write(p, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
