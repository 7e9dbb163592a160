// src/export/csv.rs

use crate::models::Record;
use serde_json::Value;
use std::collections::HashSet;

/// Fields never exported for customers: HAL links and UI-only columns.
pub const DEFAULT_EXCLUDE: [&str; 3] = ["_links", "links", "actions"];

pub fn exclusion_set<I, S>(fields: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields.into_iter().map(|f| f.as_ref().to_string()).collect()
}

/// Ordered union of the record keys (first-seen order), minus `exclude`.
pub fn columns<'r>(records: &'r [Record], exclude: &HashSet<String>) -> Vec<&'r str> {
    let mut out: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !exclude.contains(key) && !out.contains(&key.as_str()) {
                out.push(key);
            }
        }
    }
    out
}

/// Serialize records into one CSV document.
///
/// - header: column names joined by `,`, unquoted
/// - text values are quoted, inner `"` doubled; numbers and booleans are
///   written as is; a missing key or `null` gives an empty field
/// - rows joined by `\n`, no trailing newline
///
/// No records → `""`.
pub fn serialize(records: &[Record], exclude: &HashSet<String>) -> String {
    if records.is_empty() {
        return String::new();
    }

    let cols = columns(records, exclude);

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(cols.join(","));

    for record in records {
        let row: Vec<String> = cols.iter().map(|c| field(record.get(*c))).collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => quote(s),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        // Nested values go out as their JSON text.
        Some(nested) => quote(&nested.to_string()),
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
