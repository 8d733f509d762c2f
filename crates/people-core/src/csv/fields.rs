//! Field tokenizing and escaping for one logical CSV line.
//!
//! The quoting convention is the one Google and Outlook both emit: a value
//! containing a comma, a quote or a newline is wrapped in double quotes,
//! and a literal quote inside it is doubled.

/// Split one logical line into fields.
///
/// `""` inside a quoted span yields one literal quote; any other `"`
/// toggles the span and is dropped. An unquoted `,` ends the field. Each
/// field is trimmed of surrounding whitespace, which also removes the `\r`
/// left behind by CRLF line endings. An unterminated quote is flushed
/// as-is at end of line.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

fn needs_quoting(value: &str) -> bool {
    value.contains([',', '"', '\n', '\r'])
}

/// Quote `value` if it contains a comma, quote or newline, doubling any
/// quotes inside. Other values are returned unchanged. Matches what the
/// export writer emits for a single field.
pub fn escape_field(value: &str) -> String {
    if needs_quoting(value) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Exact inverse of [`escape_field`]: strips one enclosing quote pair and
/// un-doubles inner quotes. Unquoted input is returned unchanged.
pub fn unescape_field(field: &str) -> String {
    match field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.to_string(),
    }
}
