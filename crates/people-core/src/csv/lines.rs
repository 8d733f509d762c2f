//! Quote-aware line splitting.
//!
//! Splits raw CSV text into logical lines. A newline inside a quoted span
//! belongs to the value (multi-line addresses and notes), so it does not
//! end the record.

/// Split `text` into logical lines.
///
/// The inside-quotes flag flips on every `"`. An escaped quote (`""`) flips
/// it twice, so it needs no special handling here. Only an unquoted `\n`
/// ends a line. A single empty line left by a trailing newline is dropped;
/// every other line, blank or not, is returned in order.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '\n' if !in_quotes => {
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
