//! Filter heap-event dumps down to application methods.
//!
//! Event dumps interleave object lines (containing `{`) with frame lines
//! of the form `[<id>, <method>, ...]`. Frame lines are kept only when the
//! method is known and outside the library namespaces; object lines are
//! always kept and anything else is dropped.

use crate::utils::config::NULL_METHOD;
use crate::utils::error::ParseError;
use log::debug;

/// True if `method` is an application method worth keeping
pub fn is_application_method(method: &str, library_prefixes: &[String]) -> bool {
    method != NULL_METHOD
        && !library_prefixes
            .iter()
            .any(|prefix| method.starts_with(prefix.as_str()))
}

/// Filter an event dump
///
/// **Public** - main entry point for the filter-events command
///
/// Kept lines retain their original text and are newline-terminated.
///
/// # Errors
/// * `ParseError::MalformedEventLine` - a frame line has no method field
pub fn filter_event_lines(text: &str, library_prefixes: &[String]) -> Result<String, ParseError> {
    let mut output = String::with_capacity(text.len());
    let mut dropped = 0usize;

    for (index, line) in text.lines().enumerate() {
        let keep = if line.contains('{') {
            true
        } else if line.starts_with('[') {
            let method = line
                .split(',')
                .nth(1)
                .map(str::trim)
                .ok_or_else(|| ParseError::MalformedEventLine {
                    line_number: index + 1,
                    line: line.to_string(),
                })?;
            is_application_method(method, library_prefixes)
        } else {
            false
        };

        if keep {
            output.push_str(line);
            output.push('\n');
        } else {
            dropped += 1;
        }
    }

    debug!("Filtered event dump: {} lines dropped", dropped);
    Ok(output)
}
