//! Decoder for single enter/exit trace lines.
//!
//! The tracer writes one record per method activation boundary:
//!
//! ```text
//! >[0]org.dacapo.Harness.main
//! >prefix[1]org/dacapo/Harness:runBenchmark=(I)V
//! <prefix[1]org/dacapo/Harness:runBenchmark=(I)V
//! <[0]org.dacapo.Harness.main
//! ```
//!
//! The first character is the direction marker, the first `[n]` token
//! carries the stack depth and everything after its closing bracket is
//! the method descriptor.

use crate::utils::error::ParseError;

/// Whether a trace line opens or closes an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Enter,
    Exit,
}

impl Direction {
    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '>' => Some(Self::Enter),
            '<' => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One decoded trace record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub direction: Direction,
    pub depth: usize,
    /// Dot-separated qualified method name
    pub method: String,
}

/// Parse a single trace line
///
/// **Public** - used by the call tree builder
///
/// # Arguments
/// * `line` - Raw line without its terminator
/// * `line_number` - 1-based position in the input, used for diagnostics
///
/// # Errors
/// * `ParseError::MalformedTraceLine` - marker, bracket, depth or method missing
pub fn parse_trace_line(line: &str, line_number: usize) -> Result<TraceLine, ParseError> {
    let line = line.trim_end();
    let malformed = |reason: &'static str| ParseError::MalformedTraceLine {
        line_number,
        line: line.to_string(),
        reason,
    };

    let direction = line
        .chars()
        .next()
        .and_then(Direction::from_marker)
        .ok_or_else(|| malformed("missing '>' or '<' marker"))?;

    // Depth is always the first bracketed token; prefixes must not contain '['
    let open = line.find('[').ok_or_else(|| malformed("missing depth bracket"))?;
    let close = line[open..]
        .find(']')
        .map(|offset| open + offset)
        .ok_or_else(|| malformed("unclosed depth bracket"))?;

    let depth = line[open + 1..close]
        .trim()
        .parse::<usize>()
        .map_err(|_| malformed("depth is not a non-negative integer"))?;

    let method = normalize_method(&line[close + 1..]);
    if method.is_empty() {
        return Err(malformed("missing method descriptor"));
    }

    Ok(TraceLine {
        direction,
        depth,
        method,
    })
}

/// Normalize a `Class:method=descriptor` encoding to dotted form
///
/// Dotted descriptors pass through unchanged.
pub fn normalize_method(descriptor: &str) -> String {
    let descriptor = descriptor.trim();
    if !descriptor.contains(':') {
        return descriptor.to_string();
    }

    let name = match descriptor.find('=') {
        Some(eq) => &descriptor[..eq],
        None => descriptor,
    };
    name.replace(':', ".")
}
