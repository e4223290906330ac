//! Plain-text writers: one entry per line.

use super::json::{ensure_parent_dir, validate_output_path};
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write every item on its own line
///
/// **Public** - used for filtered dumps and edge lists
pub fn write_lines<I, T>(lines: I, output_path: impl AsRef<Path>) -> Result<usize, OutputError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let output_path = output_path.as_ref();

    validate_output_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    let mut count = 0usize;
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(OutputError::WriteFailed)?;
        count += 1;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Wrote {} lines to {}", count, output_path.display());
    Ok(count)
}
