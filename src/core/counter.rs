// File: src/core/counter.rs
use crate::core::tokenizer::tokenize;
use crate::core::types::FrequencyTable;
use crate::error::{Result, StatsError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Builds the frequency table for the file at `path`.
pub fn count_words(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|e| StatsError::file_access(path, e))?;
    count_lines(BufReader::new(file), path)
}

/// Folds every line of `reader` into a fresh table, one line at a time.
/// `origin` only labels errors.
pub fn count_lines<R: BufRead>(mut reader: R, origin: &Path) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| StatsError::file_access(origin, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = std::str::from_utf8(&buf).map_err(|_| StatsError::Encoding {
            path: origin.to_path_buf(),
            line: line_no,
        })?;
        for word in tokenize(line) {
            table.record(word);
        }
    }

    tracing::debug!(
        source = %origin.display(),
        lines = line_no,
        tokens = table.total(),
        distinct = table.len(),
        "counted words"
    );
    Ok(table)
}
