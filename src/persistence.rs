// File: src/persistence.rs
use crate::core::types::{FrequencyTable, WordCount};
use crate::error::{Result, StatsError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `word:count` lines sorted by word, replacing `path` only once
/// every line has been written.
pub fn save_to_disk(table: &FrequencyTable, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let access = |e: std::io::Error| StatsError::file_access(path, e);

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(access)?;
    let mut writer = BufWriter::new(&temp_file);
    write_records(table, &mut writer).map_err(access)?;
    writer.flush().map_err(access)?;
    drop(writer);

    temp_file.persist(path).map_err(|e| access(e.error))?;
    tracing::info!(path = %path.display(), records = table.len(), "exported word counts");
    Ok(())
}

pub fn write_records<W: Write>(table: &FrequencyTable, out: &mut W) -> std::io::Result<()> {
    for (word, count) in table.alphabetical() {
        writeln!(out, "{word}:{count}")?;
    }
    Ok(())
}

/// Reads an export back. The count follows the last `:` since words may
/// contain colons themselves.
pub fn load_from_disk(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|e| StatsError::file_access(path, e))?;
    read_records(BufReader::new(file), path)
}

pub fn read_records<R: BufRead>(reader: R, origin: &Path) -> Result<FrequencyTable> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| StatsError::file_access(origin, e))?;
        let malformed = || StatsError::MalformedRecord { line: idx + 1, content: line.clone() };
        let (word, count) = line.rsplit_once(':').ok_or_else(malformed)?;
        let count: WordCount = count.parse().map_err(|_| malformed())?;
        entries.push((word.to_string(), count));
    }
    Ok(entries.into_iter().collect())
}
