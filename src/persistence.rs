// File: src/persistence.rs
use crate::core::group::TranslationGroup;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads a converse file: a JSON object with optional `phrases`, `words` and
/// `characters` arrays of `[a, b]` string pairs.
pub fn load_group_json(path: &Path) -> Result<TranslationGroup> {
    debug!(path = %path.display(), "loading converse file");
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let group = serde_json::from_reader(reader)?;
    Ok(group)
}

pub fn parse_group_json(json: &str) -> Result<TranslationGroup> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_input(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading input file");
    Ok(fs::read_to_string(path)?)
}

/// Writes `text` to `path` through a temp file in the same directory, so the
/// destination is either the old content or the complete new one.
pub fn save_output(path: &Path, text: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), bytes = text.len(), "output written");
    Ok(())
}
