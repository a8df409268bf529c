// src/persistence.rs
use crate::config::ConverterConfig;
use crate::core::types::VerbRecord;
use crate::error::{Result, SubjunctiveError};
use log::warn;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a JSON array of records. Elements that are not objects are ignored.
pub fn load_records(path: &Path) -> Result<Vec<VerbRecord>> {
    let file = File::open(path).map_err(|e| SubjunctiveError::io(path, e))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| SubjunctiveError::json(path, e))?;

    let Value::Array(items) = value else {
        return Err(SubjunctiveError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!("{}: element {} is not an object, ignoring it", path.display(), i);
            continue;
        }
        // All fields are optional and lenient, any object fits
        let record: VerbRecord =
            serde_json::from_value(item).map_err(|e| SubjunctiveError::json(path, e))?;
        records.push(record);
    }
    Ok(records)
}

/// Writes records as pretty-printed JSON, replacing `path` atomically.
pub fn save_records(records: &[VerbRecord], path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| SubjunctiveError::io(parent_dir, e))?;

    let temp_file =
        NamedTempFile::new_in(parent_dir).map_err(|e| SubjunctiveError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| SubjunctiveError::json(path, e))?;
        writer.flush().map_err(|e| SubjunctiveError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| SubjunctiveError::io(path, e.error))?;
    Ok(())
}

/// Loads the optional JSON config file; absent fields keep their defaults.
pub fn load_config(path: &Path) -> Result<ConverterConfig> {
    let file = File::open(path).map_err(|e| SubjunctiveError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| SubjunctiveError::json(path, e))
}
