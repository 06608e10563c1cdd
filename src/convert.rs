use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::ConvertError;
use crate::normalize::normalize;
use crate::transcribe::transcribe;

/// Convert a JSON release-notes document into one text file per record.
///
/// Records are processed strictly in normalization order; when two titles
/// derive the same file name the later record overwrites the earlier file.
/// Returns a map from derived file name to the path written, so skips and
/// collisions reduce the map's size below the record count.
pub fn convert_json_to_text(
    input: &Path,
    output_dir: &Path,
) -> Result<HashMap<String, PathBuf>, ConvertError> {
    let raw = fs::read_to_string(input).map_err(|source| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let json: Value = serde_json::from_str(&raw).map_err(|source| ConvertError::ParseJson {
        path: input.to_path_buf(),
        source,
    })?;

    fs::create_dir_all(output_dir).map_err(|source| ConvertError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = HashMap::new();
    for (key, record) in normalize(json) {
        let note = match transcribe(&key, &record) {
            Ok(note) => note,
            Err(reason) => {
                warn!(key = %key, "skipping record: {reason}");
                continue;
            }
        };

        let path = output_dir.join(format!("{}.txt", note.file_name));
        fs::write(&path, &note.text).map_err(|source| ConvertError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        println!("Created: {}", path.display());

        if written.insert(note.file_name.clone(), path).is_some() {
            warn!(
                file_name = %note.file_name,
                "duplicate derived file name, earlier output overwritten"
            );
        }
    }

    Ok(written)
}
