//! Definition loading: file discovery, JSON parsing, and construction of
//! the ordered definition set.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::GenerateError;
use crate::tsd::model::{ComponentSchema, SchemaSet};
use crate::tsd::normalize::normalize_def;
use crate::tsd::schema::WidgetDef;

/// Load widget definitions from the given files and/or directories into a
/// [`SchemaSet`].
///
/// Directories are walked recursively for `.json` files in file-name order,
/// so the set's insertion order — and therefore the emission order of the
/// generated document — is stable across runs. Component names must be
/// unique across the whole set.
pub fn load_definitions(inputs: &[PathBuf]) -> Result<SchemaSet, GenerateError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_json_files(input, &mut files)?;
        } else {
            files.push(input.clone());
        }
    }
    debug!(files = files.len(), "Discovered definition documents.");

    let mut set = SchemaSet::new();
    for file in &files {
        let schema = load_definition(file)?;
        debug!(file = %file.display(), component = %schema.name, "Loaded definition.");
        set.insert(schema)?;
    }
    Ok(set)
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), GenerateError> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            GenerateError::Io(err.into_io_error().unwrap_or_else(|| {
                std::io::Error::other(format!("failed to walk {}", dir.display()))
            }))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path.to_path_buf());
        }
    }
    Ok(())
}

fn load_definition(path: &Path) -> Result<ComponentSchema, GenerateError> {
    let text = fs::read_to_string(path)?;
    let raw: WidgetDef = serde_json::from_str(&text).map_err(|source| GenerateError::Parse {
        context: path.display().to_string(),
        source,
    })?;
    normalize_def(path, raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_loads_directory_in_file_name_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b_widget.json", r#"{"type": "Widget"}"#);
        write(&dir, "a_button.json", r#"{"type": "Button"}"#);
        write(&dir, "notes.txt", "ignored");

        let set = load_definitions(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = set.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Button", "Widget"]);
    }

    #[test]
    fn test_duplicate_component_names_are_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.json", r#"{"type": "Widget"}"#);
        write(&dir, "b.json", r#"{"type": "Widget"}"#);

        let err = load_definitions(&[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateComponent(name) if name == "Widget"));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "bad.json", "{not json");

        let err = load_definitions(&[dir.path().to_path_buf()]).unwrap_err();
        match err {
            GenerateError::Parse { context, .. } => assert!(context.ends_with("bad.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
