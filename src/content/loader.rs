//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub(crate) fn parse_single_file<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load the ordered room list from `rooms.ron`.
pub fn load_rooms(base_path: &Path) -> Result<Vec<RoomDef>, ContentLoadError> {
    let path = base_path.join("rooms.ron");
    let contents = read_file(&path)?;
    let rooms: Vec<RoomDef> = parse_data_file(&path.display().to_string(), &contents)?;

    if rooms.is_empty() {
        return Err(ContentLoadError {
            file: path.display().to_string(),
            message: "no rooms defined".to_string(),
        });
    }

    Ok(rooms)
}

/// Load gameplay tuning from `gameplay.ron`.
pub fn load_gameplay_config(base_path: &Path) -> Result<GameplayConfig, ContentLoadError> {
    let path = base_path.join("gameplay.ron");
    let contents = read_file(&path)?;
    parse_single_file(&path.display().to_string(), &contents)
}
