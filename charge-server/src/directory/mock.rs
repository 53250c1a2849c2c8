//! Mock directory client for development and testing.
//!
//! Loads station records from JSON files in a directory and serves
//! them as if they were live API responses. Useful for running the
//! server without backend credentials.

use std::path::Path;

use super::error::DirectoryError;
use super::types::StationDto;

/// Mock directory client that serves data from JSON files.
///
/// Each `*.json` file in the data directory holds an array of
/// [`StationDto`] records; all files are merged into one listing.
#[derive(Debug, Clone)]
pub struct MockDirectoryClient {
    stations: Vec<StationDto>,
}

impl MockDirectoryClient {
    /// Create a mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let data_dir = data_dir.as_ref();
        let mut stations = Vec::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| DirectoryError::MockData {
            message: format!("failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DirectoryError::MockData {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| DirectoryError::MockData {
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let mut batch: Vec<StationDto> =
                serde_json::from_str(&json).map_err(|e| DirectoryError::MockData {
                    message: format!("failed to parse {path:?}: {e}"),
                })?;

            stations.append(&mut batch);
        }

        if stations.is_empty() {
            return Err(DirectoryError::MockData {
                message: format!("no station records found in {data_dir:?}"),
            });
        }

        Ok(Self { stations })
    }

    /// Return the full station list.
    ///
    /// Mimics the real `DirectoryClient::fetch_all` interface; mock
    /// data is static.
    pub async fn fetch_all(&self) -> Result<Vec<StationDto>, DirectoryError> {
        Ok(self.stations.clone())
    }
}
