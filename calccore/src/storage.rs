//! Settings persistence for calcsuite apps.
//!
//! Small JSON documents under a per-app config directory.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Config directory for a calcsuite app.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("io", "calcsuite", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load a JSON settings document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save a JSON settings document, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        animate: bool,
        speed: f32,
    }

    #[test]
    fn test_round_trip() {
        let path = std::env::temp_dir()
            .join("calcsuite-storage-test")
            .join("settings.json");
        let sample = Sample {
            animate: true,
            speed: 0.5,
        };
        save_json(&path, &sample).unwrap();
        let loaded: Sample = load_json(&path).unwrap();
        assert_eq!(loaded, sample);
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("calcsuite-storage-missing.json");
        assert!(load_json::<Sample>(&path).is_err());
    }
}
