use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::BaseDirs;

use super::serialization::GlobalSettings;

pub fn config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|base| base.config_dir().join("Filterlab"))
}

fn global_state_storage_path(storage_dir: &Path) -> PathBuf {
    storage_dir.join("global_settings.json")
}

pub fn save_global_state(
    storage_dir: &Path,
    state: &GlobalSettings,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(state)?;
    let path = global_state_storage_path(storage_dir);
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(&path, json)?;
    Ok(path)
}

pub fn load_global_state(
    storage_dir: &Path,
) -> Result<GlobalSettings, Box<dyn Error>> {
    let path = global_state_storage_path(storage_dir);
    let json = fs::read_to_string(path)?;
    let settings = serde_json::from_str::<GlobalSettings>(&json)?;
    Ok(settings)
}

pub fn load_global_state_if_exists(
    storage_dir: &Path,
) -> Result<Option<GlobalSettings>, Box<dyn Error>> {
    match load_global_state(storage_dir) {
        Ok(settings) => Ok(Some(settings)),
        Err(err) => {
            if err
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::NotFound)
            {
                Ok(None)
            } else {
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!(
            "filterlab_{}_{}_{}",
            name,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_missing_settings_load_as_none() {
        let dir = scratch_dir("missing");
        assert!(load_global_state_if_exists(&dir).unwrap().is_none());
    }

    #[test]
    fn test_settings_round_trip_through_dir() {
        let dir = scratch_dir("round_trip");
        let settings = GlobalSettings {
            backdrop_mode: true,
            copy_to_clipboard: false,
            ..GlobalSettings::default()
        };

        let path = save_global_state(&dir, &settings).unwrap();
        let loaded = load_global_state_if_exists(&dir).unwrap();

        assert!(path.ends_with("global_settings.json"));
        assert_eq!(loaded, Some(settings));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_malformed_settings_are_an_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("global_settings.json"), "{ not json").unwrap();

        assert!(load_global_state_if_exists(&dir).is_err());
        let _ = fs::remove_dir_all(dir);
    }
}
