//! Configuration file upgrades: detect fields missing from an existing
//! YAML file and write them back with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Field names present in `Config::default()` but absent from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let current: Value = serde_yaml::from_str(&content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let (Some(cur), Some(def)) = (current.as_mapping(), defaults.as_mapping()) else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    Ok(def
        .keys()
        .filter(|k| !cur.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add any missing field to the file. Returns the names that were added.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(missing);
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut yaml: Value = serde_yaml::from_str(&content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    if let (Some(map), Some(def)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for name in &missing {
            let key = Value::String(name.clone());
            if let Some(v) = def.get(&key) {
                map.insert(key, v.clone());
            }
        }
    }

    let serialized = serde_yaml::to_string(&yaml)?;

    // Inject documentation comment right after the `default_end_time` line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("default_end_time:") {
            new_content.push_str(
                "# default_end_time: initial value (H:MM) of both the planned and\n\
                 # the actual end time, restored after save / merge / reset\n",
            );
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;

    success(format!("Configuration updated: added {}", missing.join(", ")));
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn detects_and_fills_missing_fields() {
        let path =
            env::temp_dir().join(format!("rovertime_cfg_migrate_{}.conf", std::process::id()));
        fs::write(&path, "database: /tmp/a.sqlite\n").unwrap();

        let missing = missing_fields(&path).unwrap();
        assert!(missing.contains(&"default_end_time".to_string()));
        assert!(missing.contains(&"show_sign".to_string()));

        let added = fill_missing_fields(&path).unwrap();
        assert_eq!(added, missing);
        assert!(missing_fields(&path).unwrap().is_empty());

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert_eq!(cfg.default_end_time, "17:25");

        fs::remove_file(&path).ok();
    }
}
