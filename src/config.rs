//! Configuration for the EIR synchronization core.
//!
//! This module handles loading and saving the standard EIR fields the
//! encoder needs, namely the local device name and an optional TX power
//! level.

use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EirError, Result};

/// EIR encoder settings.
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
   #[serde(default = "default_local_name")]
   pub local_name: String,

   #[serde(default)]
   pub tx_power_level: Option<i8>,
}

fn default_local_name() -> String {
   String::from("eir-sync")
}

impl Default for Config {
   fn default() -> Self {
      Self {
         local_name: default_local_name(),
         tx_power_level: None,
      }
   }
}

impl Config {
   /// Loads configuration from disk or creates default if not exists.
   pub fn load() -> Result<Self> {
      let config_path = Self::config_path()?;

      if config_path.exists() {
         let contents = fs::read_to_string(&config_path)?;
         Ok(toml::from_str(&contents)?)
      } else {
         // Create default config
         let config = Self::default();
         config.save()?;
         Ok(config)
      }
   }

   /// Saves the current configuration to disk.
   pub fn save(&self) -> Result<()> {
      let config_path = Self::config_path()?;

      // Ensure directory exists
      if let Some(parent) = config_path.parent() {
         fs::create_dir_all(parent)?;
      }

      let contents = toml::to_string_pretty(self)?;
      fs::write(&config_path, contents)?;

      Ok(())
   }

   fn config_path() -> Result<PathBuf> {
      let config_dir = if let Ok(eir_home) = env::var("EIR_SYNC_HOME") {
         PathBuf::from(eir_home)
      } else if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
         PathBuf::from(config_home)
      } else if let Ok(home) = env::var("HOME") {
         PathBuf::from(home).join(".config")
      } else {
         return Err(EirError::ConfigDirNotFound);
      };

      Ok(config_dir.join("eir-sync").join("config.toml"))
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_defaults_from_empty_toml() {
      let config: Config = toml::from_str("").expect("empty config parses");
      assert_eq!(config.local_name, "eir-sync");
      assert!(config.tx_power_level.is_none());
   }

   #[test]
   fn test_toml_round_trip() {
      let config = Config {
         local_name: "handset".to_string(),
         tx_power_level: Some(-4),
      };
      let rendered = toml::to_string_pretty(&config).expect("serialize");
      let parsed: Config = toml::from_str(&rendered).expect("parse");
      assert_eq!(parsed.local_name, "handset");
      assert_eq!(parsed.tx_power_level, Some(-4));
   }

   #[test]
   fn test_save_and_load_from_disk() {
      let dir = tempfile::tempdir().expect("tempdir");
      unsafe { env::set_var("EIR_SYNC_HOME", dir.path()) };

      let config = Config {
         local_name: "on-disk".to_string(),
         tx_power_level: Some(8),
      };
      config.save().expect("save");

      let loaded = Config::load().expect("load");
      assert_eq!(loaded.local_name, "on-disk");
      assert_eq!(loaded.tx_power_level, Some(8));

      unsafe { env::remove_var("EIR_SYNC_HOME") };
   }
}
