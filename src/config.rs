use crate::checker::{
    DEFAULT_DICTIONARY_SIZE, DEFAULT_HASH_COUNT, DEFAULT_MAX_EDIT_DISTANCE,
    DEFAULT_MAX_SUGGESTIONS,
};
use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

const APP_NAME: &str = "spellsuggest";
const CONFIG_NAME: &str = "config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary_size: usize,
    pub hash_count: usize,
    pub max_edit_distance: usize,
    pub max_suggestions: usize,
    pub similarity_threshold: f64,
    pub default_language: String,
    /// Languages whose built-in word lists are loaded at startup.
    pub preload_languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_size: DEFAULT_DICTIONARY_SIZE,
            hash_count: DEFAULT_HASH_COUNT,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            similarity_threshold: 0.5,
            default_language: "en".to_string(),
            preload_languages: vec!["en".to_string()],
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults if it cannot be read.
    pub fn load() -> Result<Self> {
        match confy::load(APP_NAME, Some(CONFIG_NAME)) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!("Failed to load config, using defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    /// Load a config file at an explicit path. A missing file is created with
    /// defaults.
    pub fn load_path(path: &Path) -> Result<Self> {
        Ok(confy::load_path(path)?)
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, Some(CONFIG_NAME), self)?;
        Ok(())
    }

    pub fn save_path(&self, path: &Path) -> Result<()> {
        confy::store_path(path, self)?;
        Ok(())
    }
}
