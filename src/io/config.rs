use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

const CONFIG_FILE: &str = "config.toml";

/// Optional appearance settings read from `config.toml` in the data
/// directory. Absent file means defaults; the program never writes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Hex color overrides keyed by theme slot name ("header", "done",
    /// "open", "dim", "stamp", "selection_bg", "warning").
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Read the config from `dir`. Appearance is never worth failing startup
/// over, so a missing or malformed file just yields the defaults.
pub fn read_config(dir: &Path) -> Config {
    let Ok(text) = fs::read_to_string(dir.join(CONFIG_FILE)) else {
        return Config::default();
    };
    toml::from_str(&text).unwrap_or_default()
}
