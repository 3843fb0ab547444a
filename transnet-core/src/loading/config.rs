use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Error;

/// Settings for building the stop network.
///
/// The defaults carry the override rules for known inconsistencies of the
/// Graz dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Feed directories read by [`super::feed::read_feed`]
    pub feed_dirs: Vec<PathBuf>,
    /// Route titles ignored as redundant
    pub excluded_routes: Vec<String>,
    /// `(known_id, alias_id)`: `alias_id` resolves to the stop of `known_id`
    pub stop_aliases: Vec<(String, String)>,
    /// Stop IDs skipped when walking a route
    pub excluded_stops: Vec<String>,
    /// Route modes whose members carry travel times
    pub rail_modes: Vec<String>,
    /// Member role marking a stop of non rail routes
    pub platform_role: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            feed_dirs: Vec::new(),
            excluded_routes: ["65E", "64E", "33E", "41/53", "58E", "82", "74E"]
                .into_iter()
                .map(String::from)
                .collect(),
            stop_aliases: vec![
                ("794705419".to_string(), "336334047".to_string()),
                ("86096405".to_string(), "772629261".to_string()),
            ],
            excluded_stops: vec!["458195176".to_string()],
            rail_modes: vec!["tram".to_string()],
            platform_role: "platform".to_string(),
        }
    }
}

impl NetworkConfig {
    /// Reads a config from a JSON file; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let file = std::fs::File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open config '{}': {}", path.display(), e),
            )
        })?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn with_feed_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.feed_dirs = dirs;
        self
    }

    pub fn is_rail_mode(&self, mode: &str) -> bool {
        self.rail_modes.iter().any(|m| m == mode)
    }

    pub fn is_excluded_stop(&self, stop_id: &str) -> bool {
        self.excluded_stops.iter().any(|s| s == stop_id)
    }

    /// Checks that every configured feed directory exists
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing directory
    pub fn validate(&self) -> Result<(), Error> {
        if self.feed_dirs.is_empty() {
            return Err(Error::InvalidData(
                "No feed directories provided in the configuration".to_string(),
            ));
        }

        for dir in &self.feed_dirs {
            if !dir.exists() {
                return Err(Error::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Feed directory not found: {}", dir.display()),
                )));
            }
        }

        Ok(())
    }
}
