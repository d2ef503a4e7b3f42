use serde::{Deserialize, Serialize};

/// Environment variable consulted for the OMDb credential.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default = "default_featured")]
    pub featured: Vec<String>,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
    #[serde(alias = "placeholderposter", default = "default_placeholder_poster")]
    pub placeholder_poster: String,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OmdbConfig {
    #[serde(default)]
    pub apikey: Option<String>,
    #[serde(default = "default_base_url")]
    pub baseurl: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            apikey: None,
            baseurl: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_recommendation_limit")]
    pub limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            limit: default_recommendation_limit(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_recommendation_limit() -> usize {
    5
}

fn default_placeholder_poster() -> String {
    "https://via.placeholder.com/250x375.png?text=No+Poster".to_string()
}

fn default_featured() -> Vec<String> {
    [
        "The Shawshank Redemption",
        "The Godfather",
        "The Dark Knight",
        "Pulp Fiction",
        "Inception",
        "Interstellar",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb: OmdbConfig::default(),
            featured: default_featured(),
            recommendations: RecommendationConfig::default(),
            placeholder_poster: default_placeholder_poster(),
            debug_logs: false,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(&content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve the API credential: explicit override, then environment, then file.
    pub fn resolve_api_key(
        &mut self,
        cli_override: Option<String>,
        env_value: Option<String>,
    ) -> Result<&str, ConfigError> {
        let key = [cli_override, env_value, self.omdb.apikey.take()]
            .into_iter()
            .flatten()
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(self.omdb.apikey.insert(key).as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("No OMDb API key configured (use --apikey, OMDB_API_KEY or omdb.apikey)")]
    MissingApiKey,
}
