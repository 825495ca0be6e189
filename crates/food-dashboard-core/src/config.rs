//! Remote store configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::FoodId;

const DEFAULT_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the `/foods` collection lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout; only applied on native targets
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url.trim_end_matches('/'))
    }

    pub fn food_url(&self, id: FoodId) -> String {
        format!("{}/{}", self.foods_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.foods_url(), "http://localhost:3333/foods");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::default().with_base_url("http://api.test/");
        assert_eq!(config.foods_url(), "http://api.test/foods");
        assert_eq!(config.food_url(4), "http://api.test/foods/4");
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ApiConfig::from_json(r#"{"base_url":"http://10.0.0.2:3333"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:3333");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ApiConfig::from_json("base_url = 1").is_err());
    }
}
