//! Frontend Configuration
//!
//! The remote store location is baked in at build time:
//! `FOOD_API_CONFIG` (JSON `ApiConfig`) wins over `FOOD_API_URL`.

use food_dashboard_core::ApiConfig;

pub fn api_config() -> ApiConfig {
    if let Some(raw) = option_env!("FOOD_API_CONFIG") {
        match ApiConfig::from_json(raw) {
            Ok(config) => return config,
            Err(e) => log::warn!("[CONFIG] Ignoring FOOD_API_CONFIG: {}", e),
        }
    }

    match option_env!("FOOD_API_URL") {
        Some(url) => ApiConfig::default().with_base_url(url),
        None => ApiConfig::default(),
    }
}
