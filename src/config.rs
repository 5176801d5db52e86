use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub preview_debounce_ms: u64,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("WIKIQUIZ_API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            preview_debounce_ms: env::var("WIKIQUIZ_PREVIEW_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(800),
            request_timeout_secs: env::var("WIKIQUIZ_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    pub fn preview_debounce(&self) -> Duration {
        Duration::from_millis(self.preview_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            preview_debounce_ms: 800,
            request_timeout_secs: 5,
        }
    }
}
