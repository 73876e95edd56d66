use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub turnero_api_url: String,
    pub turnero_api_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            turnero_api_url: env::var("TURNERO_API_URL")
                .unwrap_or_else(|_| {
                    warn!("TURNERO_API_URL not set, using empty value");
                    String::new()
                }),
            turnero_api_token: env::var("TURNERO_API_TOKEN")
                .unwrap_or_else(|_| {
                    warn!("TURNERO_API_TOKEN not set, requests go out unauthenticated");
                    String::new()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.turnero_api_url.is_empty()
    }
}
