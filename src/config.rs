use std::env;

use crate::services::timezone::ClockStyle;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub business_slug: String,
    pub clock: ClockStyle,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            business_slug: env::var("BUSINESS_SLUG").unwrap_or_default(),
            clock: match env::var("CLOCK_STYLE").as_deref() {
                Ok("24h") => ClockStyle::TwentyFourHour,
                _ => ClockStyle::TwelveHour,
            },
        }
    }
}
