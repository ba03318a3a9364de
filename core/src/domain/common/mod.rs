use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://world.openfoodfacts.org/cgi/search.pl";

#[derive(Clone, Debug)]
pub struct MealbookConfig {
    pub upstream: UpstreamConfig,
}

#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
            user_agent: format!("mealbook/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
