//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_max_pool_size() -> u32 {
    8
}

#[derive(Clone, Debug, Deserialize)]
/// Settings needed to start the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    /// Insert the sample beers and customers into empty tables on startup.
    #[serde(default)]
    pub seed_data: bool,
}
