//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::types::PageSize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Origin allowed by CORS for the JSON API.
    pub frontend_url: String,
    pub page_size: PageSize,
    pub sample_users: usize,
    pub sample_reservations: usize,
    /// Fixed seed for reproducible sample data.
    #[serde(default)]
    pub seed: Option<u64>,
}
