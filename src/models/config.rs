use serde::Deserialize;

/// Configuration options for the catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}
