use std::path::PathBuf;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// Everything is optional: the dataset ships inside the binary, and the
/// default serving mode is stdio.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to an external skills dataset (JSON, same shape as the embedded
    /// one). `None` uses the embedded dataset.
    pub data_path: Option<PathBuf>,
    /// TCP address for raw MCP connections (e.g. "127.0.0.1:8900").
    pub tcp_listen_addr: Option<String>,
    /// HTTP address for the streamable-HTTP transport (e.g. "127.0.0.1:8901").
    pub http_listen_addr: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SKILLS_DATA_PATH`: external dataset file (must exist if set)
    /// - `MCP_TCP_LISTEN_ADDR`: serve raw MCP over TCP instead of stdio
    /// - `MCP_HTTP_LISTEN_ADDR`: serve streamable HTTP instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        let data_path = match std::env::var("SKILLS_DATA_PATH") {
            Ok(raw) => {
                let path = PathBuf::from(raw);
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "SKILLS_DATA_PATH points to a missing file: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            Err(_) => None,
        };

        Ok(Self {
            data_path,
            tcp_listen_addr: std::env::var("MCP_TCP_LISTEN_ADDR").ok(),
            http_listen_addr: std::env::var("MCP_HTTP_LISTEN_ADDR").ok(),
        })
    }
}
