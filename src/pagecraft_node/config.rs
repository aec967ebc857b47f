use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a PageCraftNode instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Path where the node will store its documents
    pub storage_path: PathBuf,
    /// HTTP server bind address
    #[serde(default = "default_http_bind_address")]
    pub http_bind_address: String,
}

fn default_http_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data"),
            http_bind_address: default_http_bind_address(),
        }
    }
}

impl NodeConfig {
    /// Create a new node configuration with the specified storage path
    pub fn new(storage_path: PathBuf) -> Self {
        Self {
            storage_path,
            ..Default::default()
        }
    }

    /// Set the HTTP bind address
    pub fn with_bind_address(mut self, bind_address: &str) -> Self {
        self.http_bind_address = bind_address.to_string();
        self
    }
}

/// Load a node configuration from the given path or from the `NODE_CONFIG`
/// environment variable.
///
/// If the file does not exist, a default [`NodeConfig`] is returned. When a
/// `port` is provided, the returned config binds the HTTP server to
/// `127.0.0.1:<port>`.
pub fn load_node_config(
    path: Option<&str>,
    port: Option<u16>,
) -> Result<NodeConfig, std::io::Error> {
    use std::fs;

    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var("NODE_CONFIG").ok())
        .unwrap_or_else(|| "config/node_config.json".to_string());

    let mut config = if let Ok(config_str) = fs::read_to_string(&config_path) {
        serde_json::from_str::<NodeConfig>(&config_str).map_err(|e| {
            log::error!("Failed to parse node configuration: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?
    } else {
        NodeConfig::default()
    };

    if let Some(p) = port {
        config.http_bind_address = format!("127.0.0.1:{}", p);
    }
    Ok(config)
}
