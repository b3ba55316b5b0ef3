//! Server state and configuration.

use crate::codegen::DEFAULT_VALUES_PER_LINE;

/// Canvas edge limit of the editor UI.
pub const DEFAULT_MAX_DIMENSION: usize = 256;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "127.0.0.1:8080")
    pub listen_addr: String,
    /// Hex literals per line in generated arrays
    pub values_per_line: usize,
    /// Largest canvas edge accepted from clients
    pub max_dimension: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            values_per_line: DEFAULT_VALUES_PER_LINE,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
