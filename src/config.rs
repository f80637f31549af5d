//! Configuration for LexiKV
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{LexiError, Result};

/// Main configuration for a LexiKV instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The dictionary file. Loaded once at startup, rewritten in full after
    /// every successful insert.
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("dictionary.json"),
            listen_addr: "0.0.0.0:3000".to_string(),
            cors: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the config can actually be served
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(LexiError::Config("data file path is empty".to_string()));
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            LexiError::Config(format!("invalid listen address '{}': {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the dictionary file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Enable or disable the permissive CORS layer
    pub fn cors(mut self, enabled: bool) -> Self {
        self.config.cors = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
