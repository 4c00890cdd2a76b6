use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MODEL: &str = "cross-encoder/ms-marco-MiniLM-L-6-v2";

/// Server configuration, resolved once at startup.
///
/// Environment variables: `PORT` (default 8080), `TRANSFORMER_MODEL`
/// (default `cross-encoder/ms-marco-MiniLM-L-6-v2`), `MODEL_CACHE_DIR`
/// (optional hf-hub cache root). CLI flags override these.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub model: String,
    pub model_cache_dir: Option<PathBuf>,
    pub mock_scoring: bool,
    pub public: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let model = std::env::var("TRANSFORMER_MODEL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let model_cache_dir = std::env::var("MODEL_CACHE_DIR")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            port,
            model,
            model_cache_dir,
            mock_scoring: false,
            public: false,
        })
    }

    pub fn bind_addr(&self) -> String {
        let host = if self.public { "0.0.0.0" } else { "127.0.0.1" };
        format!("{}:{}", host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            port: 8080,
            model: DEFAULT_MODEL.to_string(),
            model_cache_dir: None,
            mock_scoring: false,
            public: false,
        }
    }

    #[test]
    fn test_bind_addr_defaults_to_loopback() {
        assert_eq!(config().bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bind_addr_public() {
        let config = ServerConfig {
            public: true,
            port: 9000,
            ..config()
        };

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
