//! Server configuration from command-line flags and environment.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Errors found while validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("dist directory not found: {0} (build the frontend with `trunk build` first)")]
    MissingDist(PathBuf),

    #[error("dist directory has no index.html: {0}")]
    MissingIndex(PathBuf),
}

/// octofit-server: serve the OctoFit dashboard bundle
#[derive(Parser, Debug, Clone)]
#[command(name = "octofit-server")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "OCTOFIT_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "OCTOFIT_PORT", default_value = "3000")]
    pub port: u16,

    /// Directory containing the built frontend (index.html, wasm, js)
    #[arg(short, long, env = "OCTOFIT_DIST", default_value = "rust/crates/frontend/dist")]
    pub dist: PathBuf,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Check that the dist directory is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dist.is_dir() {
            return Err(ConfigError::MissingDist(self.dist.clone()));
        }
        if !self.dist.join("index.html").is_file() {
            return Err(ConfigError::MissingIndex(self.dist.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dist: PathBuf) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            dist,
        }
    }

    #[test]
    fn test_parse_flags() {
        let config =
            ServerConfig::try_parse_from(["octofit-server", "--port", "9000", "--dist", "out"])
                .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.dist, PathBuf::from("out"));
    }

    #[test]
    fn test_addr() {
        let config = config_for(PathBuf::from("dist"));
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validate_missing_dist() {
        let config = config_for(PathBuf::from("/nonexistent/octofit/dist"));
        assert!(matches!(config.validate(), Err(ConfigError::MissingDist(_))));
    }

    #[test]
    fn test_validate_requires_index() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path().to_path_buf());
        assert!(matches!(config.validate(), Err(ConfigError::MissingIndex(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());
    }
}
