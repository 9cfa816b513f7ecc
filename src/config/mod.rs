//! Configuration loading and management

use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the HTTP server listens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Records loaded into the stores at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Failed to parse config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `GRUBDASH_PORT` when it is set to a valid port
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(port) = std::env::var("GRUBDASH_PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
        {
            self.server.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.addr(), "127.0.0.1:5000");
        assert!(config.seed.dishes.is_empty());
        assert!(config.seed.orders.is_empty());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  port: 8080\n").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_seed_from_yaml() {
        let yaml = r#"
seed:
  dishes:
    - id: "d1"
      name: "Dolcelatte and chickpea spaghetti"
      description: "Spaghetti topped with a blend of dolcelatte and fresh chickpeas"
      price: 19
      image_url: "https://images.example.com/spaghetti.jpg"
  orders:
    - id: "o1"
      deliverTo: "308 Negra Arroyo Lane, Albuquerque, NM"
      mobileNumber: "(505) 143-3369"
      status: "delivered"
      dishes:
        - id: "d1"
          name: "Dolcelatte and chickpea spaghetti"
          price: 19
          quantity: 2
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.seed.dishes[0].price.as_u64(), Some(19));
        assert_eq!(config.seed.orders[0].dishes[0].quantity, 2);
        assert!(!config.seed.orders[0].is_pending());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.server, config.server);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml_str("server: [unclosed").is_err());
    }
}
