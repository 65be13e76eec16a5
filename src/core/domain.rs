use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> u64;
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub host: String,
    pub port: u16,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    // BOOKS_HOST and BOOKS_PORT override the defaults when they hold usable values.
    pub fn from_env(branch_id: &str) -> Self {
        Self::from_lookup(branch_id, |key| std::env::var(key).ok())
    }

    fn from_lookup(branch_id: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Configuration::new(branch_id);
        if let Some(host) = lookup("BOOKS_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("BOOKS_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => warn!("ignoring BOOKS_PORT {:?}: {}", port, err),
            }
        }
        config
    }

    pub fn bind_addr(&self) -> SocketAddr {
        match format!("{}:{}", self.host, self.port).parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                warn!("invalid bind host {:?}: {}, using {}", self.host, err, DEFAULT_HOST);
                SocketAddr::from(([0, 0, 0, 0], self.port))
            }
        }
    }
}
