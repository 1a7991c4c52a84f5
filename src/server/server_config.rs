use std::{fs, env, net::SocketAddr, path::Path};
use serde::{Serialize, Deserialize};
use anyhow::{self, Context};

pub const DEFAULT_CONFIG: &str = "resources/server.toml";
pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path the user operations are served on.
    pub route: String
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            route: "/user".to_owned()
        }
    }
}

impl ServerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Reads the config file if there is one, then applies `PORT` from the environment.
    pub fn load(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let mut config = if filepath.exists() {
            ServerConfig::read(filepath)?
        } else {
            log::info!("no config file at {}, using defaults", filepath.display());
            ServerConfig::default()
        };

        config.override_port(env::var(PORT_VAR).ok().as_deref())?;
        return Ok(config);
    }

    /// An unset or empty value keeps the current port.
    pub fn override_port(&mut self, port: Option<&str>) -> anyhow::Result<()> {
        if let Some(port) = port.filter(|port| !port.is_empty()) {
            self.port = port.parse()
                .with_context(|| format!("invalid {} value: {}", PORT_VAR, port))?;
        }
        return Ok(());
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.route.starts_with('/') {
            anyhow::bail!("route must start with '/': {}", self.route);
        }
        self.socket_addr()?;
        return Ok(());
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("invalid listen address: {}", addr))
    }
}
