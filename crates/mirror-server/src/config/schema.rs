use std::net::SocketAddr;

use mirror_core::error::{MirrorError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MirrorConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            log: LogSection::default(),
        }
    }
}

impl MirrorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MirrorError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MirrorError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` overrides.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl LogSection {
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(MirrorError::BadRequest("log.filter must not be empty".into()));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "127.0.0.1:7007".into()
}
fn default_log_filter() -> String {
    "info".into()
}
