//! Mirror server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use mirror_core::error::{MirrorError, Result};

pub use schema::{LogSection, MirrorConfig, ServerSection};

/// File looked up in the working directory at startup.
pub const DEFAULT_CONFIG_PATH: &str = "mirror.yaml";

pub fn load_from_file(path: &str) -> Result<MirrorConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MirrorError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: &str) -> Result<MirrorConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(MirrorConfig::default()),
        Err(e) => Err(MirrorError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<MirrorConfig> {
    let cfg: MirrorConfig = serde_yaml::from_str(s)
        .map_err(|e| MirrorError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
