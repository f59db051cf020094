//! Driver config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use elide_core::{ElideError, Result};

pub use schema::{DeclarationConfig, ElideConfig, Returns, ThresholdToken};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ElideConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| ElideError::Io(format!("read config {} failed: {e}", path.display())))?;
    let cfg = load_from_str(&s)?;
    tracing::info!(
        path = %path.display(),
        declarations = cfg.declarations.len(),
        "config loaded"
    );
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ElideConfig> {
    let cfg: ElideConfig = serde_yaml::from_str(s)
        .map_err(|e| ElideError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
