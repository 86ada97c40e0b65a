// crates/infra/src/config.rs
use std::path::Path;

use collect_files_domain::ConfigPatch;
use collect_files_shared_kernel::{InfrastructureError, Result};

/// Load one configuration layer from `path`.
///
/// With the `yaml` feature the file is parsed as YAML (which also accepts JSON);
/// without it, only JSON is understood.
pub fn load_config_file(path: &Path) -> Result<ConfigPatch> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| InfrastructureError::ConfigLoad { path: path.to_path_buf(), details: err.to_string() })?;
    parse_config(&text)
        .map_err(|err| InfrastructureError::ConfigLoad { path: path.to_path_buf(), details: err.to_string() }.into())
}

#[cfg(feature = "yaml")]
pub fn parse_config(text: &str) -> Result<ConfigPatch> {
    if text.trim().is_empty() {
        return Ok(ConfigPatch::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
pub fn parse_config(text: &str) -> Result<ConfigPatch> {
    if text.trim().is_empty() {
        return Ok(ConfigPatch::default());
    }
    Ok(serde_json::from_str(text)?)
}
