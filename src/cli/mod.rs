mod args;
mod value_enum;

use std::path::Path;

pub use args::Args;
use collect_files_domain::CollectConfig;
use collect_files_infra::config::load_config_file;
use collect_files_shared_kernel::{PresentationError, Result};
pub use value_enum::{CliDecodePolicy, CliNewlineMode};

/// Resolve the effective configuration: defaults, then the config file, then flags.
///
/// `cwd` is the default traversal root, so record paths come out absolute unless a
/// relative root is given explicitly.
pub fn build_config(args: &Args, cwd: &Path) -> Result<CollectConfig> {
    let mut config = CollectConfig { root: cwd.to_path_buf(), ..CollectConfig::default() };
    if let Some(path) = &args.config {
        config = config.apply(load_config_file(path)?);
    }
    config = config.apply(args.to_patch());

    validate_root(&config.root)?;
    // Compile once here so that a bad glob is reported before any output is touched.
    config.exclusion()?;
    Ok(config)
}

fn validate_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    Err(PresentationError::InvalidValue {
        flag: "ROOT".to_string(),
        value: root.display().to_string(),
        reason: "must be an existing directory".to_string(),
    }
    .into())
}
