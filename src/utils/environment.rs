use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Environment variable naming the default clippings file
pub const CLIPPINGS_ENV_VAR: &str = "KINDLE_CLIPPINGS";

/// Resolve the clippings file path: explicit argument first, then `$KINDLE_CLIPPINGS`
pub fn resolve_clippings_path(arg: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path.to_path_buf());
    }

    match env::var_os(CLIPPINGS_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => bail!("No clippings file given and {} environment variable not set", CLIPPINGS_ENV_VAR),
    }
}
