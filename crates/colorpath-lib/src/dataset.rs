use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the network description location.
pub const NETWORK_PATH_ENV: &str = "COLORPATH_GRAPH";

/// File looked up in the working directory when nothing else is configured.
pub const DEFAULT_NETWORK_FILENAME: &str = "network_graph.json";

/// Resolve the network description to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `COLORPATH_GRAPH` environment variable.
/// 3. `network_graph.json` in the current directory.
pub fn resolve_network_path(target: Option<&Path>) -> Result<PathBuf> {
    let env_path = env::var_os(NETWORK_PATH_ENV).map(PathBuf::from);
    resolve_from(target, env_path)
}

fn resolve_from(target: Option<&Path>, env_path: Option<PathBuf>) -> Result<PathBuf> {
    let (source, path) = match (target, env_path) {
        (Some(explicit), _) => ("argument", explicit.to_path_buf()),
        (None, Some(from_env)) => (NETWORK_PATH_ENV, from_env),
        (None, None) => ("default", PathBuf::from(DEFAULT_NETWORK_FILENAME)),
    };
    debug!(source, "resolved network path {}", path.display());

    if !path.is_file() {
        return Err(Error::NetworkNotFound { path });
    }
    Ok(path)
}
