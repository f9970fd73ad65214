//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use colorpath_lib::{load_network, Network};

/// Path to the fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the reference transit network.
pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("network_graph.json")
}

/// Load the reference transit network.
pub fn fixture_network() -> Network {
    load_network(&fixture_path()).expect("fixture loads")
}
