use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Identifier for a station in the network.
pub type NodeId = String;

/// Minimum similarity score for a station name to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Outgoing connection from one station to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(NodeId, u64)", into = "(NodeId, u64)")]
pub struct Connection {
    pub target: NodeId,
    pub weight: u64,
}

impl From<(NodeId, u64)> for Connection {
    fn from((target, weight): (NodeId, u64)) -> Self {
        Self { target, weight }
    }
}

impl From<Connection> for (NodeId, u64) {
    fn from(connection: Connection) -> Self {
        (connection.target, connection.weight)
    }
}

/// A station together with the vehicle categories allowed to use it.
///
/// An empty category set means every category may use the station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "color", default)]
    pub categories: BTreeSet<String>,
    #[serde(rename = "costs", default)]
    pub connections: Vec<Connection>,
}

impl Station {
    /// Whether a vehicle of the given category may use this station.
    pub fn admits(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.contains(category)
    }
}

/// In-memory representation of the transit network.
///
/// Stations are kept sorted by identifier so every traversal of the network
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network {
    stations: BTreeMap<NodeId, Station>,
}

impl Network {
    /// Build a network from already-parsed stations.
    pub fn new(stations: BTreeMap<NodeId, Station>) -> Self {
        Self { stations }
    }

    /// Parse a network from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a network from any reader producing a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Iterate over `(id, station)` pairs in identifier order.
    pub fn stations(&self) -> impl Iterator<Item = (&NodeId, &Station)> {
        self.stations.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.stations.keys()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Total number of directed connections across all stations.
    pub fn edge_count(&self) -> usize {
        self.stations
            .values()
            .map(|station| station.connections.len())
            .sum()
    }

    /// Check that every connection targets a known station.
    ///
    /// Parallel connections between the same pair of stations are allowed but
    /// reported, since only the cheapest of them can ever be used by a route.
    pub fn validate(&self) -> Result<()> {
        for (id, station) in &self.stations {
            let mut seen = HashSet::new();
            for connection in &station.connections {
                if !self.stations.contains_key(&connection.target) {
                    return Err(Error::GraphFormat {
                        node: id.clone(),
                        target: connection.target.clone(),
                    });
                }
                if !seen.insert(connection.target.as_str()) {
                    warn!(
                        node = %id,
                        target = %connection.target,
                        "duplicate connection; the cheapest one wins"
                    );
                }
            }
        }
        Ok(())
    }

    /// Find station names similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &NodeId)> = self
            .stations
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

impl FromIterator<(NodeId, Station)> for Network {
    fn from_iter<I: IntoIterator<Item = (NodeId, Station)>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}

/// Load a network description from a JSON file on disk.
///
/// Connection targets are not checked here; see [`Network::validate`].
pub fn load_network(path: &Path) -> Result<Network> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("loading network from {}", path.display());
    let file = File::open(path)?;
    let network = Network::from_reader(BufReader::new(file))?;
    info!(
        stations = network.len(),
        connections = network.edge_count(),
        "loaded network from {}",
        path.display()
    );
    Ok(network)
}
