use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::eligibility::EligibleSet;
use crate::error::{Error, Result};
use crate::network::{Network, NodeId};

/// Weight credited for entering a station the vehicle category cannot use.
pub const NEUTRAL_WEIGHT: u64 = 0;

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: u64,
}

/// Weighted directed graph used by the pathfinding algorithms.
///
/// Cloning is cheap; the adjacency is shared and never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Build a graph carrying the network's weights unchanged.
    pub fn from_network(network: &Network) -> Self {
        let adjacency = network
            .stations()
            .map(|(id, station)| {
                let edges = station
                    .connections
                    .iter()
                    .map(|connection| Edge {
                        target: connection.target.clone(),
                        weight: connection.weight,
                    })
                    .collect();
                (id.clone(), edges)
            })
            .collect();

        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the outgoing edges for a given station.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Check that every edge targets a node of this graph.
    ///
    /// Nodes are visited in identifier order so the reported edge is stable.
    pub fn validate(&self) -> Result<()> {
        let mut nodes: Vec<&NodeId> = self.adjacency.keys().collect();
        nodes.sort();
        for node in nodes {
            if let Some(edge) = self
                .neighbours(node)
                .iter()
                .find(|edge| !self.adjacency.contains_key(&edge.target))
            {
                return Err(Error::GraphFormat {
                    node: node.clone(),
                    target: edge.target.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Derive a graph where every edge entering an ineligible station costs
/// `neutral` instead of its original weight.
///
/// Only the edge target decides; the source station's eligibility is
/// irrelevant. The network itself is left untouched.
pub fn normalize(network: &Network, eligible: &EligibleSet, neutral: u64) -> Graph {
    let mut neutralized = 0usize;
    let adjacency: HashMap<NodeId, Vec<Edge>> = network
        .stations()
        .map(|(id, station)| {
            let edges = station
                .connections
                .iter()
                .map(|connection| {
                    let weight = if eligible.contains(&connection.target) {
                        connection.weight
                    } else {
                        neutralized += 1;
                        neutral
                    };
                    Edge {
                        target: connection.target.clone(),
                        weight,
                    }
                })
                .collect();
            (id.clone(), edges)
        })
        .collect();

    debug!(
        nodes = adjacency.len(),
        neutralized, neutral, "normalized network costs"
    );

    Graph {
        adjacency: Arc::new(adjacency),
    }
}
