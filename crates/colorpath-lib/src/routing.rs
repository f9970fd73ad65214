use serde::Serialize;
use tracing::{debug, info};

use crate::eligibility::{eligible_nodes, CategoryFilter, EligibleSet};
use crate::error::{EndpointRole, Error, Result};
use crate::graph::{normalize, NEUTRAL_WEIGHT};
use crate::network::{Network, NodeId};
use crate::path::shortest_path;

/// Number of alternative station names offered for an unknown endpoint.
const MAX_SUGGESTIONS: usize = 3;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub root: String,
    pub goal: String,
    pub category: CategoryFilter,
}

impl RouteRequest {
    /// Request a route usable by every category.
    pub fn new(root: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            goal: goal.into(),
            category: CategoryFilter::Any,
        }
    }

    /// Restrict the route to stations admitting `category`.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub root: NodeId,
    pub goal: NodeId,
    pub category: CategoryFilter,
    /// Cost of `raw_path` after ineligible stations were neutralized.
    pub cost: u128,
    /// Every station traversed, eligible or not.
    pub raw_path: Vec<NodeId>,
    /// Stations of `raw_path` usable by the requested category.
    pub steps: Vec<NodeId>,
}

impl RoutePlan {
    /// Number of hops between the reported stations.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the cheapest route for the requested category.
///
/// Stations the category cannot use may still be crossed; entering them is
/// free and they are dropped from the reported steps. This applies to the
/// endpoints as well, so `steps` may omit the root or goal.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    network.validate()?;
    resolve_node(network, &request.root, EndpointRole::Root)?;
    resolve_node(network, &request.goal, EndpointRole::Goal)?;

    let eligible = eligible_nodes(network, &request.category);
    debug!(
        category = %request.category,
        eligible = eligible.len(),
        total = network.len(),
        "resolved eligible stations"
    );

    let graph = normalize(network, &eligible, NEUTRAL_WEIGHT);
    let raw = shortest_path(&graph, &request.root, &request.goal)?;
    debug!(raw_path = ?raw.nodes, cost = raw.cost, "found raw path");

    let steps = project(&raw.nodes, &eligible);
    info!(
        root = %request.root,
        goal = %request.goal,
        category = %request.category,
        steps = steps.len(),
        cost = raw.cost,
        "planned route"
    );

    Ok(RoutePlan {
        root: request.root.clone(),
        goal: request.goal.clone(),
        category: request.category.clone(),
        cost: raw.cost,
        raw_path: raw.nodes,
        steps,
    })
}

/// Keep only the eligible stations of `raw_path`, preserving order.
pub fn project(raw_path: &[NodeId], eligible: &EligibleSet) -> Vec<NodeId> {
    raw_path
        .iter()
        .filter(|node| eligible.contains(*node))
        .cloned()
        .collect()
}

fn resolve_node(network: &Network, name: &str, role: EndpointRole) -> Result<()> {
    if network.contains(name) {
        return Ok(());
    }
    Err(Error::NodeNotFound {
        role,
        name: name.to_string(),
        suggestions: network.fuzzy_matches(name, MAX_SUGGESTIONS),
    })
}
