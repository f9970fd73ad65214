use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::{EndpointRole, Error, Result};
use crate::graph::{Edge, Graph};
use crate::network::NodeId;

/// Unprojected result of a shortest path search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawPath {
    /// Every station visited, root first and goal last.
    pub nodes: Vec<NodeId>,
    /// Sum of the edge weights along `nodes`.
    ///
    /// Accumulated in `u128` so that no sum of `u64` weights can overflow.
    pub cost: u128,
}

/// Find the cheapest path from `root` to `goal`.
///
/// Both endpoints are checked against the graph before searching so that a
/// typo is reported as such rather than as an unreachable goal. Edges to
/// unknown stations fail with [`Error::GraphFormat`].
pub fn shortest_path(graph: &Graph, root: &str, goal: &str) -> Result<RawPath> {
    graph.validate()?;
    ensure_node(graph, root, EndpointRole::Root)?;
    ensure_node(graph, goal, EndpointRole::Goal)?;

    find_route_dijkstra(graph, root, goal).ok_or_else(|| Error::NoPath {
        root: root.to_string(),
        goal: goal.to_string(),
    })
}

fn ensure_node(graph: &Graph, node: &str, role: EndpointRole) -> Result<()> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(Error::NodeNotFound {
            role,
            name: node.to_string(),
            suggestions: Vec::new(),
        })
    }
}

/// Run Dijkstra's algorithm using the stored edge weights.
pub fn find_route_dijkstra(graph: &Graph, start: &str, goal: &str) -> Option<RawPath> {
    find_route_dijkstra_by(graph, start, goal, |edge| edge.weight)
}

/// Run Dijkstra's algorithm, pricing each edge with `cost`.
///
/// `cost` lets callers re-weight edges on the fly (for example to neutralize
/// ineligible stations) without materializing a second graph.
pub fn find_route_dijkstra_by<F>(
    graph: &Graph,
    start: &str,
    goal: &str,
    cost: F,
) -> Option<RawPath>
where
    F: Fn(&Edge) -> u64,
{
    if start == goal {
        return Some(RawPath {
            nodes: vec![start.to_string()],
            cost: 0,
        });
    }

    let mut distances: HashMap<&str, u128> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    queue.push(QueueEntry { node: start, cost: 0 });

    while let Some(entry) = queue.pop() {
        let current_distance = match distances.get(entry.node) {
            Some(distance) if *distance < entry.cost => continue,
            Some(distance) => *distance,
            None => continue,
        };

        if entry.node == goal {
            return Some(RawPath {
                nodes: reconstruct_path(&parents, start, goal),
                cost: current_distance,
            });
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            let next_cost = current_distance + u128::from(cost(edge));
            let improves = distances.get(next).map_or(true, |known| next_cost < *known);
            if improves {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry {
                    node: next,
                    cost: next_cost,
                });
            }
        }
    }

    None
}

fn reconstruct_path(parents: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: u128,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
