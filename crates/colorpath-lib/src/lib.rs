//! colorpath library entry points.
//!
//! This crate loads a transit network description, filters its stations by
//! vehicle category ("color"), and computes the cheapest route between two
//! stations. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod eligibility;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{resolve_network_path, DEFAULT_NETWORK_FILENAME, NETWORK_PATH_ENV};
pub use eligibility::{eligible_nodes, CategoryFilter, EligibleSet};
pub use error::{EndpointRole, Error, Result};
pub use graph::{normalize, Edge, Graph, NEUTRAL_WEIGHT};
pub use network::{load_network, Connection, Network, NodeId, Station};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_dijkstra, find_route_dijkstra_by, shortest_path, RawPath};
pub use routing::{plan_route, project, RoutePlan, RouteRequest};
