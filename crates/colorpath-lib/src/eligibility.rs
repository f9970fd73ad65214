use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::network::{Network, NodeId};

/// Set of stations usable by a given category.
pub type EligibleSet = HashSet<NodeId>;

/// Vehicle category a route is planned for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "label")]
pub enum CategoryFilter {
    /// No filtering; every station is eligible.
    #[default]
    Any,
    /// Only stations admitting this label (or admitting every label).
    Label(String),
}

impl CategoryFilter {
    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryFilter::Any => None,
            CategoryFilter::Label(label) => Some(label),
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(CategoryFilter::Any, CategoryFilter::Label)
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(str::to_string).into()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::Any => f.write_str("any"),
            CategoryFilter::Label(label) => f.write_str(label),
        }
    }
}

/// Collect the stations a vehicle of `category` may use.
pub fn eligible_nodes(network: &Network, category: &CategoryFilter) -> EligibleSet {
    network
        .stations()
        .filter(|(_, station)| match category {
            CategoryFilter::Any => true,
            CategoryFilter::Label(label) => station.admits(label),
        })
        .map(|(id, _)| id.clone())
        .collect()
}
