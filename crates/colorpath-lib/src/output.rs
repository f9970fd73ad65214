use std::fmt::Write;

use serde::Serialize;

use crate::eligibility::CategoryFilter;
use crate::network::NodeId;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Markdown,
}

/// Step within a reported route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub root: NodeId,
    pub goal: NodeId,
    pub category: CategoryFilter,
    pub cost: u128,
    pub hops: usize,
    pub steps: Vec<RouteStep>,
    pub raw_path: Vec<NodeId>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, id)| RouteStep {
                index,
                id: id.clone(),
            })
            .collect();

        Self {
            root: plan.root.clone(),
            goal: plan.goal.clone(),
            category: plan.category.clone(),
            cost: plan.cost,
            hops: plan.hop_count(),
            steps,
            raw_path: plan.raw_path.clone(),
        }
    }

    /// Reported station identifiers in order.
    pub fn path(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.id.as_str()).collect()
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Markdown => self.render_markdown(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Shortest path from {} to {} ({} hops, cost: {}, category: {}):",
            self.root, self.goal, self.hops, self.cost, self.category
        );
        if self.steps.is_empty() {
            let _ = writeln!(buffer, "  (no stations usable by this category)");
        }
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: {}", step.index, step.id);
        }
        buffer
    }

    fn render_markdown(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "# RESULT");
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "Shortest path from **{}** to **{}** (category: `{}`, cost: {}):",
            self.root, self.goal, self.category, self.cost
        );
        let _ = writeln!(buffer);
        for step in &self.steps {
            let _ = writeln!(buffer, "{}. `{}`", step.index + 1, step.id);
        }
        buffer
    }
}
