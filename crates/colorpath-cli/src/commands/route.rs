//! Route command handler for computing paths between stations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use colorpath_cli::output::{render_route, OutputFormat};
use colorpath_cli::terminal::ColorPalette;
use colorpath_lib::{load_network, plan_route, resolve_network_path, RouteRequest, RouteSummary};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Graph description to load, if given explicitly.
    pub graph_json_path: Option<PathBuf>,
    /// Starting station.
    pub root: String,
    /// Destination station.
    pub goal: String,
    /// Vehicle category to restrict the route to.
    pub color: Option<String>,
    /// Presentation of the result.
    pub format: OutputFormat,
    /// Also print the unprojected path.
    pub show_raw: bool,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.root.clone(), self.goal.clone()).with_category(self.color.clone())
    }
}

/// Handle the route command.
///
/// Loads the network, plans the route and prints it to stdout.
pub fn handle_route_command(args: &RouteCommandArgs) -> Result<()> {
    info!(
        root = %args.root,
        goal = %args.goal,
        color = ?args.color,
        "calculating the shortest path"
    );

    let path = resolve_network_path(args.graph_json_path.as_deref())
        .context("failed to locate the network graph")?;
    let network = load_network(&path)
        .with_context(|| format!("failed to load network from {}", path.display()))?;

    let plan = plan_route(&network, &args.to_request()).context("failed to plan route")?;
    let summary = RouteSummary::from_plan(&plan);

    let rendered = render_route(&summary, args.format, ColorPalette::detect(), args.show_raw)
        .context("failed to render route")?;
    print!("{rendered}");
    Ok(())
}
