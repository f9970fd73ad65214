//! Output formatting for route rendering.
//!
//! This module turns a [`RouteSummary`] into the text printed by the CLI and
//! maps library errors to user-facing messages.

use std::fmt::Write;

use clap::ValueEnum;
use colorpath_lib::{Error as LibError, RouteRenderMode, RouteSummary, NETWORK_PATH_ENV};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly listing with one station per line.
    #[default]
    Text,
    /// Markdown with a result heading.
    Rich,
    /// Pretty-printed JSON summary.
    Json,
    /// Minimal path with `+`/`|`/`-` markers.
    Basic,
}

/// Render a route summary in the requested format.
///
/// `show_raw` appends the unprojected path for the text formats; JSON always
/// includes it.
pub fn render_route(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: ColorPalette,
    show_raw: bool,
) -> Result<String, serde_json::Error> {
    let mut buffer = match format {
        OutputFormat::Text => render_text(summary, palette),
        OutputFormat::Rich => summary.render(RouteRenderMode::Markdown),
        OutputFormat::Basic => render_basic(summary),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(summary)?;
            json.push('\n');
            return Ok(json);
        }
    };

    if show_raw {
        let _ = writeln!(buffer, "\nRaw path: {}", summary.raw_path.join(" -> "));
    }
    Ok(buffer)
}

fn render_text(summary: &RouteSummary, palette: ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {bold}{}{reset} to {bold}{}{reset} ({} hops; cost: {}; category: {cyan}{}{reset}):",
        summary.root,
        summary.goal,
        summary.hops,
        summary.cost,
        summary.category,
        bold = palette.white_bold,
        cyan = palette.cyan,
        reset = palette.reset,
    );

    if summary.steps.is_empty() {
        let _ = writeln!(
            buffer,
            "{}(no stations on this route are usable by the category){}",
            palette.gray, palette.reset
        );
        return buffer;
    }

    let last = summary.steps.len() - 1;
    for (position, step) in summary.steps.iter().enumerate() {
        let tag = if position == 0 && step.id == summary.root {
            format!("{}STRT{} ", palette.tag_root, palette.reset)
        } else if position == last && step.id == summary.goal {
            format!("{}GOAL{} ", palette.tag_goal, palette.reset)
        } else {
            "     ".to_string()
        };
        let _ = writeln!(
            buffer,
            "{gray}{:>3}{reset} {tag}{bold}{}{reset}",
            step.index,
            step.id,
            gray = palette.gray,
            bold = palette.white_bold,
            reset = palette.reset,
        );
    }
    buffer
}

fn render_basic(summary: &RouteSummary) -> String {
    let mut buffer = String::new();
    let last = summary.steps.len().saturating_sub(1);
    for (position, step) in summary.steps.iter().enumerate() {
        let marker = if position == 0 {
            '+'
        } else if position == last {
            '-'
        } else {
            '|'
        };
        let _ = writeln!(buffer, "{marker} {}", step.id);
    }
    buffer
}

/// Build the message printed to stderr when a command fails.
pub fn describe_error(error: &anyhow::Error) -> String {
    let Some(lib_error) = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<LibError>())
    else {
        return format!("Error: {error:#}");
    };

    match lib_error {
        LibError::NodeNotFound {
            role,
            name,
            suggestions,
        } => {
            let mut message = format!("Unknown {role} station '{name}'.");
            if !suggestions.is_empty() {
                let quoted = suggestions
                    .iter()
                    .map(|s| format!("'{s}'"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = write!(message, " Did you mean {quoted}?");
            }
            message
        }
        LibError::NoPath { root, goal } => format!(
            "No path found between {root} and {goal}.\n\
             Connections are one-way; check that the network links them in this direction."
        ),
        LibError::GraphFormat { node, target } => format!(
            "Invalid network: station '{node}' links to unknown station '{target}'."
        ),
        LibError::NetworkNotFound { path } => format!(
            "Network graph not found at {}.\n\
             Pass --graph-json-path or set {NETWORK_PATH_ENV}.",
            path.display()
        ),
        _ => format!("Error: {error:#}"),
    }
}
