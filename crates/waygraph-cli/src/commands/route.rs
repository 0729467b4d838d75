//! Single-route command handlers: `route`, `all-pairs`, and `compare`.

use anyhow::Result;

use waygraph_lib::RouteEngine;

use crate::output::{print_json, render_path, unreachable_message, OutputFormat};

/// Handle the `route` subcommand, optionally routing around a hub.
pub fn handle_route(
    engine: &RouteEngine,
    from: &str,
    to: &str,
    avoid: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let (label, path) = match avoid {
        Some(hub) => (
            "dijkstra (avoiding hub)",
            engine.shortest_path_avoiding(from, to, hub)?,
        ),
        None => ("dijkstra", engine.shortest_path(from, to)?),
    };
    let summary = engine.describe(&path)?;

    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Text => println!("{}", render_path(label, from, to, &summary)),
    }
    Ok(())
}

/// Handle the `all-pairs` subcommand.
pub fn handle_all_pairs(
    engine: &RouteEngine,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let path = engine.all_pairs_shortest_path(from, to)?;
    let summary = engine.describe(&path)?;

    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Text => println!("{}", render_path("floyd-warshall", from, to, &summary)),
    }
    Ok(())
}

/// Handle the `compare` subcommand.
pub fn handle_compare(
    engine: &RouteEngine,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let comparison = engine.compare(from, to)?;

    match format {
        OutputFormat::Json => print_json(&comparison)?,
        OutputFormat::Text => {
            if !comparison.dijkstra.reachable && !comparison.all_pairs.reachable {
                println!("{}", unreachable_message(from, to));
            } else {
                print!("{}", comparison.render_plain());
            }
        }
    }
    Ok(())
}
