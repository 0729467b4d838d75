//! Multi-route command handlers: `paths` and `alternatives`.

use anyhow::Result;
use tracing::debug;

use waygraph_lib::{PathResult, PathSummary, RouteEngine};

use crate::output::{print_json, render_path_list, OutputFormat};

/// Handle the `paths` subcommand (every simple path up to `max_depth` edges).
pub fn handle_paths(
    engine: &RouteEngine,
    from: &str,
    to: &str,
    max_depth: usize,
    format: OutputFormat,
) -> Result<()> {
    let paths = engine.all_simple_paths(from, to, max_depth)?;
    debug!(count = paths.len(), max_depth, "simple paths enumerated");
    print_paths(engine, from, to, &paths, format)
}

/// Handle the `alternatives` subcommand (K shortest loopless paths).
pub fn handle_alternatives(
    engine: &RouteEngine,
    from: &str,
    to: &str,
    k: usize,
    format: OutputFormat,
) -> Result<()> {
    let paths = engine.k_shortest_paths(from, to, k)?;
    debug!(count = paths.len(), k, "alternative routes found");
    print_paths(engine, from, to, &paths, format)
}

fn print_paths(
    engine: &RouteEngine,
    from: &str,
    to: &str,
    paths: &[PathResult],
    format: OutputFormat,
) -> Result<()> {
    let summaries = paths
        .iter()
        .map(|path| engine.describe(path))
        .collect::<waygraph_lib::Result<Vec<PathSummary>>>()?;

    match format {
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Text => println!("{}", render_path_list(from, to, &summaries)),
    }
    Ok(())
}
