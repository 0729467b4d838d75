//! Network loading plus the `nodes` and `hub` command handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use waygraph_lib::{load_network, resolve_network_path, InputFormat, RouteEngine};

use crate::output::{print_json, OutputFormat};

/// Layout of the network file passed with `--input-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormatArg {
    /// Square distance matrix with a header row of node names.
    #[default]
    Matrix,
    /// `from,to,weight` rows.
    Edges,
}

impl From<InputFormatArg> for InputFormat {
    fn from(value: InputFormatArg) -> Self {
        match value {
            InputFormatArg::Matrix => InputFormat::Matrix,
            InputFormatArg::Edges => InputFormat::EdgeList,
        }
    }
}

/// Arguments describing where the network comes from.
#[derive(Debug, Clone, Args)]
pub struct NetworkArgs {
    /// Network file, or a directory containing `network.csv`.
    /// Falls back to `WAYGRAPH_DATA`, then the platform data directory.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Layout of the network file.
    #[arg(long, value_enum, default_value_t = InputFormatArg::Matrix, global = true)]
    pub input_format: InputFormatArg,

    /// Mirror every edge so the network can be travelled in both directions.
    #[arg(long, global = true)]
    pub undirected: bool,
}

/// Resolve, load, and build the network described by `args`.
pub fn load_engine(args: &NetworkArgs) -> Result<RouteEngine> {
    let path = resolve_network_path(args.data.as_deref())
        .context("failed to locate the network file")?;
    let mut data = load_network(&path, args.input_format.into())
        .with_context(|| format!("failed to load network from {}", path.display()))?;
    if args.undirected {
        data = data.into_symmetric();
    }

    let engine = RouteEngine::new();
    engine
        .load(&data)
        .with_context(|| format!("failed to build graph from {}", path.display()))?;
    Ok(engine)
}

/// Handle the `nodes` subcommand.
pub fn handle_nodes(engine: &RouteEngine, format: OutputFormat) -> Result<()> {
    let names = engine.node_names()?;
    match format {
        OutputFormat::Json => print_json(&names)?,
        OutputFormat::Text => {
            for (index, name) in names.iter().enumerate() {
                println!("{index:>4}  {name}");
            }
        }
    }
    Ok(())
}

/// Handle the `hub` subcommand.
pub fn handle_hub(
    engine: &RouteEngine,
    hub: &str,
    max_hops: usize,
    format: OutputFormat,
) -> Result<()> {
    let summary = engine.hub_report(hub, max_hops)?;
    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Text => print!("{}", summary.render_plain()),
    }
    Ok(())
}
