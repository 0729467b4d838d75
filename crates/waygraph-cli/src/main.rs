use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waygraph_cli::commands::network::{handle_hub, handle_nodes, load_engine, NetworkArgs};
use waygraph_cli::commands::paths::{handle_alternatives, handle_paths};
use waygraph_cli::commands::route::{handle_all_pairs, handle_compare, handle_route};
use waygraph_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Routing queries over weighted location networks")]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// Output format for query results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List node names in index order.
    Nodes,
    /// Shortest path between two nodes using Dijkstra.
    Route {
        /// Starting node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
        /// Node that must not be passed through.
        #[arg(long)]
        avoid: Option<String>,
    },
    /// Shortest path answered from the all-pairs (Floyd-Warshall) table.
    AllPairs {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Run Dijkstra and all-pairs for the same pair and report agreement.
    Compare {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Every simple path up to a depth bound, cheapest first.
    Paths {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
        /// Maximum number of edges per path.
        #[arg(long)]
        max_depth: usize,
    },
    /// Up to K shortest loopless paths (Yen's algorithm).
    Alternatives {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
        /// Number of paths to return.
        #[arg(short = 'k', long = "count", default_value_t = 3)]
        k: usize,
    },
    /// Report which nodes a hub reaches within a hop limit.
    Hub {
        /// Hub node name.
        #[arg(long)]
        name: String,
        /// Maximum number of edges from the hub.
        #[arg(long, default_value_t = 2)]
        max_hops: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let engine = load_engine(&cli.network)?;
    let format = cli.format;

    match cli.command {
        Command::Nodes => handle_nodes(&engine, format),
        Command::Route { from, to, avoid } => {
            handle_route(&engine, &from, &to, avoid.as_deref(), format)
        }
        Command::AllPairs { from, to } => handle_all_pairs(&engine, &from, &to, format),
        Command::Compare { from, to } => handle_compare(&engine, &from, &to, format),
        Command::Paths {
            from,
            to,
            max_depth,
        } => handle_paths(&engine, &from, &to, max_depth, format),
        Command::Alternatives { from, to, k } => {
            handle_alternatives(&engine, &from, &to, k, format)
        }
        Command::Hub { name, max_hops } => handle_hub(&engine, &name, max_hops, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
