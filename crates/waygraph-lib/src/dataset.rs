use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{symmetric_edges, EdgeSpec};

/// Environment variable consulted when no explicit network path is given.
pub const DATA_PATH_ENV: &str = "WAYGRAPH_DATA";

/// Default filename for the network file inside the data directory.
const NETWORK_FILENAME: &str = "network.csv";

/// On-disk layouts the loaders understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Square distance matrix: a header row of node names after one label
    /// column, then one row of distances per node.
    #[default]
    Matrix,
    /// `from,to,weight` rows with a header line.
    EdgeList,
}

/// Nodes and edges parsed from a network file, ready for
/// [`crate::GraphStore::build_with_nodes`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkData {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeSpec>,
}

impl NetworkData {
    /// Mirror every edge so the network can be travelled both ways.
    pub fn into_symmetric(self) -> Self {
        Self {
            nodes: self.nodes,
            edges: symmetric_edges(self.edges),
        }
    }
}

/// Resolve the default network location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "waygraph", "waygraph").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Locate the network file to load.
///
/// Resolution order:
/// 1. Explicit `target` argument when provided.
/// 2. `WAYGRAPH_DATA` environment variable.
/// 3. Platform-specific project data directory.
///
/// A path without an extension is treated as a directory containing
/// `network.csv`.
pub fn resolve_network_path(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        canonical_network_path(explicit)
    } else if let Some(env_path) = env::var_os(DATA_PATH_ENV) {
        canonical_network_path(Path::new(&env_path))
    } else {
        default_network_path()?
    };

    if !resolved.is_file() {
        return Err(Error::DatasetNotFound { path: resolved });
    }
    debug!("resolved network file at {}", resolved.display());
    Ok(resolved)
}

fn canonical_network_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.join(NETWORK_FILENAME)
    }
}

/// Load a network file in the given format.
pub fn load_network(path: &Path, format: InputFormat) -> Result<NetworkData> {
    let file = fs::File::open(path)?;
    let data = match format {
        InputFormat::Matrix => read_distance_matrix(file)?,
        InputFormat::EdgeList => read_edge_list(file)?,
    };
    info!(
        nodes = data.nodes.len(),
        edges = data.edges.len(),
        "loaded network from {}",
        path.display()
    );
    Ok(data)
}

/// Load a distance-matrix CSV from disk.
pub fn load_distance_matrix(path: &Path) -> Result<NetworkData> {
    load_network(path, InputFormat::Matrix)
}

/// Load an edge-list CSV from disk.
pub fn load_edge_list(path: &Path) -> Result<NetworkData> {
    load_network(path, InputFormat::EdgeList)
}

/// Parse a distance matrix.
///
/// Empty and zero cells mean "no edge"; a positive cell in row `r`, column
/// `c` becomes a directed edge `r -> c`. Rows past the header's node count
/// are ignored.
pub fn read_distance_matrix<R: Read>(reader: R) -> Result<NetworkData> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader);

    let nodes: Vec<String> = csv_reader
        .headers()?
        .iter()
        .skip(1)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    let mut edges = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let Some(from) = nodes.get(row) else {
            warn!(row = row + 1, "ignoring matrix rows beyond the header's node count");
            break;
        };

        for (column, cell) in record.iter().enumerate().skip(1) {
            let Some(to) = nodes.get(column - 1) else {
                break;
            };
            if cell.is_empty() {
                continue;
            }

            let distance: f64 = cell.parse().map_err(|_| Error::MalformedMatrix {
                row: row + 1,
                column,
                reason: format!("'{cell}' is not a number"),
            })?;
            if !distance.is_finite() || distance < 0.0 {
                return Err(Error::MalformedMatrix {
                    row: row + 1,
                    column,
                    reason: format!("distance {distance} must be a finite, non-negative number"),
                });
            }
            if distance == 0.0 {
                continue;
            }

            edges.push(EdgeSpec::new(from.clone(), to.clone(), distance));
        }
    }

    Ok(NetworkData { nodes, edges })
}

/// Parse an edge list with `from,to,weight` headers.
pub fn read_edge_list<R: Read>(reader: R) -> Result<NetworkData> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let edges = csv_reader
        .deserialize::<EdgeSpec>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(NetworkData {
        nodes: Vec::new(),
        edges,
    })
}
