//! Loading location and edge tables into a [`RoadNetwork`].
//!
//! A dataset is a directory holding two CSV files:
//!
//! - `locations.csv` with `name,latitude,longitude`
//! - `edges.csv` with `from,to,distance`
//!
//! The continental US table ships embedded and is used whenever no directory
//! is configured.

use std::env;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::network::RoadNetwork;

/// File holding the location table.
pub const LOCATIONS_FILENAME: &str = "locations.csv";
/// File holding the edge table.
pub const EDGES_FILENAME: &str = "edges.csv";
/// Environment variable that points at a dataset directory.
pub const DATA_DIR_ENV: &str = "CITYPATH_DATA_DIR";

const EMBEDDED_LOCATIONS: &str = include_str!("../data/locations.csv");
const EMBEDDED_EDGES: &str = include_str!("../data/edges.csv");

/// Where a loaded dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Directory(PathBuf),
    Embedded,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Directory(path) => write!(f, "{}", path.display()),
            DatasetSource::Embedded => f.write_str("embedded"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    distance: f64,
}

/// Build the network bundled with the library.
pub fn embedded_network() -> Result<RoadNetwork> {
    network_from_readers(EMBEDDED_LOCATIONS.as_bytes(), EMBEDDED_EDGES.as_bytes())
}

/// Load a network from a dataset directory.
pub fn load_network(dir: &Path) -> Result<RoadNetwork> {
    let locations_path = dir.join(LOCATIONS_FILENAME);
    let edges_path = dir.join(EDGES_FILENAME);
    if !locations_path.is_file() || !edges_path.is_file() {
        return Err(Error::DatasetNotFound {
            path: dir.to_path_buf(),
        });
    }

    let network = network_from_readers(
        fs::File::open(&locations_path)?,
        fs::File::open(&edges_path)?,
    )?;
    info!(
        path = %dir.display(),
        locations = network.geo.len(),
        edges = network.graph.edge_count(),
        "loaded dataset"
    );
    Ok(network)
}

/// Parse and validate both tables, inserting locations before edges.
pub fn network_from_readers<L: Read, E: Read>(locations: L, edges: E) -> Result<RoadNetwork> {
    let mut network = RoadNetwork::new();

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(locations);
    for (index, record) in reader.deserialize::<LocationRecord>().enumerate() {
        let record = record?;
        if !record.latitude.is_finite() || !record.longitude.is_finite() {
            return Err(Error::DatasetValidation {
                message: format!(
                    "{LOCATIONS_FILENAME} row {}: non-finite coordinate for '{}'",
                    index + 1,
                    record.name
                ),
            });
        }
        network.add_location(record.name, record.latitude, record.longitude);
    }

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(edges);
    for (index, record) in reader.deserialize::<EdgeRecord>().enumerate() {
        let record = record?;
        validate_edge(&network, index + 1, &record)?;
        network.add_edge(&record.from, &record.to, record.distance);
    }

    debug!(
        locations = network.geo.len(),
        navigable = network.graph.location_count(),
        edges = network.graph.edge_count(),
        "built road network"
    );
    Ok(network)
}

fn validate_edge(network: &RoadNetwork, row: usize, record: &EdgeRecord) -> Result<()> {
    let fail = |message: String| Error::DatasetValidation {
        message: format!("{EDGES_FILENAME} row {row}: {message}"),
    };

    if !record.distance.is_finite() || record.distance <= 0.0 {
        return Err(fail(format!(
            "distance between '{}' and '{}' must be positive, got {}",
            record.from, record.to, record.distance
        )));
    }
    if record.from == record.to {
        return Err(fail(format!("self-loop on '{}'", record.from)));
    }
    for endpoint in [&record.from, &record.to] {
        if !network.geo.contains(endpoint) {
            return Err(fail(format!(
                "'{endpoint}' is not declared in {LOCATIONS_FILENAME}"
            )));
        }
    }
    Ok(())
}

/// Resolve the platform data directory for citypath datasets.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "citypath", "citypath").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate and load the dataset.
///
/// Resolution order:
/// 1. Explicit `target` argument when provided.
/// 2. `CITYPATH_DATA_DIR` environment variable.
/// 3. Platform data directory, when it holds both files.
/// 4. The embedded dataset.
pub fn resolve_network(target: Option<&Path>) -> Result<(RoadNetwork, DatasetSource)> {
    if let Some(explicit) = target {
        let network = load_network(explicit)?;
        return Ok((network, DatasetSource::Directory(explicit.to_path_buf())));
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        let dir = PathBuf::from(env_path);
        let network = load_network(&dir)?;
        return Ok((network, DatasetSource::Directory(dir)));
    }

    match default_data_dir() {
        Ok(dir) if dir.join(LOCATIONS_FILENAME).is_file() && dir.join(EDGES_FILENAME).is_file() => {
            let network = load_network(&dir)?;
            return Ok((network, DatasetSource::Directory(dir)));
        }
        Ok(dir) => debug!(path = %dir.display(), "no dataset in platform data directory"),
        Err(error) => debug!(%error, "platform data directory unavailable"),
    }

    Ok((embedded_network()?, DatasetSource::Embedded))
}
