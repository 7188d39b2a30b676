//! Pipeline -- the whole partitioning run, from the two input tables to
//! the per-group contig tables.
//!
//! The stages run strictly in sequence: load, short-contig filter,
//! matrix construction, repeat filter, clustering, split. Any stage
//! error aborts the run.

use definitions::DataSet;
use log::*;
use partitioner::cluster::{self, ClusterStrategy, GreedyLinkClustering};
use partitioner::entry::Entry;
use partitioner::error::PartitionError;
use partitioner::filter_short::{FilterShortContigs, ShortContigConfig};
use partitioner::link_matrix::LinkMatrix;
use partitioner::repeat_filter::{FilterRepeats, RepeatFilterConfig};
use partitioner::split::SplitClusters;
use serde::{Deserialize, Serialize};
use std::io::BufWriter;
use std::path::PathBuf;

/// The configuration of a partitioning run. Everything a user can set;
/// the TOML profile of the `pipeline` subcommand deserializes into this.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    /// The path to the contig table.
    contigs_file: PathBuf,
    /// The path to the edge table.
    edges_file: PathBuf,
    /// Number of linkage groups.
    k: usize,
    #[serde(default = "default_min_res")]
    min_res: usize,
    #[serde(default = "default_max_link_density")]
    max_link_density: f64,
    #[serde(default)]
    verbose: usize,
    /// Dump the final dataset with its assignments as JSON, if set.
    #[serde(default)]
    assignments_out: Option<PathBuf>,
}

fn default_min_res() -> usize {
    partitioner::filter_short::DEFAULT_MIN_RES
}

fn default_max_link_density() -> f64 {
    partitioner::repeat_filter::DEFAULT_MAX_LINK_DENSITY
}

impl PipelineConfig {
    pub fn new(
        contigs_file: PathBuf,
        edges_file: PathBuf,
        k: usize,
        min_res: usize,
        max_link_density: f64,
        assignments_out: Option<PathBuf>,
    ) -> Self {
        Self {
            contigs_file,
            edges_file,
            k,
            min_res,
            max_link_density,
            verbose: 0,
            assignments_out,
        }
    }
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<Vec<PathBuf>, PartitionError> {
    let level = match config.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    run_partition(config)
}

/// The main function body of the partitioning run. Returns the written
/// per-group file names, in group order.
pub fn run_partition(config: &PipelineConfig) -> Result<Vec<PathBuf>, PartitionError> {
    assert!(0 < config.k, "the number of linkage groups must be positive");
    let mut ds = DataSet::entry(&config.contigs_file, &config.edges_file)?;
    ds.filter_short_contigs(&ShortContigConfig::new(config.min_res));
    let mut matrix = LinkMatrix::from_edges(&ds)?;
    ds.filter_repeats(&mut matrix, &RepeatFilterConfig::new(config.max_link_density));
    let clusters = match config.k {
        1 => cluster::trivial_clusters(&ds.contigs),
        _ => GreedyLinkClustering::default().cluster(&matrix, &ds.contigs, config.k)?,
    };
    cluster::validate_clusters(&clusters, config.k, ds.contigs.len())?;
    ds.set_assignments(&clusters);
    let outfiles = ds.split_clusters(&clusters, config.k)?;
    if let Some(path) = &config.assignments_out {
        let mut wtr = std::fs::File::create(path).map(BufWriter::new)?;
        serde_json::ser::to_writer(&mut wtr, &ds).map_err(std::io::Error::from)?;
        debug!("Dumped dataset into {}", path.display());
    }
    info!("Success");
    Ok(outfiles)
}
