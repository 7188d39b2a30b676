//! Definitions -- the data model of the Hi-C partitioning pipeline.
//! The pipeline stages pass messages through one, possibly large, structure named [DataSet](DataSet).
//! It can be serialized into a JSON object to incorporate with other programs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataSet {
    /// Path of the contig table this dataset was loaded from.
    /// Output file names are derived from it.
    pub contigs_file: String,
    pub contigs: Vec<ContigRecord>,
    pub edges: Vec<ContactEdge>,
    /// The largest RE-site count over all contigs. It anchors the
    /// link-count normalization.
    pub longest_re: usize,
    pub assignments: Vec<Assignment>,
}

impl DataSet {
    pub fn new(
        contigs_file: &str,
        contigs: Vec<ContigRecord>,
        longest_re: usize,
        edges: Vec<ContactEdge>,
    ) -> Self {
        Self {
            contigs_file: contigs_file.to_string(),
            contigs,
            edges,
            longest_re,
            assignments: vec![],
        }
    }
    /// The name -> load-order index map. Total over the loaded contigs.
    /// An edge name missing from this map is a hard error downstream,
    /// never a default index.
    pub fn name_to_index(&self) -> HashMap<&str, usize> {
        self.contigs
            .iter()
            .enumerate()
            .map(|(index, contig)| (contig.name.as_str(), index))
            .collect()
    }
    /// Record the clustering result, cluster by cluster.
    pub fn set_assignments(&mut self, clusters: &[Vec<usize>]) {
        self.assignments = clusters
            .iter()
            .enumerate()
            .flat_map(|(cluster, members)| {
                members
                    .iter()
                    .map(move |&contig| Assignment::new(contig, cluster))
            })
            .collect();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContigRecord {
    /// Name of the contig. It is unique over the dataset.
    pub name: String,
    /// Number of restriction-enzyme sites on this contig, a proxy for
    /// its expected contact density.
    pub re_sites: usize,
    pub length: usize,
    /// Set by the short-contig filter and the repeat filter. Once set,
    /// it is never cleared.
    pub excluded: bool,
}

impl ContigRecord {
    pub fn new(name: &str, re_sites: usize, length: usize) -> Self {
        Self {
            name: name.to_string(),
            re_sites,
            length,
            excluded: false,
        }
    }
}

impl std::fmt::Display for ContigRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.re_sites, self.length)
    }
}

/// One row of the edge table. Contig identity is carried by name;
/// resolution against the index map happens when the matrix is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEdge {
    pub contig_a: String,
    pub contig_b: String,
    pub re_a: usize,
    pub re_b: usize,
    pub observed_links: usize,
    pub expected_links: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Load-order index of the contig.
    pub contig: usize,
    pub cluster: usize,
}

impl Assignment {
    pub fn new(contig: usize, cluster: usize) -> Self {
        Self { contig, cluster }
    }
}

/// Cluster id 0..K-1 -> ordered contig indices.
pub type Clusters = Vec<Vec<usize>>;
