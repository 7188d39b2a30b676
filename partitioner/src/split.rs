//! Per-cluster output tables.
//!
//! Each linkage group gets its own contig table, re-usable as input to
//! the downstream ordering stages.

use crate::error::PartitionError;
use definitions::{Clusters, DataSet};
use std::ffi::OsStr;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub trait SplitClusters {
    fn split_clusters(&self, clusters: &Clusters, k: usize)
        -> Result<Vec<PathBuf>, PartitionError>;
}

impl SplitClusters for DataSet {
    fn split_clusters(
        &self,
        clusters: &Clusters,
        k: usize,
    ) -> Result<Vec<PathBuf>, PartitionError> {
        debug!("START\tSplitClusters");
        let mut outfiles = vec![];
        for (j, members) in clusters.iter().enumerate() {
            let outfile = cluster_file(Path::new(&self.contigs_file), k, j + 1);
            let mut wtr = std::fs::File::create(&outfile).map(BufWriter::new)?;
            writeln!(wtr, "#Contig\tRECounts\tLength")?;
            for &index in members.iter() {
                let contig =
                    self.contigs
                        .get(index)
                        .ok_or_else(|| PartitionError::ClusterIndex {
                            cluster: j,
                            index,
                            len: self.contigs.len(),
                        })?;
                writeln!(wtr, "{}", contig)?;
            }
            info!("Wrote {} contigs into {}", members.len(), outfile.display());
            outfiles.push(outfile);
        }
        Ok(outfiles)
    }
}

/// Output name for the 1-based `group` of a K-group run:
/// `counts_GATC.txt` with K = 3 becomes `counts_GATC.3g1.txt` and so on.
pub fn cluster_file(contigs_file: &Path, k: usize, group: usize) -> PathBuf {
    let stem = contigs_file
        .file_stem()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy();
    contigs_file.with_file_name(format!("{}.{}g{}.txt", stem, k, group))
}
