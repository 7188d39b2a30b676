//! The clustering collaborator boundary.
//!
//! The pipeline hands the finished matrix, the contig list with its
//! exclusion flags and the target group count to a [ClusterStrategy]
//! and gets back K groups of contig indices. Alternate linkage
//! heuristics plug in behind the trait without touching the
//! normalization stages. Excluded contigs are never removed from the
//! matrix beforehand; whether they appear in the output is the
//! strategy's decision.

use crate::error::PartitionError;
use crate::link_matrix::LinkMatrix;
use definitions::{Clusters, ContigRecord};

pub trait ClusterStrategy {
    /// Partition the non-excluded contigs into exactly `k` groups.
    /// Identical inputs must yield an identical result, so the whole
    /// pipeline stays reproducible.
    fn cluster(
        &self,
        matrix: &LinkMatrix,
        contigs: &[ContigRecord],
        k: usize,
    ) -> Result<Clusters, PartitionError>;
}

/// One group holding every non-excluded contig, for K = 1 runs.
pub fn trivial_clusters(contigs: &[ContigRecord]) -> Clusters {
    let members = contigs
        .iter()
        .enumerate()
        .filter(|(_, contig)| !contig.excluded)
        .map(|(index, _)| index)
        .collect();
    vec![members]
}

/// Check the collaborator contract after the call: exactly `k` groups,
/// every index within the loaded contigs.
pub fn validate_clusters(
    clusters: &Clusters,
    k: usize,
    contig_num: usize,
) -> Result<(), PartitionError> {
    if clusters.len() != k {
        return Err(PartitionError::ClusterCount {
            expected: k,
            got: clusters.len(),
        });
    }
    for (cluster, members) in clusters.iter().enumerate() {
        if let Some(&index) = members.iter().find(|&&index| contig_num <= index) {
            return Err(PartitionError::ClusterIndex {
                cluster,
                index,
                len: contig_num,
            });
        }
    }
    Ok(())
}

/// Greedy agglomeration over the link matrix.
///
/// Every non-excluded contig starts as a singleton; the pair of groups
/// with the heaviest total inter-group weight is merged until K groups
/// remain. The weight of a pair reads both mirror cells, so the result
/// does not depend on which triangle the repeat filter happened to
/// leave heavier. Ties fall to the smaller group indices, members stay
/// in load order and groups are ordered by their smallest member.
#[derive(Debug, Clone, Default)]
pub struct GreedyLinkClustering {}

impl ClusterStrategy for GreedyLinkClustering {
    fn cluster(
        &self,
        matrix: &LinkMatrix,
        contigs: &[ContigRecord],
        k: usize,
    ) -> Result<Clusters, PartitionError> {
        debug!("START\tCluster");
        assert!(0 < k, "target group count must be positive");
        let mut clusters: Clusters = contigs
            .iter()
            .enumerate()
            .filter(|(_, contig)| !contig.excluded)
            .map(|(index, _)| vec![index])
            .collect();
        if clusters.len() < k {
            return Err(PartitionError::ClusterCount {
                expected: k,
                got: clusters.len(),
            });
        }
        while k < clusters.len() {
            let (mut merge, mut heaviest) = ((0, 1), link_weight(matrix, &clusters[0], &clusters[1]));
            for x in 0..clusters.len() {
                for y in x + 1..clusters.len() {
                    let weight = link_weight(matrix, &clusters[x], &clusters[y]);
                    if heaviest < weight {
                        merge = (x, y);
                        heaviest = weight;
                    }
                }
            }
            let (x, y) = merge;
            let absorbed = clusters.remove(y);
            clusters[x].extend(absorbed);
            clusters[x].sort_unstable();
        }
        clusters.sort_unstable_by_key(|members| members[0]);
        Ok(clusters)
    }
}

fn link_weight(matrix: &LinkMatrix, xs: &[usize], ys: &[usize]) -> i64 {
    xs.iter()
        .map(|&i| {
            ys.iter()
                .map(|&j| matrix.get(i, j) + matrix.get(j, i))
                .sum::<i64>()
        })
        .sum()
}
