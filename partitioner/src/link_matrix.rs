//! The normalized contig-contig link matrix.

use crate::error::PartitionError;
use definitions::{ContactEdge, DataSet};
use std::collections::HashMap;

/// Dense, row-major square matrix of normalized link weights, indexed
/// by contig load order. Storage is O(N^2), which bounds the practical
/// contig count to the tens of thousands; most cells of a typical run
/// are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkMatrix {
    n: usize,
    weights: Vec<i64>,
}

impl LinkMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            weights: vec![0; n * n],
        }
    }
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.weights[i * self.n + j]
    }
    pub fn set(&mut self, i: usize, j: usize, weight: i64) {
        self.weights[i * self.n + j] = weight;
    }
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
    /// Build the matrix from the loaded edges.
    ///
    /// Each observed count is normalized against the squared largest
    /// RE count, `observed * longest_re^2 / (re_a * re_b)`, truncating
    /// integer arithmetic, and stored at both mirror cells. Self-pairs
    /// contribute nothing. When two edges name the same unordered pair,
    /// the later row overwrites the earlier one.
    pub fn from_edges(ds: &DataSet) -> Result<Self, PartitionError> {
        debug!("START\tLinkMatrix");
        let index = ds.name_to_index();
        let mut matrix = Self::zeros(ds.contigs.len());
        let longest_squared = (ds.longest_re as i64) * (ds.longest_re as i64);
        for edge in ds.edges.iter() {
            let a = resolve(&index, &edge.contig_a, edge)?;
            let b = resolve(&index, &edge.contig_b, edge)?;
            if a == b {
                continue;
            }
            if edge.re_a == 0 || edge.re_b == 0 {
                return Err(PartitionError::ZeroReSites {
                    contig_a: edge.contig_a.clone(),
                    contig_b: edge.contig_b.clone(),
                });
            }
            let weight =
                edge.observed_links as i64 * longest_squared / (edge.re_a as i64 * edge.re_b as i64);
            matrix.set(a, b, weight);
            matrix.set(b, a, weight);
        }
        Ok(matrix)
    }
}

fn resolve(
    index: &HashMap<&str, usize>,
    name: &str,
    edge: &ContactEdge,
) -> Result<usize, PartitionError> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| PartitionError::UnknownContig {
            contig_a: edge.contig_a.clone(),
            contig_b: edge.contig_b.clone(),
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use definitions::ContigRecord;
    fn edge(a: &str, b: &str, re_a: usize, re_b: usize, observed: usize) -> ContactEdge {
        ContactEdge {
            contig_a: a.to_string(),
            contig_b: b.to_string(),
            re_a,
            re_b,
            observed_links: observed,
            expected_links: 0.0,
        }
    }
    fn mock_dataset(edges: Vec<ContactEdge>) -> DataSet {
        let contigs = vec![
            ContigRecord::new("ctg1", 10, 1000),
            ContigRecord::new("ctg2", 5, 500),
            ContigRecord::new("ctg3", 8, 800),
        ];
        DataSet::new("counts.txt", contigs, 10, edges)
    }
    #[test]
    fn normalized_weight() {
        let ds = mock_dataset(vec![edge("ctg1", "ctg2", 10, 5, 4)]);
        let matrix = LinkMatrix::from_edges(&ds).unwrap();
        // 4 * 10^2 / (10 * 5)
        assert_eq!(matrix.get(0, 1), 8);
        assert_eq!(matrix.get(1, 0), 8);
    }
    #[test]
    fn truncating_arithmetic() {
        let ds = mock_dataset(vec![edge("ctg1", "ctg3", 10, 8, 3)]);
        let matrix = LinkMatrix::from_edges(&ds).unwrap();
        // 3 * 100 / 80 = 3.75, truncated.
        assert_eq!(matrix.get(0, 2), 3);
    }
    #[test]
    fn symmetric_with_zero_diagonal() {
        let edges = vec![
            edge("ctg1", "ctg2", 10, 5, 4),
            edge("ctg2", "ctg3", 5, 8, 7),
        ];
        let ds = mock_dataset(edges);
        let matrix = LinkMatrix::from_edges(&ds).unwrap();
        assert!(matrix.is_symmetric());
        assert!((0..matrix.n()).all(|i| matrix.get(i, i) == 0));
    }
    #[test]
    fn self_pair_contributes_nothing() {
        let ds = mock_dataset(vec![edge("ctg2", "ctg2", 5, 5, 100)]);
        let matrix = LinkMatrix::from_edges(&ds).unwrap();
        assert_eq!(matrix.get(1, 1), 0);
    }
    #[test]
    fn zero_re_sites_is_an_error() {
        let ds = mock_dataset(vec![edge("ctg1", "ctg2", 0, 5, 4)]);
        match LinkMatrix::from_edges(&ds) {
            Err(PartitionError::ZeroReSites { contig_a, contig_b }) => {
                assert_eq!(contig_a, "ctg1");
                assert_eq!(contig_b, "ctg2");
            }
            other => panic!("{:?}", other),
        }
    }
    #[test]
    fn unknown_name_is_an_error() {
        let ds = mock_dataset(vec![edge("ctg1", "ctg9", 10, 5, 4)]);
        match LinkMatrix::from_edges(&ds) {
            Err(PartitionError::UnknownContig { name, .. }) => assert_eq!(name, "ctg9"),
            other => panic!("{:?}", other),
        }
    }
    #[test]
    fn duplicated_pair_last_write_wins() {
        let edges = vec![
            edge("ctg1", "ctg2", 10, 5, 4),
            edge("ctg2", "ctg1", 5, 10, 1),
        ];
        let ds = mock_dataset(edges);
        let matrix = LinkMatrix::from_edges(&ds).unwrap();
        // 1 * 100 / 50 = 2, no summation with the earlier row.
        assert_eq!(matrix.get(0, 1), 2);
        assert_eq!(matrix.get(1, 0), 2);
    }
    #[test]
    fn empty_dataset() {
        let ds = DataSet::new("counts.txt", vec![], 0, vec![]);
        let matrix = LinkMatrix::from_edges(&ds).unwrap();
        assert_eq!(matrix.n(), 0);
    }
}
