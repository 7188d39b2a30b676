//! Error taxonomy of the partitioning pipeline.
//! Every variant aborts the run; nothing is silently recovered.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartitionError {
    /// A table field failed to convert to its expected type. Line and
    /// column are 1-based.
    #[error("{path}:{line}:{column}: can not parse {value:?} as {expected}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
        value: String,
        expected: &'static str,
    },
    /// Contig names key the index map, so a repeated name would shadow
    /// an earlier record.
    #[error("{path}:{line}: contig `{name}` is declared twice")]
    DuplicateContig {
        path: String,
        line: usize,
        name: String,
    },
    /// An edge references a contig the contig table never declared.
    #[error("edge {contig_a} - {contig_b}: unknown contig `{name}`")]
    UnknownContig {
        contig_a: String,
        contig_b: String,
        name: String,
    },
    /// The normalization divides by the RE counts of both sides.
    #[error("edge {contig_a} - {contig_b}: zero RE sites, normalized weight is undefined")]
    ZeroReSites { contig_a: String, contig_b: String },
    /// The clustering collaborator broke its contract.
    #[error("clustering produced {got} group(s), expected {expected}")]
    ClusterCount { expected: usize, got: usize },
    #[error("cluster {cluster} references contig index {index}, but only {len} contigs are loaded")]
    ClusterIndex {
        cluster: usize,
        index: usize,
        len: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
