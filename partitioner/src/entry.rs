//! Loading of the two input tables into a [DataSet](definitions::DataSet).
//!
//! The contig table has three tab-separated columns (name, RE-site
//! count, length); the edge table has eight (two order indices, two
//! names, two RE counts, observed links, expected links). Empty lines
//! and `#`-prefixed header lines are skipped. Any field that does not
//! convert to its expected type is a hard error naming the file, line
//! and column -- never a silently defaulted zero.

use crate::error::PartitionError;
use definitions::*;
use std::io::BufRead;
use std::path::Path;

pub trait Entry: Sized {
    fn entry(contigs_file: &Path, edges_file: &Path) -> Result<Self, PartitionError>;
}

impl Entry for DataSet {
    fn entry(contigs_file: &Path, edges_file: &Path) -> Result<Self, PartitionError> {
        debug!("START\tEntry");
        let (contigs, longest_re) = read_contig_table(contigs_file)?;
        info!(
            "Loaded {} contig RE counts for normalization from {}",
            contigs.len(),
            contigs_file.display()
        );
        let edges = read_edge_table(edges_file)?;
        info!(
            "Loaded {} contact edges from {}",
            edges.len(),
            edges_file.display()
        );
        let contigs_file = contigs_file.to_string_lossy();
        Ok(DataSet::new(&contigs_file, contigs, longest_re, edges))
    }
}

/// Read the per-contig RE-site counts and lengths. Returns the records
/// in file order together with the largest RE count seen.
pub fn read_contig_table(path: &Path) -> Result<(Vec<ContigRecord>, usize), PartitionError> {
    let mut contigs: Vec<ContigRecord> = vec![];
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut longest_re = 0;
    for (line, row) in table_rows(path)? {
        let mut fields = row.split('\t');
        let name: String = parse_field(fields.next(), path, line, 1, "contig name")?;
        let re_sites = parse_field(fields.next(), path, line, 2, "RE-site count")?;
        let length = parse_field(fields.next(), path, line, 3, "length")?;
        if !seen.insert(name.clone()) {
            let path = path.to_string_lossy().to_string();
            return Err(PartitionError::DuplicateContig { path, line, name });
        }
        longest_re = longest_re.max(re_sites);
        contigs.push(ContigRecord::new(&name, re_sites, length));
    }
    Ok((contigs, longest_re))
}

/// Read the per-pair link records. The two leading order-index columns
/// are validated but otherwise informational; identity is resolved by
/// name when the matrix is built.
pub fn read_edge_table(path: &Path) -> Result<Vec<ContactEdge>, PartitionError> {
    let mut edges = vec![];
    for (line, row) in table_rows(path)? {
        let mut fields = row.split('\t');
        let _order_a: usize = parse_field(fields.next(), path, line, 1, "order index")?;
        let _order_b: usize = parse_field(fields.next(), path, line, 2, "order index")?;
        let contig_a: String = parse_field(fields.next(), path, line, 3, "contig name")?;
        let contig_b: String = parse_field(fields.next(), path, line, 4, "contig name")?;
        let re_a = parse_field(fields.next(), path, line, 5, "RE-site count")?;
        let re_b = parse_field(fields.next(), path, line, 6, "RE-site count")?;
        let observed_links = parse_field(fields.next(), path, line, 7, "observed links")?;
        let expected_links = parse_field(fields.next(), path, line, 8, "expected links")?;
        edges.push(ContactEdge {
            contig_a,
            contig_b,
            re_a,
            re_b,
            observed_links,
            expected_links,
        });
    }
    Ok(edges)
}

/// Data rows of a tab-separated table, with their 1-based line numbers.
fn table_rows(path: &Path) -> Result<Vec<(usize, String)>, PartitionError> {
    let rdr = std::fs::File::open(path).map(std::io::BufReader::new)?;
    let mut rows = vec![];
    for (index, row) in rdr.lines().enumerate() {
        let row = row?;
        if row.is_empty() || row.starts_with('#') {
            continue;
        }
        rows.push((index + 1, row));
    }
    Ok(rows)
}

fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    path: &Path,
    line: usize,
    column: usize,
    expected: &'static str,
) -> Result<T, PartitionError> {
    let parse_error = |value: &str| PartitionError::Parse {
        path: path.to_string_lossy().to_string(),
        line,
        column,
        value: value.to_string(),
        expected,
    };
    let raw = field.ok_or_else(|| parse_error(""))?;
    raw.trim().parse().map_err(|_| parse_error(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    fn fixture(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut wtr = std::fs::File::create(&path).unwrap();
        wtr.write_all(content.as_bytes()).unwrap();
        path
    }
    #[test]
    fn contig_table() {
        let path = fixture(
            "entry_contig_table.txt",
            "#Contig\tRECounts\tLength\nctg1\t6612\t2200000\n\nctg2\t686\t500000\n",
        );
        let (contigs, longest_re) = read_contig_table(&path).unwrap();
        assert_eq!(contigs.len(), 2);
        assert_eq!(contigs[0].name, "ctg1");
        assert_eq!(contigs[0].re_sites, 6612);
        assert_eq!(contigs[1].length, 500000);
        assert!(contigs.iter().all(|c| !c.excluded));
        assert_eq!(longest_re, 6612);
    }
    #[test]
    fn contig_table_parse_error() {
        let path = fixture(
            "entry_contig_bad.txt",
            "ctg1\t6612\t2200000\nctg2\tfoo\t500000\n",
        );
        match read_contig_table(&path) {
            Err(PartitionError::Parse { line, column, value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "foo");
            }
            other => panic!("{:?}", other),
        }
    }
    #[test]
    fn contig_table_negative_is_error() {
        let path = fixture("entry_contig_negative.txt", "ctg1\t-4\t2200000\n");
        assert!(matches!(
            read_contig_table(&path),
            Err(PartitionError::Parse { column: 2, .. })
        ));
    }
    #[test]
    fn contig_table_missing_column() {
        let path = fixture("entry_contig_short_row.txt", "ctg1\t6612\n");
        assert!(matches!(
            read_contig_table(&path),
            Err(PartitionError::Parse { line: 1, column: 3, .. })
        ));
    }
    #[test]
    fn contig_table_duplicate_name() {
        let path = fixture(
            "entry_contig_dup.txt",
            "ctg1\t6612\t2200000\nctg1\t686\t500000\n",
        );
        match read_contig_table(&path) {
            Err(PartitionError::DuplicateContig { line, name, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(name, "ctg1");
            }
            other => panic!("{:?}", other),
        }
    }
    #[test]
    fn edge_table() {
        let rows = "#X\tY\tContig1\tContig2\tRE1\tRE2\tObservedLinks\tExpectedLinksIfAdjacent\n\
                    1\t44\tctg1\tctg2\t6612\t1793\t12\t121.7\n\
                    1\t70\tctg1\tctg3\t6612\t686\t2\t59.3\n";
        let path = fixture("entry_edge_table.txt", rows);
        let edges = read_edge_table(&path).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].contig_a, "ctg1");
        assert_eq!(edges[0].contig_b, "ctg2");
        assert_eq!(edges[0].re_b, 1793);
        assert_eq!(edges[0].observed_links, 12);
        assert!((edges[1].expected_links - 59.3).abs() < 1e-9);
    }
    #[test]
    fn edge_table_parse_error_names_column() {
        let path = fixture(
            "entry_edge_bad.txt",
            "1\t44\tctg1\tctg2\t6612\t1793\ttwelve\t121.7\n",
        );
        assert!(matches!(
            read_edge_table(&path),
            Err(PartitionError::Parse { line: 1, column: 7, .. })
        ));
    }
    #[test]
    fn entry_builds_dataset() {
        let contigs = fixture("entry_ds_contigs.txt", "ctg1\t10\t1000\nctg2\t5\t500\n");
        let edges = fixture("entry_ds_edges.txt", "1\t2\tctg1\tctg2\t10\t5\t4\t1.5\n");
        let ds = DataSet::entry(&contigs, &edges).unwrap();
        assert_eq!(ds.contigs.len(), 2);
        assert_eq!(ds.edges.len(), 1);
        assert_eq!(ds.longest_re, 10);
        assert!(ds.assignments.is_empty());
    }
}
