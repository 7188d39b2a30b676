//! Down-weighting and exclusion of repeat-like contigs.
//!
//! A contig drawing far more Hi-C contact volume than the average is
//! likely repetitive. Its matrix row is divided by its link-density
//! factor, and at or above `max_link_density` the contig is excluded.

use crate::link_matrix::LinkMatrix;
use definitions::DataSet;
use serde::Serialize;

pub const DEFAULT_MAX_LINK_DENSITY: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct RepeatFilterConfig {
    /// Link-density factor at or above which a contig is excluded.
    pub max_link_density: f64,
}

impl RepeatFilterConfig {
    pub fn new(max_link_density: f64) -> Self {
        Self { max_link_density }
    }
}

impl Default for RepeatFilterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINK_DENSITY)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatSummary {
    pub marked: usize,
    pub mean_length: usize,
}

pub trait FilterRepeats {
    fn filter_repeats(&mut self, matrix: &mut LinkMatrix, config: &RepeatFilterConfig)
        -> RepeatSummary;
}

impl FilterRepeats for DataSet {
    fn filter_repeats(
        &mut self,
        matrix: &mut LinkMatrix,
        config: &RepeatFilterConfig,
    ) -> RepeatSummary {
        debug!("START\tFilterRepeats");
        debug!("FILTERREPEAT\tMaxLinkDensity\t{}", config.max_link_density);
        let n = self.contigs.len();
        let mut total_links: i64 = 0;
        let mut links_of = vec![0; n];
        for i in 0..n {
            for j in i + 1..n {
                let counts = matrix.get(i, j);
                total_links += counts;
                links_of[i] += counts;
                links_of[j] += counts;
            }
        }
        let links_avg = 2.0 * total_links as f64 / n as f64;
        let (mut marked, mut len_sum) = (0, 0);
        for (i, contig) in self.contigs.iter_mut().enumerate() {
            let factor = links_of[i] as f64 / links_avg;
            // Row i is rescaled by factor[i] alone. The mirrored cell
            // keeps its value until row j itself is visited, so the
            // matrix may leave this loop asymmetric.
            for j in 0..n {
                if matrix.get(i, j) != 0 {
                    let rescaled = (matrix.get(i, j) as f64 / factor).ceil() as i64;
                    matrix.set(i, j, rescaled);
                }
            }
            if factor >= config.max_link_density {
                debug!(
                    "FILTERREPEAT\tMARKED\t{}\t{}\t{:.1}",
                    i, contig.name, factor
                );
                marked += 1;
                len_sum += contig.length;
                contig.excluded = true;
            }
        }
        let summary = match marked {
            0 => RepeatSummary {
                marked: 0,
                mean_length: 0,
            },
            _ => RepeatSummary {
                marked,
                mean_length: len_sum / marked,
            },
        };
        // Contigs counted here may already be excluded by the
        // short-contig filter.
        info!(
            "Marked {} contigs (avg len {}) as repetitive (MaxLinkDensity = {})",
            summary.marked, summary.mean_length, config.max_link_density
        );
        summary
    }
}
