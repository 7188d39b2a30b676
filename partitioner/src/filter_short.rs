//! Marking of contigs with too few restriction sites.
//! Such contigs carry too little Hi-C signal to place reliably; they
//! stay in the dataset and the matrix, only flagged.

use definitions::DataSet;
use serde::Serialize;

pub const DEFAULT_MIN_RES: usize = 10;

#[derive(Debug, Clone)]
pub struct ShortContigConfig {
    /// Contigs with strictly fewer RE sites than this are excluded.
    pub min_res: usize,
}

impl ShortContigConfig {
    pub fn new(min_res: usize) -> Self {
        Self { min_res }
    }
}

impl Default for ShortContigConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RES)
    }
}

/// What the filter marked, reported for threshold tuning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortContigSummary {
    pub marked: usize,
    pub mean_re_sites: f64,
    pub mean_length: usize,
}

pub trait FilterShortContigs {
    fn filter_short_contigs(&mut self, config: &ShortContigConfig) -> ShortContigSummary;
}

impl FilterShortContigs for DataSet {
    fn filter_short_contigs(&mut self, config: &ShortContigConfig) -> ShortContigSummary {
        debug!("START\tFilterShortContigs");
        debug!("FILTERSHORT\tMinREs\t{}", config.min_res);
        let (mut marked, mut re_sum, mut len_sum) = (0, 0, 0);
        for (index, contig) in self.contigs.iter_mut().enumerate() {
            if contig.re_sites < config.min_res {
                debug!(
                    "FILTERSHORT\tMARKED\t{}\t{}\t{}",
                    index, contig.name, contig.re_sites
                );
                marked += 1;
                re_sum += contig.re_sites;
                len_sum += contig.length;
                contig.excluded = true;
            }
        }
        let summary = match marked {
            0 => ShortContigSummary {
                marked: 0,
                mean_re_sites: 0.0,
                mean_length: 0,
            },
            _ => ShortContigSummary {
                marked,
                mean_re_sites: re_sum as f64 / marked as f64,
                mean_length: len_sum / marked,
            },
        };
        info!(
            "Marked {} contigs (avg {:.1} RE sites, len {}) since they contain too few REs (MinREs = {})",
            summary.marked, summary.mean_re_sites, summary.mean_length, config.min_res
        );
        summary
    }
}
