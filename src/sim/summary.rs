//! Score statistics for a batch of games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Aggregate view of a list of final scores.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Games counted.
    pub games: usize,

    /// Mean score (0 when there are no games).
    pub mean: f64,

    pub min: Option<u32>,
    pub max: Option<u32>,

    /// Games that ended with every card played.
    pub perfect: usize,

    /// (score, games) pairs in ascending score order.
    pub histogram: Vec<(u32, usize)>,
}

impl ScoreSummary {
    #[must_use]
    pub fn from_scores(scores: &[u32]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }

        let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
        for &score in scores {
            *counts.entry(score).or_insert(0) += 1;
        }
        let mut histogram: Vec<_> = counts.into_iter().collect();
        histogram.sort_unstable();

        let total: u64 = scores.iter().map(|&s| s as u64).sum();

        Self {
            games: scores.len(),
            mean: total as f64 / scores.len() as f64,
            min: scores.iter().copied().min(),
            max: scores.iter().copied().max(),
            perfect: counts_for(&histogram, 0),
            histogram,
        }
    }

    /// Fraction of perfect games.
    #[must_use]
    pub fn perfect_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.perfect as f64 / self.games as f64
        }
    }

    /// Text histogram, one line per score, bars scaled to `width`.
    #[must_use]
    pub fn render_histogram(&self, width: usize) -> String {
        let peak = self.histogram.iter().map(|&(_, n)| n).max().unwrap_or(0);
        let mut out = String::new();
        for &(score, n) in &self.histogram {
            let bar = if peak == 0 { 0 } else { (n * width).div_ceil(peak) };
            out.push_str(&format!(
                "{:>3} | {:<width$} {}\n",
                score,
                "#".repeat(bar),
                n,
                width = width
            ));
        }
        out
    }
}

fn counts_for(histogram: &[(u32, usize)], score: u32) -> usize {
    histogram
        .iter()
        .find(|&&(s, _)| s == score)
        .map_or(0, |&(_, n)| n)
}

impl std::fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "games: {}  avg: {:.2}", self.games, self.mean)?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            write!(f, "  min: {}  max: {}", min, max)?;
        }
        write!(f, "  perfect: {} ({:.1}%)", self.perfect, self.perfect_rate() * 100.0)
    }
}
