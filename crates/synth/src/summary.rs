//! Summary of a synthesis run.

/// Statistics over the errors assigned in one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthSummary {
    n_pairs: usize,
    min: Option<f64>,
    max: Option<f64>,
    sum: f64,
}

impl SynthSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one assigned error.
    pub fn record(&mut self, error: f64) {
        self.n_pairs += 1;
        self.sum += error;
        self.min = Some(self.min.map_or(error, |m| m.min(error)));
        self.max = Some(self.max.map_or(error, |m| m.max(error)));
    }

    /// Number of (period, station) pairs processed.
    pub fn n_pairs(&self) -> usize {
        self.n_pairs
    }

    /// Smallest assigned error, if any pair was processed.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest assigned error, if any pair was processed.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Mean assigned error, if any pair was processed.
    pub fn mean(&self) -> Option<f64> {
        (self.n_pairs > 0).then(|| self.sum / self.n_pairs as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_has_no_stats() {
        let s = SynthSummary::new();
        assert_eq!(s.n_pairs(), 0);
        assert_eq!(s.min(), None);
        assert_eq!(s.max(), None);
        assert_eq!(s.mean(), None);
    }

    #[test]
    fn records_min_max_mean() {
        let mut s = SynthSummary::new();
        for e in [0.5, -1.0, 2.5] {
            s.record(e);
        }
        assert_eq!(s.n_pairs(), 3);
        assert_eq!(s.min(), Some(-1.0));
        assert_eq!(s.max(), Some(2.5));
        assert!((s.mean().unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }
}
