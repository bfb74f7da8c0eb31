//! Batch statistics: percentiles and min-max normalization

/// Percentile with linear interpolation between closest ranks, `p` in
/// `0..=100`; `None` for an empty sample
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Min-max bounds of a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Bounds of the sample; `None` when empty
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |bounds, v| {
            Some(match bounds {
                None => MinMax { min: v, max: v },
                Some(MinMax { min, max }) => MinMax {
                    min: min.min(v),
                    max: max.max(v),
                },
            })
        })
    }

    /// `(value - min) / (max - min)`, or 0 when every value is equal
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max > self.min {
            (value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }
}
