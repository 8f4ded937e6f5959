//! Matching configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters of the multi-scale matcher.
///
/// The defaults reproduce the established sweep: 20 template scales evenly
/// spaced over `[0.5, 1.5]`, with candidates suppressed once more than half
/// of their own area is covered by a kept box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Smallest template scale factor tried.
    pub scale_min: f64,
    /// Largest template scale factor tried.
    pub scale_max: f64,
    /// Number of evenly spaced scales over `[scale_min, scale_max]`.
    pub scale_steps: usize,
    /// Suppression threshold: the fraction of a candidate's own area that
    /// may overlap an already kept box before the candidate is dropped.
    pub overlap_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.5,
            scale_max: 1.5,
            scale_steps: 20,
            overlap_threshold: 0.5,
        }
    }
}

impl MatchConfig {
    /// Enumerate the scale factors, ascending.
    ///
    /// A single step tries only `scale_min`; zero steps yield an empty
    /// sweep.
    pub fn scales(&self) -> Vec<f64> {
        match self.scale_steps {
            0 => Vec::new(),
            1 => vec![self.scale_min],
            n => {
                let step = (self.scale_max - self.scale_min) / (n - 1) as f64;
                (0..n).map(|i| self.scale_min + i as f64 * step).collect()
            }
        }
    }
}
