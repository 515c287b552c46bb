//! Engine configuration.
//!
//! Both structs deserialize from partial JSON objects; missing fields take their defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompactionOptions {
    /// Run the tightening pass in `improvement_heuristics`.
    pub tighten: bool,
    /// Upper bound on tightening moves; `0` means no bound.
    pub max_improvement_steps: usize,
    /// Keep every tightened coordinate within the starting drawing's `[min, max]`.
    pub preserve_extent: bool,
}

impl Default for CompactionOptions {
    fn default() -> Self {
        Self {
            tighten: true,
            max_improvement_steps: 0,
            preserve_extent: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitterOptions {
    /// Margin added to both dimensions of every component box.
    pub border: i64,
    /// Width / height ratio the packer aims for.
    pub target_ratio: f64,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            border: 30,
            target_ratio: 1.0,
        }
    }
}
