//! evaluation.rs — output of the scoring engine (or of the remote scoring API).
//!
//! An `Evaluation` is built once per submitted specification and never updated in place.

use serde::{Deserialize, Serialize};

use crate::phone::SmartphoneSpecification;

/// Performance tier derived from `overall_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PerformanceCategory {
    Low,
    Mid,
    High,
}

impl PerformanceCategory {
    /// HIGH at 80 and above, MID at 60 and above, LOW otherwise.
    pub fn from_overall(overall: u8) -> Self {
        if overall >= 80 {
            PerformanceCategory::High
        } else if overall >= 60 {
            PerformanceCategory::Mid
        } else {
            PerformanceCategory::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceCategory::Low => "LOW",
            PerformanceCategory::Mid => "MID",
            PerformanceCategory::High => "HIGH",
        }
    }
}

/// Displayed sub-metrics (0–100), independent of `overall_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub gaming_potential: u8,
    pub battery_performance: u8,
    pub photography: u8,
    pub display_quality: u8,
}

impl Metrics {
    fn in_range(&self) -> bool {
        [
            self.gaming_potential,
            self.battery_performance,
            self.photography,
            self.display_quality,
        ]
        .iter()
        .all(|m| *m <= 100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Short opaque token; a UI list key, not a persistent reference.
    pub id: String,
    #[serde(flatten)]
    pub specification: SmartphoneSpecification,
    pub overall_score: u8,
    pub performance_category: PerformanceCategory,
    pub user_recommendation: String,
    pub metrics: Metrics,
}

impl Evaluation {
    /// True when every score lies in 0..=100. Used to reject nonsense from the remote API.
    pub fn is_in_range(&self) -> bool {
        self.overall_score <= 100 && self.metrics.in_range()
    }
}
