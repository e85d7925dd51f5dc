// src/scoring/mod.rs
//! Scoring engine: specification -> evaluation. Pure apart from id generation.
//!
//! Order:
//! 1) Six sub-scores in [0,100] from the classifiers (`classify`)
//! 2) Weighted composite (`weights`) rounded to `overall_score`
//! 3) Category from `overall_score` alone (80 / 60 thresholds)
//! 4) Displayed metrics and recommendation text (`recommend`)

pub mod classify;
pub mod id;
pub mod recommend;
pub mod weights;

use crate::evaluation::{Evaluation, Metrics, PerformanceCategory};
use crate::phone::SmartphoneSpecification;

pub use crate::scoring::classify::{NetworkGeneration, PanelKind, ResolutionClass};
pub use crate::scoring::id::generate_id;
pub use crate::scoring::recommend::recommend;
pub use crate::scoring::weights::{load_weights_default, load_weights_file, Weights};

const STORAGE_FULL_GB: f64 = 512.0;
const RAM_FULL_GB: f64 = 16.0;
const CAMERA_FULL_MP: f64 = 200.0;
const BATTERY_FULL_MAH: f64 = 6000.0;

/// Intermediate component scores, each clamped to [0,100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubScores {
    pub storage: f64,
    pub ram: f64,
    pub camera: f64,
    pub display: f64,
    pub network: f64,
    pub battery: f64,
}

impl SubScores {
    pub fn from_spec(spec: &SmartphoneSpecification) -> Self {
        let display = PanelKind::classify(&spec.display).base_score()
            + ResolutionClass::classify(&spec.display).bonus();

        Self {
            storage: percent_of(spec.internal_storage, STORAGE_FULL_GB),
            ram: percent_of(spec.storage_ram, RAM_FULL_GB),
            camera: percent_of(
                classify::camera_megapixel_sum(&spec.primary_camera) as f64,
                CAMERA_FULL_MP,
            ),
            display: clamp_score(display),
            network: NetworkGeneration::classify(&spec.network).score(),
            battery: percent_of(classify::battery_capacity(&spec.battery), BATTERY_FULL_MAH),
        }
    }

    /// Weighted composite before rounding.
    pub fn composite(&self, w: &Weights) -> f64 {
        self.storage * w.storage
            + self.ram * w.ram
            + self.camera * w.camera
            + self.display * w.display
            + self.network * w.network
            + self.battery * w.battery
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            gaming_potential: round_score(self.ram * 0.6 + self.battery * 0.2 + self.storage * 0.2),
            battery_performance: round_score(self.battery),
            photography: round_score(self.camera),
            display_quality: round_score(self.display),
        }
    }
}

/// Evaluate with the default weights.
pub fn score(spec: &SmartphoneSpecification) -> Evaluation {
    score_with_weights(spec, &Weights::default())
}

pub fn score_with_weights(spec: &SmartphoneSpecification, weights: &Weights) -> Evaluation {
    let sub = SubScores::from_spec(spec);
    let overall_score = round_score(sub.composite(weights));
    let performance_category = PerformanceCategory::from_overall(overall_score);
    let metrics = sub.metrics();
    let user_recommendation = recommend(performance_category, &metrics).to_string();

    Evaluation {
        id: generate_id(),
        specification: spec.clone(),
        overall_score,
        performance_category,
        user_recommendation,
        metrics,
    }
}

fn percent_of(value: f64, full: f64) -> f64 {
    clamp_score(value / full * 100.0)
}

fn clamp_score(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 100.0)
    }
}

fn round_score(x: f64) -> u8 {
    clamp_score(x.round()) as u8
}
