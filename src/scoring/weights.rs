//! Composite score weights, optionally loaded from `config/weights.json`.
//!
//! JSON shape (all fields optional, missing ones keep their default):
//! {
//!   "storage": 0.15,
//!   "ram": 0.25,
//!   "camera": 0.20,
//!   "display": 0.15,
//!   "network": 0.10,
//!   "battery": 0.15
//! }

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_WEIGHTS_PATH: &str = "config/weights.json";
pub const ENV_WEIGHTS_PATH: &str = "PHONE_SCORE_WEIGHTS_PATH";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub storage: f64,
    pub ram: f64,
    pub camera: f64,
    pub display: f64,
    pub network: f64,
    pub battery: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            storage: 0.15,
            ram: 0.25,
            camera: 0.20,
            display: 0.15,
            network: 0.10,
            battery: 0.15,
        }
    }
}

impl Weights {
    fn sanitized(mut self) -> Self {
        for w in [
            &mut self.storage,
            &mut self.ram,
            &mut self.camera,
            &mut self.display,
            &mut self.network,
            &mut self.battery,
        ] {
            if !w.is_finite() || *w < 0.0 {
                *w = 0.0;
            }
        }
        self
    }
}

/// Load weights from an explicit path. Negative or non-finite weights become 0.
pub fn load_weights_file(path: &Path) -> Result<Weights> {
    let bytes =
        fs::read(path).with_context(|| format!("reading weights from {}", path.display()))?;
    let w: Weights = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing weights in {}", path.display()))?;
    Ok(w.sanitized())
}

/// $PHONE_SCORE_WEIGHTS_PATH, then `config/weights.json`; a missing file means defaults.
pub fn load_weights_default() -> Result<Weights> {
    let path = std::env::var(ENV_WEIGHTS_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WEIGHTS_PATH));
    if !path.exists() {
        return Ok(Weights::default());
    }
    load_weights_file(&path)
}
