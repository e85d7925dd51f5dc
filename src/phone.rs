// src/phone.rs
//! Smartphone specification as submitted by the dashboard form or a sample list.
//!
//! Shapes follow the scoring API JSON:
//! ```json
//! {
//!   "internal_storage": 256,
//!   "storage_ram": 8,
//!   "expandable_storage": 1,          // or "NA" / null
//!   "primary_camera": "108MP + 12MP + 5MP + 5MP",
//!   "display": "Full HD+ Dynamic AMOLED 2X DisplayHD",
//!   "network": "5G, 4G, 3G, 2G",
//!   "battery": 5000                   // or "5000 mAh"
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Hardware descriptor; the engine input. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartphoneSpecification {
    /// Gigabytes.
    #[serde(serialize_with = "whole_number")]
    pub internal_storage: f64,
    /// Gigabytes.
    #[serde(serialize_with = "whole_number")]
    pub storage_ram: f64,
    #[serde(default)]
    pub expandable_storage: ExpandableStorage,
    pub primary_camera: String,
    pub display: String,
    pub network: String,
    pub battery: Battery,
}

/// Expandable storage in terabytes, or "NA" when the phone has no card slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ExpandableStorage {
    Terabytes(f64),
    #[default]
    NotApplicable,
}

/// Battery capacity in mAh. Accepts a bare number or a label such as "4500 mAh";
/// serializes back in the form it arrived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Battery {
    Capacity(#[serde(serialize_with = "whole_number")] f64),
    Label(String),
}

impl From<f64> for Battery {
    fn from(v: f64) -> Self {
        Battery::Capacity(v)
    }
}

impl From<&str> for Battery {
    fn from(v: &str) -> Self {
        Battery::Label(v.to_string())
    }
}

impl Serialize for ExpandableStorage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExpandableStorage::Terabytes(tb) => whole_number(tb, serializer),
            ExpandableStorage::NotApplicable => serializer.serialize_str("NA"),
        }
    }
}

/// `256.0` goes out as `256`; fractional and out-of-range values stay floats.
fn whole_number<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_EXACT {
        serializer.serialize_i64(*v as i64)
    } else {
        serializer.serialize_f64(*v)
    }
}

impl<'de> Deserialize<'de> for ExpandableStorage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            Missing(()),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(tb) => ExpandableStorage::Terabytes(tb),
            // Free text from forms: "1", "1 TB", "NA", "".
            Raw::Text(s) => s
                .trim()
                .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c.is_whitespace())
                .parse::<f64>()
                .map(ExpandableStorage::Terabytes)
                .unwrap_or(ExpandableStorage::NotApplicable),
            Raw::Missing(()) => ExpandableStorage::NotApplicable,
        })
    }
}

/// Input rejected at the validation boundary (before it reaches the engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl SmartphoneSpecification {
    /// Form-boundary check: required fields present, numbers positive.
    /// The engine itself never rejects input; this is for callers that accept user data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive("internal_storage", self.internal_storage)?;
        positive("storage_ram", self.storage_ram)?;
        if let ExpandableStorage::Terabytes(tb) = self.expandable_storage {
            if !tb.is_finite() || tb <= 0.0 {
                return Err(ValidationError::new(
                    "expandable_storage",
                    "must be a positive number or \"NA\"",
                ));
            }
        }
        required("primary_camera", &self.primary_camera)?;
        required("display", &self.display)?;
        required("network", &self.network)?;
        match &self.battery {
            Battery::Capacity(mah) => positive("battery", *mah)?,
            Battery::Label(s) => {
                if !s.chars().any(|c| c.is_ascii_digit()) {
                    return Err(ValidationError::new("battery", "must contain a capacity in mAh"));
                }
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, v: f64) -> Result<(), ValidationError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a positive number"))
    }
}

fn required(field: &'static str, v: &str) -> Result<(), ValidationError> {
    if v.trim().is_empty() {
        Err(ValidationError::new(field, "is required"))
    } else {
        Ok(())
    }
}
