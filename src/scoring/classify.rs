//! Free-text classifiers over the specification fields.
//!
//! Each one maps a descriptor string to an enumerated category or a number, so the
//! matching rules can be tested without building a whole specification.
//! All substring matches are case-insensitive; the first match in priority order wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::phone::Battery;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

/// Panel technology found in the `display` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Amoled,
    Oled,
    Lcd,
    Other,
}

impl PanelKind {
    pub fn classify(display: &str) -> Self {
        let d = display.to_lowercase();
        // "amoled" contains "oled"; check it first.
        if d.contains("amoled") {
            PanelKind::Amoled
        } else if d.contains("oled") {
            PanelKind::Oled
        } else if d.contains("lcd") {
            PanelKind::Lcd
        } else {
            PanelKind::Other
        }
    }

    pub fn base_score(&self) -> f64 {
        match self {
            PanelKind::Amoled => 90.0,
            PanelKind::Oled => 85.0,
            PanelKind::Lcd => 70.0,
            PanelKind::Other => 60.0,
        }
    }
}

/// Resolution class found in the `display` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionClass {
    FullHd,
    QuadHd,
    UltraHd,
    Unspecified,
}

impl ResolutionClass {
    pub fn classify(display: &str) -> Self {
        let d = display.to_lowercase();
        if d.contains("full hd") || d.contains("1080p") {
            ResolutionClass::FullHd
        } else if d.contains("2k") || d.contains("1440p") {
            ResolutionClass::QuadHd
        } else if d.contains("4k") {
            ResolutionClass::UltraHd
        } else {
            ResolutionClass::Unspecified
        }
    }

    pub fn bonus(&self) -> f64 {
        match self {
            ResolutionClass::FullHd => 5.0,
            ResolutionClass::QuadHd => 8.0,
            ResolutionClass::UltraHd => 10.0,
            ResolutionClass::Unspecified => 0.0,
        }
    }
}

/// Best mobile generation listed in the `network` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkGeneration {
    FiveG,
    FourG,
    Legacy,
}

impl NetworkGeneration {
    pub fn classify(network: &str) -> Self {
        let n = network.to_lowercase();
        if n.contains("5g") {
            NetworkGeneration::FiveG
        } else if n.contains("4g") || n.contains("lte") {
            NetworkGeneration::FourG
        } else {
            NetworkGeneration::Legacy
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            NetworkGeneration::FiveG => 100.0,
            NetworkGeneration::FourG => 80.0,
            NetworkGeneration::Legacy => 60.0,
        }
    }
}

/// Megapixels per lens: `+`-separated segments, first digit run of each (0 if none).
pub fn camera_megapixels(primary_camera: &str) -> Vec<u64> {
    primary_camera
        .split('+')
        .map(|segment| {
            DIGIT_RUN
                .find(segment)
                // A digit-only string only fails to parse on overflow.
                .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
                .unwrap_or(0)
        })
        .collect()
}

/// Total megapixels across all lenses.
pub fn camera_megapixel_sum(primary_camera: &str) -> u64 {
    camera_megapixels(primary_camera)
        .into_iter()
        .fold(0u64, u64::saturating_add)
}

/// Capacity in mAh. Labels keep only their digits ("4,500 mAh" -> 4500); no digits -> 0.
pub fn battery_capacity(battery: &Battery) -> f64 {
    match battery {
        Battery::Capacity(mah) if mah.is_finite() => *mah,
        Battery::Capacity(_) => 0.0,
        Battery::Label(label) => {
            let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse::<f64>().unwrap_or(0.0)
        }
    }
}
