//! Recommendation text: fixed-priority rule table, first match wins.

use crate::evaluation::{Metrics, PerformanceCategory};

use crate::evaluation::PerformanceCategory::{High, Mid};

struct Rule {
    when: fn(PerformanceCategory, &Metrics) -> bool,
    text: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        when: |c, m| c == High && m.gaming_potential > 80,
        text: "Ideal for intensive gaming and extended use",
    },
    Rule {
        when: |c, m| c == High && m.photography > 85,
        text: "Excellent for professional photography and social media",
    },
    Rule {
        when: |c, m| c == Mid && m.battery_performance > 80,
        text: "Perfect for users requiring long battery life",
    },
    Rule {
        when: |c, _| c == High,
        text: "Recommended for demanding multi-purpose users",
    },
    Rule {
        when: |c, _| c == Mid,
        text: "Good balance for daily use",
    },
];

pub const BASIC_USE: &str = "Suitable for basic use";

pub fn recommend(category: PerformanceCategory, metrics: &Metrics) -> &'static str {
    RULES
        .iter()
        .find(|r| (r.when)(category, metrics))
        .map(|r| r.text)
        .unwrap_or(BASIC_USE)
}
