// tests/scoring_properties.rs
//
// Engine-level properties over the public scoring API:
// - reference scenario (sample 1) sub-scores, overall and category
// - determinism apart from the id
// - clamping for pathological inputs
// - camera parsing ignores whitespace around '+'
// - battery label and number agree

use phone_score::samples;
use phone_score::scoring::{score, SubScores};
use phone_score::{Battery, ExpandableStorage, PerformanceCategory, SmartphoneSpecification};

fn reference_spec() -> SmartphoneSpecification {
    SmartphoneSpecification {
        internal_storage: 256.0,
        storage_ram: 8.0,
        expandable_storage: ExpandableStorage::Terabytes(1.0),
        primary_camera: "108MP + 12MP + 5MP + 5MP".into(),
        display: "Full HD+ Dynamic AMOLED 2X DisplayHD".into(),
        network: "5G, 4G, 3G, 2G".into(),
        battery: Battery::Capacity(5000.0),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_scenario_scores_seventy_mid() {
    let spec = reference_spec();
    let sub = SubScores::from_spec(&spec);
    assert!(approx(sub.camera, 65.0), "camera {}", sub.camera);
    assert!(approx(sub.display, 95.0), "display {}", sub.display);
    assert!(approx(sub.network, 100.0));
    assert!(approx(sub.storage, 50.0));
    assert!(approx(sub.ram, 50.0));
    assert!(approx(sub.battery, 5000.0 / 6000.0 * 100.0));

    let e = score(&spec);
    assert_eq!(e.overall_score, 70);
    assert_eq!(e.performance_category, PerformanceCategory::Mid);
    assert_eq!(e.metrics.gaming_potential, 57);
    assert_eq!(e.metrics.battery_performance, 83);
    assert_eq!(e.metrics.photography, 65);
    assert_eq!(e.metrics.display_quality, 95);
    assert_eq!(
        e.user_recommendation,
        "Perfect for users requiring long battery life"
    );
    assert_eq!(e.specification, spec);
}

#[test]
fn builtin_samples_have_known_outcomes() {
    let out: Vec<_> = samples::builtin().iter().map(score).collect();

    assert_eq!(out[1].overall_score, 55);
    assert_eq!(out[1].performance_category, PerformanceCategory::Low);
    assert_eq!(out[1].user_recommendation, "Suitable for basic use");

    assert_eq!(out[2].overall_score, 69);
    assert_eq!(out[2].performance_category, PerformanceCategory::Mid);
    assert_eq!(out[2].user_recommendation, "Good balance for daily use");
}

#[test]
fn scoring_is_deterministic_except_id() {
    let spec = reference_spec();
    let a = score(&spec);
    let b = score(&spec);
    assert_eq!(a.overall_score, b.overall_score);
    assert_eq!(a.performance_category, b.performance_category);
    assert_eq!(a.metrics, b.metrics);
    assert_eq!(a.user_recommendation, b.user_recommendation);
    assert_eq!(a.id.len(), 7);
}

#[test]
fn pathological_inputs_stay_in_range() {
    let cases = [
        SmartphoneSpecification {
            internal_storage: 10_000.0,
            storage_ram: 1_000.0,
            expandable_storage: ExpandableStorage::NotApplicable,
            primary_camera: "999MP + 999MP".into(),
            display: "AMOLED 4K".into(),
            network: "5G".into(),
            battery: Battery::Capacity(1e12),
        },
        SmartphoneSpecification {
            internal_storage: 0.0,
            storage_ram: -4.0,
            expandable_storage: ExpandableStorage::NotApplicable,
            primary_camera: String::new(),
            display: String::new(),
            network: String::new(),
            battery: Battery::from(""),
        },
    ];

    for spec in &cases {
        let sub = SubScores::from_spec(spec);
        for v in [sub.storage, sub.ram, sub.camera, sub.display, sub.network, sub.battery] {
            assert!((0.0..=100.0).contains(&v), "sub-score {v} out of range for {spec:?}");
        }
        let e = score(spec);
        assert!(e.is_in_range(), "{e:?}");
    }

    let maxed = score(&cases[0]);
    assert_eq!(maxed.overall_score, 100);
    assert_eq!(maxed.performance_category, PerformanceCategory::High);
    assert_eq!(
        maxed.user_recommendation,
        "Ideal for intensive gaming and extended use"
    );

    let empty = score(&cases[1]);
    assert_eq!(empty.metrics.photography, 0);
    assert_eq!(empty.performance_category, PerformanceCategory::Low);
}

#[test]
fn camera_whitespace_does_not_matter() {
    let mut tight = reference_spec();
    tight.primary_camera = "108MP+12MP+5MP+5MP".into();
    let mut loose = reference_spec();
    loose.primary_camera = "108MP   +  12MP+ 5MP +5MP".into();
    assert_eq!(
        SubScores::from_spec(&tight).camera,
        SubScores::from_spec(&loose).camera
    );
}

#[test]
fn battery_label_and_number_agree() {
    let mut labelled = reference_spec();
    labelled.battery = Battery::from("4500 mAh");
    let mut numeric = reference_spec();
    numeric.battery = Battery::Capacity(4500.0);
    assert_eq!(score(&labelled).metrics, score(&numeric).metrics);
    assert_eq!(score(&labelled).metrics.battery_performance, 75);
}
