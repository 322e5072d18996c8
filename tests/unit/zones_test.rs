//! Unit tests for intensity zone classification.

use calorie_burn::metrics::zones::{classify, classify_percentage, ZoneKind, ZONE_LADDER};

#[test]
fn test_zone_boundaries_are_exclusive_upper() {
    let cases = [
        (0.0, ZoneKind::Rest),
        (49.99, ZoneKind::Rest),
        (50.0, ZoneKind::Zone1),
        (59.99, ZoneKind::Zone1),
        (60.0, ZoneKind::Zone2),
        (69.99, ZoneKind::Zone2),
        (70.0, ZoneKind::Zone3),
        (79.99, ZoneKind::Zone3),
        (80.0, ZoneKind::Zone4),
        (89.99, ZoneKind::Zone4),
        (90.0, ZoneKind::Zone5),
        (100.0, ZoneKind::Zone5),
        (130.0, ZoneKind::Zone5),
    ];

    for (pct, expected) in cases {
        let zone = classify_percentage(pct).unwrap();
        assert_eq!(zone.kind, expected, "{}% should be {:?}", pct, expected);
    }
}

#[test]
fn test_classify_from_heart_rate() {
    // 140 / 195 = 71.8% -> Zone 3
    let zone = classify(140.0, 195.0).unwrap();
    assert_eq!(zone.kind, ZoneKind::Zone3);
    assert_eq!(zone.name, "Zone 3");

    // 97.5 / 195 = exactly 50%
    assert_eq!(classify(97.5, 195.0).unwrap().kind, ZoneKind::Zone1);
}

#[test]
fn test_classify_rejects_nan() {
    assert!(classify_percentage(f64::NAN).is_err());
    assert!(classify(120.0, 0.0).is_err());
}

#[test]
fn test_ladder_is_contiguous() {
    assert_eq!(ZONE_LADDER.len(), 6);
    assert_eq!(ZONE_LADDER[0].lower_percent, 0.0);
    assert!(ZONE_LADDER[5].upper_percent.is_none());

    for pair in ZONE_LADDER.windows(2) {
        assert_eq!(pair[0].upper_percent, Some(pair[1].lower_percent));
    }
}

#[test]
fn test_zone_colors() {
    let hex: Vec<String> = ZONE_LADDER.iter().map(|z| z.color.to_hex()).collect();
    assert_eq!(
        hex,
        vec!["#94A3B8", "#10B981", "#3B82F6", "#F59E0B", "#EF4444", "#DC2626"]
    );
}

#[test]
fn test_classify_is_repeatable() {
    let first = classify(140.0, 195.0).unwrap();
    let second = classify(140.0, 195.0).unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));

    for pct in [0.0, 50.0, 69.99, 90.0, 150.0] {
        assert_eq!(
            classify_percentage(pct).unwrap().kind,
            classify_percentage(pct).unwrap().kind
        );
    }
}
