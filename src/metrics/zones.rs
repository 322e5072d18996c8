//! Heart rate intensity zones.
//!
//! Zones are keyed by heart rate as a percentage of maximum heart rate and
//! laid out as an ascending ladder of exclusive upper bounds. The first rung
//! whose bound exceeds the percentage wins, so a value sitting exactly on a
//! boundary belongs to the higher zone.

use serde::{Deserialize, Serialize};

use super::heart_rate::heart_rate_percentage;
use super::types::MetricsError;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to egui color format.
    pub fn to_egui(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS-style hex string, e.g. `#10B981`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The six intensity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Rest,
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
}

impl ZoneKind {
    /// Static metadata for this zone.
    pub fn info(&self) -> &'static IntensityZone {
        &ZONE_LADDER[*self as usize]
    }

    /// Position on the ladder (Rest = 0, Zone 5 = 5).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.info().name)
    }
}

/// Immutable description of one intensity zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityZone {
    pub kind: ZoneKind,
    /// Zone name, e.g. "Zone 2"
    pub name: &'static str,
    /// Intensity level label, e.g. "Moderate"
    pub level: &'static str,
    /// Display color
    pub color: Color,
    /// Training purpose
    pub description: &'static str,
    /// Human readable percentage range
    pub range_label: &'static str,
    /// Inclusive lower bound in percent of max HR
    pub lower_percent: f64,
    /// Exclusive upper bound in percent of max HR (`None` = unbounded)
    pub upper_percent: Option<f64>,
}

impl IntensityZone {
    /// Whether a percentage falls inside this zone's half-open interval.
    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.lower_percent && self.upper_percent.map_or(true, |upper| percentage < upper)
    }
}

/// Default zone colors
pub const ZONE_COLORS: [Color; 6] = [
    Color::new(148, 163, 184), // Rest: Slate
    Color::new(16, 185, 129),  // Z1: Green
    Color::new(59, 130, 246),  // Z2: Blue
    Color::new(245, 158, 11),  // Z3: Amber
    Color::new(239, 68, 68),   // Z4: Red
    Color::new(220, 38, 38),   // Z5: Dark red
];

/// The zone ladder in ascending order.
pub static ZONE_LADDER: [IntensityZone; 6] = [
    IntensityZone {
        kind: ZoneKind::Rest,
        name: "Rest",
        level: "Very Light",
        color: ZONE_COLORS[0],
        description: "Recovery and rest",
        range_label: "< 50%",
        lower_percent: 0.0,
        upper_percent: Some(50.0),
    },
    IntensityZone {
        kind: ZoneKind::Zone1,
        name: "Zone 1",
        level: "Light",
        color: ZONE_COLORS[1],
        description: "Warm-up and recovery",
        range_label: "50-60%",
        lower_percent: 50.0,
        upper_percent: Some(60.0),
    },
    IntensityZone {
        kind: ZoneKind::Zone2,
        name: "Zone 2",
        level: "Moderate",
        color: ZONE_COLORS[2],
        description: "Fat burning and endurance",
        range_label: "60-70%",
        lower_percent: 60.0,
        upper_percent: Some(70.0),
    },
    IntensityZone {
        kind: ZoneKind::Zone3,
        name: "Zone 3",
        level: "Vigorous",
        color: ZONE_COLORS[3],
        description: "Aerobic capacity building",
        range_label: "70-80%",
        lower_percent: 70.0,
        upper_percent: Some(80.0),
    },
    IntensityZone {
        kind: ZoneKind::Zone4,
        name: "Zone 4",
        level: "Hard",
        color: ZONE_COLORS[4],
        description: "Anaerobic threshold",
        range_label: "80-90%",
        lower_percent: 80.0,
        upper_percent: Some(90.0),
    },
    IntensityZone {
        kind: ZoneKind::Zone5,
        name: "Zone 5",
        level: "Maximum",
        color: ZONE_COLORS[5],
        description: "Maximum effort",
        range_label: "90-100%",
        lower_percent: 90.0,
        upper_percent: None,
    },
];

/// Map a heart rate percentage of max onto the ladder.
///
/// Negative percentages are clamped into Rest; NaN is rejected.
pub fn classify_percentage(percentage: f64) -> Result<&'static IntensityZone, MetricsError> {
    if percentage.is_nan() {
        return Err(MetricsError::invalid("heart rate percentage", "is not a number"));
    }

    let zone = ZONE_LADDER
        .iter()
        .find(|zone| zone.upper_percent.map_or(true, |upper| percentage < upper))
        .unwrap_or(&ZONE_LADDER[ZONE_LADDER.len() - 1]);

    Ok(zone)
}

/// Classify a heart rate against a maximum heart rate.
pub fn classify(heart_rate: f64, max_heart_rate: f64) -> Result<&'static IntensityZone, MetricsError> {
    let percentage = heart_rate_percentage(heart_rate, max_heart_rate)?;
    classify_percentage(percentage)
}
