//! Static educational copy shown on the About and Heart Rate Zones tabs.

use crate::metrics::ZoneKind;

/// One row of the heart rate zone guide table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneGuideRow {
    pub zone: ZoneKind,
    pub intensity: &'static str,
    pub hr_range: &'static str,
    pub primary_benefit: &'static str,
    /// Typical burn rate in kcal/min
    pub calories_per_minute: &'static str,
}

/// Training zones 1-5. Rest is not a training zone and is omitted.
pub const ZONE_GUIDE: [ZoneGuideRow; 5] = [
    ZoneGuideRow {
        zone: ZoneKind::Zone1,
        intensity: "Light",
        hr_range: "50-60%",
        primary_benefit: "Warm-up & Recovery",
        calories_per_minute: "5-7",
    },
    ZoneGuideRow {
        zone: ZoneKind::Zone2,
        intensity: "Moderate",
        hr_range: "60-70%",
        primary_benefit: "Fat Burning & Endurance",
        calories_per_minute: "7-10",
    },
    ZoneGuideRow {
        zone: ZoneKind::Zone3,
        intensity: "Vigorous",
        hr_range: "70-80%",
        primary_benefit: "Aerobic Capacity",
        calories_per_minute: "10-13",
    },
    ZoneGuideRow {
        zone: ZoneKind::Zone4,
        intensity: "Hard",
        hr_range: "80-90%",
        primary_benefit: "Anaerobic Threshold",
        calories_per_minute: "13-16",
    },
    ZoneGuideRow {
        zone: ZoneKind::Zone5,
        intensity: "Maximum",
        hr_range: "90-100%",
        primary_benefit: "Maximum Performance",
        calories_per_minute: "16+",
    },
];

/// Accent role of an info card, resolved against the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Success,
    Warning,
    Danger,
}

/// A titled block of explanatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
    pub accent: Accent,
}

pub const ZONE_TRAINING_CARDS: [InfoCard; 4] = [
    InfoCard {
        title: "Zone 1-2: Fat Burning",
        body: "Ideal for weight loss and building aerobic base. Body primarily uses fat as fuel. \
               Sustainable for long durations (30-60+ minutes).",
        accent: Accent::Primary,
    },
    InfoCard {
        title: "Zone 3-4: Performance Training",
        body: "Improves cardiovascular fitness and lactate threshold. Carbohydrates become primary \
               fuel source. Suitable for 20-40 minute intervals.",
        accent: Accent::Warning,
    },
    InfoCard {
        title: "Zone 5: Maximum Effort",
        body: "Highest calorie burn rate (>10 cal/min). Develops speed and power. Only sustainable \
               for short bursts (1-5 minutes). Reserved for advanced athletes.",
        accent: Accent::Danger,
    },
    InfoCard {
        title: "Training Recommendations",
        body: "Balanced training should include 70-80% time in Zones 1-2, 15-20% in Zones 3-4, \
               and 5-10% in Zone 5 for optimal results.",
        accent: Accent::Success,
    },
];

pub const ZONES_INTRO: &str = "Heart rate training zones are calculated as percentages of your \
    maximum heart rate (MHR), which is estimated as 220 - age. Each zone targets specific \
    physiological adaptations and training goals.";

/// Why each model input matters, in form order.
pub const FEATURE_NOTES: [(&str, &str); 6] = [
    (
        "Gender",
        "Biological sex significantly affects basal metabolic rate (BMR) due to differences in \
         muscle mass and hormonal profiles.",
    ),
    (
        "Age",
        "Metabolic rate decreases approximately 2% per decade after age 25, affecting energy \
         expenditure calculations.",
    ),
    (
        "Height & Weight",
        "Body composition and surface area are primary determinants of caloric expenditure \
         during physical activity.",
    ),
    (
        "Exercise Duration",
        "Time-dependent energy expenditure follows established metabolic pathways and \
         substrate utilization patterns.",
    ),
    (
        "Heart Rate",
        "Direct correlation with oxygen consumption (VO2) and energy expenditure, serving as a \
         reliable intensity indicator.",
    ),
    (
        "Body Temperature",
        "Elevated core temperature reflects increased metabolic activity and thermogenesis \
         during exercise.",
    ),
];

pub const CLINICAL_APPLICATIONS: [&str; 5] = [
    "Fitness program optimization",
    "Weight management protocols",
    "Athletic performance monitoring",
    "Rehabilitation progress tracking",
    "Metabolic health assessment",
];

pub const SYSTEM_OVERVIEW: &str = "This application uses a trained regression model to estimate \
    calorie expenditure from physiological and exercise parameters. Predictions are combined with \
    heart rate zone analysis and body mass index to give context to each workout.";

pub const MEDICAL_DISCLAIMER: &str = "This tool is designed for educational and informational \
    purposes. Individual metabolic variations exist. For medical advice, personalized fitness \
    planning, or health concerns, please consult qualified healthcare professionals.";

pub const MAE_EXPLAINED: [&str; 3] = [
    "Average prediction deviation from actual values",
    "Lower values indicate higher precision",
    "Clinically acceptable range: < 5 calories",
];

pub const R2_EXPLAINED: [&str; 3] = [
    "Proportion of variance explained by model",
    "Range: 0.0 (poor) to 1.0 (perfect)",
    "Clinical standard: > 0.90 for deployment",
];

/// Input parameter list shown in the side panel.
pub const INPUT_PARAMETERS: [&str; 5] = [
    "Gender & Age",
    "Height & Weight",
    "Exercise Duration",
    "Heart Rate (bpm)",
    "Body Temperature (°C)",
];
