//! UI screens for the application.

pub mod about;
pub mod analysis;
pub mod performance;
pub mod zones_guide;

pub use about::AboutScreen;
pub use analysis::{AnalysisOutcome, AnalysisScreen};
pub use performance::PerformanceScreen;
pub use zones_guide::ZonesGuideScreen;

/// Screen navigation state (one tab per screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Input form and results
    #[default]
    Analysis,
    /// Model metrics
    Performance,
    /// System overview
    About,
    /// Heart rate zone guide
    HeartRateZones,
}

impl Screen {
    /// All tabs in display order.
    pub const ALL: [Screen; 4] = [
        Screen::Analysis,
        Screen::Performance,
        Screen::About,
        Screen::HeartRateZones,
    ];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Analysis => "🎯 Analysis",
            Screen::Performance => "📊 Performance Metrics",
            Screen::About => "💡 About",
            Screen::HeartRateZones => "❓ Heart Rate Zones",
        }
    }
}
