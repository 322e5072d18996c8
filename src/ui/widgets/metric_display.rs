//! Metric display widget for the result row and model cards.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

/// A widget for displaying a single labelled value.
pub struct MetricDisplay<'a> {
    /// The metric value to display
    value: String,
    /// The unit label
    unit: &'a str,
    /// The metric name/label
    label: &'a str,
    /// Optional value color
    color: Option<Color32>,
    /// Optional caption under the value (e.g. BMI status)
    caption: Option<(String, Color32)>,
    /// Size multiplier
    size: MetricSize,
}

/// Size variants for metric display.
#[derive(Debug, Clone, Copy, Default)]
pub enum MetricSize {
    /// Medium metric (standard display)
    #[default]
    Medium,
    /// Large metric (primary focus)
    Large,
}

impl MetricSize {
    fn value_size(&self) -> f32 {
        match self {
            MetricSize::Medium => 32.0,
            MetricSize::Large => 56.0,
        }
    }

    fn unit_size(&self) -> f32 {
        match self {
            MetricSize::Medium => 14.0,
            MetricSize::Large => 18.0,
        }
    }

    fn label_size(&self) -> f32 {
        match self {
            MetricSize::Medium => 13.0,
            MetricSize::Large => 16.0,
        }
    }
}

impl<'a> MetricDisplay<'a> {
    /// Create a new metric display.
    pub fn new(value: impl Into<String>, unit: &'a str, label: &'a str) -> Self {
        Self {
            value: value.into(),
            unit,
            label,
            color: None,
            caption: None,
            size: MetricSize::default(),
        }
    }

    /// Workout duration in minutes.
    pub fn duration(minutes: f64) -> Self {
        Self::new(format!("{:.0}", minutes), "min", "Duration")
    }

    /// Average heart rate.
    pub fn heart_rate(bpm: f64) -> Self {
        Self::new(format!("{:.0}", bpm), "bpm", "Avg Heart Rate")
    }

    /// Calories burned per minute.
    pub fn burn_rate(calories_per_minute: f64) -> Self {
        Self::new(format!("{:.2}", calories_per_minute), "cal/min", "Burn Rate")
    }

    /// Total predicted calories.
    pub fn calories(calories: f64) -> Self {
        Self::new(format!("{:.2}", calories), "", "Calories Burned").with_size(MetricSize::Large)
    }

    /// Set a color for the value.
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Add a colored caption below the value.
    pub fn with_caption(mut self, caption: impl Into<String>, color: Color32) -> Self {
        self.caption = Some((caption.into(), color));
        self
    }

    /// Set the display size.
    pub fn with_size(mut self, size: MetricSize) -> Self {
        self.size = size;
        self
    }

    /// Render the metric display.
    pub fn show(self, ui: &mut Ui) {
        let min_size = match self.size {
            MetricSize::Medium => Vec2::new(120.0, 80.0),
            MetricSize::Large => Vec2::new(200.0, 110.0),
        };

        egui::Frame::new().inner_margin(8.0).show(ui, |ui| {
            ui.set_min_size(min_size);

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(self.label).size(self.size.label_size()).weak());

                ui.add_space(4.0);

                let value_text = RichText::new(&self.value)
                    .size(self.size.value_size())
                    .strong();

                let value_text = if let Some(color) = self.color {
                    value_text.color(color)
                } else {
                    value_text
                };

                // Value and unit on same line
                ui.horizontal(|ui| {
                    ui.label(value_text);
                    if !self.unit.is_empty() {
                        ui.label(RichText::new(self.unit).size(self.size.unit_size()).weak());
                    }
                });

                if let Some((caption, color)) = &self.caption {
                    ui.label(RichText::new(caption).size(self.size.label_size()).color(*color));
                }
            });
        });
    }
}
