//! Zone ladder chart using egui_plot.
//!
//! One bar per zone spanning its percentage band, with an optional marker for
//! the most recently analysed heart rate percentage.

use egui::{Response, Ui};
use egui_plot::{Bar, BarChart, HLine, Plot};

use crate::metrics::ZONE_LADDER;
use crate::ui::theme::to_color32;

/// Display ceiling for the open-ended top zone.
const TOP_ZONE_DISPLAY_MAX: f64 = 100.0;

/// Heart rate zone ladder chart.
pub struct ZoneChart {
    /// Chart height
    height: f32,
    /// Current heart rate percentage to mark
    marker: Option<f64>,
}

impl ZoneChart {
    pub fn new() -> Self {
        Self {
            height: 220.0,
            marker: None,
        }
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Mark a heart rate percentage on the chart.
    pub fn with_marker(mut self, percentage: Option<f64>) -> Self {
        self.marker = percentage;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        let bars: Vec<Bar> = ZONE_LADDER
            .iter()
            .map(|zone| {
                let upper = zone.upper_percent.unwrap_or(TOP_ZONE_DISPLAY_MAX);
                Bar::new(zone.kind.index() as f64, upper - zone.lower_percent)
                    .base_offset(zone.lower_percent)
                    .width(0.7)
                    .fill(to_color32(&zone.color))
                    .name(format!("{} ({})", zone.name, zone.range_label))
            })
            .collect();

        let chart = BarChart::new("Zones", bars);

        Plot::new("zone_ladder_chart")
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(0.0)
            .include_y(TOP_ZONE_DISPLAY_MAX + 10.0)
            .x_axis_formatter(|mark, _range| {
                let index = mark.value.round();
                if index < 0.0 || (mark.value - index).abs() > 1e-6 {
                    return String::new();
                }
                ZONE_LADDER
                    .get(index as usize)
                    .map(|zone| zone.name.to_string())
                    .unwrap_or_default()
            })
            .y_axis_label("% of Max HR")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);

                if let Some(percentage) = self.marker {
                    plot_ui.hline(HLine::new("Current", percentage).width(2.0));
                }
            })
            .response
    }
}

impl Default for ZoneChart {
    fn default() -> Self {
        Self::new()
    }
}
