//! Heart rate zones guide screen.

use egui::{RichText, Ui};

use crate::ui::content::{Accent, InfoCard, ZONES_INTRO, ZONE_GUIDE, ZONE_TRAINING_CARDS};
use crate::ui::theme::{card_frame, to_color32, Palette};
use crate::ui::widgets::ZoneChart;

pub struct ZonesGuideScreen;

impl ZonesGuideScreen {
    /// Render the zone table, ladder chart and training cards.
    ///
    /// `current_percentage` marks the last analysed heart rate on the chart.
    pub fn show(ui: &mut Ui, current_percentage: Option<f64>, palette: &Palette) {
        ui.label(RichText::new("💓 Heart Rate Zones Explained").size(20.0).strong());
        ui.add_space(6.0);
        ui.label(ZONES_INTRO);
        ui.add_space(10.0);

        egui::Grid::new("zone_guide_table")
            .num_columns(5)
            .striped(true)
            .spacing([28.0, 6.0])
            .show(ui, |ui| {
                for header in ["Zone", "Intensity", "HR % of Max", "Primary Benefit", "Cal/Min"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for row in ZONE_GUIDE.iter() {
                    let info = row.zone.info();
                    ui.label(RichText::new(info.name).color(to_color32(&info.color)).strong());
                    ui.label(row.intensity);
                    ui.label(row.hr_range);
                    ui.label(row.primary_benefit);
                    ui.label(row.calories_per_minute);
                    ui.end_row();
                }
            });

        ui.add_space(12.0);

        ZoneChart::new()
            .height(240.0)
            .with_marker(current_percentage)
            .show(ui);

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            for (i, card) in ZONE_TRAINING_CARDS.iter().enumerate() {
                show_info_card(&mut cols[i % 2], card, palette);
            }
        });
    }
}

fn accent_color(accent: Accent, palette: &Palette) -> egui::Color32 {
    match accent {
        Accent::Primary => palette.primary,
        Accent::Success => palette.success,
        Accent::Warning => palette.warning,
        Accent::Danger => palette.danger,
    }
}

fn show_info_card(ui: &mut Ui, card: &InfoCard, palette: &Palette) {
    let color = accent_color(card.accent, palette);
    card_frame(palette, Some(color)).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(card.title).strong().color(color));
        ui.add_space(4.0);
        ui.label(RichText::new(card.body).color(palette.text_secondary));
    });
}
