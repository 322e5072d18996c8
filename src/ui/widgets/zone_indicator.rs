//! Zone indicator widget for heart rate intensity zones.

use egui::{Color32, Pos2, Rect, RichText, Ui, Vec2};

use crate::metrics::{ZoneKind, ZONE_LADDER};
use crate::ui::theme::to_color32;

/// A zone indicator that shows the current zone with a color band.
pub struct ZoneIndicator;

impl ZoneIndicator {
    /// Render the six-band ladder and highlight the current zone.
    pub fn show(ui: &mut Ui, current_zone: Option<ZoneKind>) {
        let available_width = ui.available_width();
        let bar_height = 24.0;
        let zone_width = available_width / ZONE_LADDER.len() as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(available_width, bar_height + 20.0),
            egui::Sense::hover(),
        );

        let rect = response.rect;
        let bar_rect = Rect::from_min_size(rect.min, Vec2::new(available_width, bar_height));

        for zone in ZONE_LADDER.iter() {
            let zone_x = rect.min.x + zone.kind.index() as f32 * zone_width;
            let zone_rect = Rect::from_min_size(
                Pos2::new(zone_x, bar_rect.min.y),
                Vec2::new(zone_width, bar_height),
            );

            let is_current = current_zone == Some(zone.kind);
            let color = to_color32(&zone.color);

            // Dim zones that are not current
            let fill_color = if is_current {
                color
            } else {
                color.linear_multiply(0.3)
            };

            painter.rect_filled(zone_rect, 0.0, fill_color);

            let text_color = if is_current {
                Color32::WHITE
            } else {
                Color32::from_gray(100)
            };

            painter.text(
                zone_rect.center(),
                egui::Align2::CENTER_CENTER,
                short_label(zone.kind),
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        // Draw current zone label below bar
        if let Some(zone) = current_zone {
            let info = zone.info();
            let label_y = bar_rect.max.y + 4.0;

            painter.text(
                Pos2::new(rect.center().x, label_y + 8.0),
                egui::Align2::CENTER_CENTER,
                format!("{} - {}", info.name, info.level),
                egui::FontId::proportional(14.0),
                to_color32(&info.color),
            );
        }
    }

    /// Render a compact zone badge.
    pub fn zone_badge(ui: &mut Ui, label: &str, zone: Option<ZoneKind>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).size(12.0).weak());

            match zone {
                Some(z) => {
                    let color = to_color32(&z.info().color);
                    ui.label(RichText::new(short_label(z)).color(color).strong().size(14.0));
                }
                None => {
                    ui.label(RichText::new("-").weak().size(14.0));
                }
            }
        });
    }
}

/// Compact band label ("R", "Z1" .. "Z5").
fn short_label(zone: ZoneKind) -> String {
    match zone {
        ZoneKind::Rest => "R".to_string(),
        other => format!("Z{}", other.index()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_labels() {
        assert_eq!(short_label(ZoneKind::Rest), "R");
        assert_eq!(short_label(ZoneKind::Zone1), "Z1");
        assert_eq!(short_label(ZoneKind::Zone5), "Z5");
    }
}
