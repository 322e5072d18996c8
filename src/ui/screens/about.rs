//! About screen with the system overview and input feature notes.

use egui::{RichText, Ui};

use crate::ml::FEATURE_COUNT;
use crate::ui::content::{CLINICAL_APPLICATIONS, FEATURE_NOTES, MEDICAL_DISCLAIMER, SYSTEM_OVERVIEW};
use crate::ui::theme::{card_frame, Palette};

pub struct AboutScreen;

impl AboutScreen {
    pub fn show(ui: &mut Ui, model_name: &str, palette: &Palette) {
        ui.label(
            RichText::new("ℹ System Overview")
                .size(20.0)
                .strong()
                .color(palette.secondary),
        );
        ui.add_space(8.0);

        ui.label(RichText::new("🏥 Calorie Prediction System").size(18.0).strong());
        ui.label(SYSTEM_OVERVIEW);
        ui.add_space(10.0);

        ui.label(RichText::new("🧠 Algorithm Architecture").size(16.0).strong());
        ui.label(format!("• Model Type: {}", model_name));
        ui.label(format!("• Feature Engineering: {} physiological parameters", FEATURE_COUNT));
        ui.label("• Validation: held-out test split (MAE and R²)");
        ui.add_space(10.0);

        ui.label(RichText::new("📊 Input Features & Clinical Relevance").size(16.0).strong());
        for (i, (name, note)) in FEATURE_NOTES.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(format!("{}. {}", i + 1, name)).strong());
                ui.label(*note);
            });
        }
        ui.add_space(10.0);

        ui.label(RichText::new("🎯 Clinical Applications").size(16.0).strong());
        for application in CLINICAL_APPLICATIONS {
            ui.label(format!("• {}", application));
        }
        ui.add_space(10.0);

        card_frame(palette, Some(palette.warning)).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("⚠ Medical Disclaimer").strong().color(palette.warning));
            ui.label(MEDICAL_DISCLAIMER);
        });
    }
}
