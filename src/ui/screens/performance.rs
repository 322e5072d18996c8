//! Model performance screen.

use egui::{RichText, Ui};

use crate::ml::ModelMetrics;
use crate::ui::content::{MAE_EXPLAINED, R2_EXPLAINED};
use crate::ui::theme::{card_frame, Palette};

/// Model performance screen UI.
pub struct PerformanceScreen;

impl PerformanceScreen {
    /// Render MAE and R² cards with their explanations.
    pub fn show(ui: &mut Ui, metrics: &ModelMetrics, model_name: &str, palette: &Palette) {
        ui.label(
            RichText::new("📊 Model Performance Analysis")
                .size(20.0)
                .strong()
                .color(palette.secondary),
        );
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            card_frame(palette, None).show(&mut cols[0], |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Mean Absolute Error").color(palette.text_secondary));
                    ui.label(
                        RichText::new(format!("{:.2}", metrics.mean_absolute_error))
                            .size(44.0)
                            .strong()
                            .color(palette.primary),
                    );
                    ui.label(RichText::new("calories per prediction").color(palette.text_secondary));
                });
            });

            card_frame(palette, None).show(&mut cols[1], |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("R² Score (Accuracy)").color(palette.text_secondary));
                    ui.label(
                        RichText::new(format!("{:.4}", metrics.r2))
                            .size(44.0)
                            .strong()
                            .color(palette.success),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{:.2}% variance explained",
                            metrics.accuracy_percent()
                        ))
                        .color(palette.text_secondary),
                    );
                });
            });
        });

        ui.add_space(12.0);

        card_frame(palette, Some(palette.success)).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("Model Summary").strong().color(palette.success));
            ui.label(performance_summary(metrics, model_name));
            if let Some(note) = metrics.evaluation_note() {
                ui.label(RichText::new(note).small().color(palette.warning));
            }
        });

        ui.add_space(12.0);
        ui.label(RichText::new("📐 Performance Metrics Explained").size(18.0).strong());
        ui.add_space(6.0);

        ui.columns(2, |cols| {
            cols[0].label(RichText::new("Mean Absolute Error (MAE):").strong());
            for line in MAE_EXPLAINED {
                cols[0].label(format!("• {}", line));
            }
            cols[0].label(format!("• Current MAE: ±{:.2} calories", metrics.mean_absolute_error));

            cols[1].label(RichText::new("R² Score (Coefficient of Determination):").strong());
            for line in R2_EXPLAINED {
                cols[1].label(format!("• {}", line));
            }
            cols[1].label(format!("• Current R²: {:.4}", metrics.r2));
        });
    }
}

/// Narrative summary of the model's held-out performance.
pub fn performance_summary(metrics: &ModelMetrics, model_name: &str) -> String {
    format!(
        "The {} model has an R² score of {:.4}, explaining {:.2}% of variance in calorie \
         expenditure, with a mean absolute error of {:.2} calories per prediction.",
        model_name,
        metrics.r2,
        metrics.accuracy_percent(),
        metrics.mean_absolute_error
    )
}
