//! Analysis screen: input form, prediction and result breakdown.

use egui::{Color32, RichText, Ui};

use crate::metrics::{
    estimate_max_heart_rate, heart_rate_percentage, BmiCategory, EvaluationReport, Gender,
    InputBounds, WorkoutInput,
};
use crate::ml::{analyze_workout, CaloriePredictor};
use crate::ui::theme::{card_frame, to_color32, Palette};
use crate::ui::widgets::{MetricDisplay, ZoneIndicator};

/// Result of the last "Analyze" click.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Prediction and evaluation succeeded for this input snapshot
    Completed {
        input: WorkoutInput,
        report: EvaluationReport,
    },
    /// The model or the evaluator rejected the input
    Failed(String),
}

/// One row of the detailed breakdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub parameter: &'static str,
    pub value: String,
}

/// Format the seven inputs for the detailed breakdown table.
pub fn breakdown_rows(input: &WorkoutInput, report: &EvaluationReport) -> Vec<BreakdownRow> {
    let row = |parameter, value| BreakdownRow { parameter, value };
    vec![
        row("Gender", input.gender.to_string()),
        row("Age", format!("{} years", input.age)),
        row("Height", format!("{:.0} cm", input.height_cm)),
        row("Weight", format!("{:.0} kg", input.weight_kg)),
        row("Duration", format!("{:.0} min", input.duration_min)),
        row(
            "Heart Rate",
            format!(
                "{:.0} bpm ({:.1}% max)",
                input.heart_rate_bpm, report.heart_rate_percentage
            ),
        ),
        row("Body Temperature", format!("{:.1}°C", input.body_temp_c)),
    ]
}

/// Analysis screen UI state.
pub struct AnalysisScreen {
    /// Current form values
    pub input: WorkoutInput,
    /// Slider ranges
    bounds: InputBounds,
    /// Last analysis result
    outcome: Option<AnalysisOutcome>,
}

impl AnalysisScreen {
    pub fn new() -> Self {
        Self {
            input: WorkoutInput::default(),
            bounds: InputBounds::default(),
            outcome: None,
        }
    }

    /// Run the predictor on the current form values and keep the outcome.
    pub fn analyze(&mut self, predictor: &dyn CaloriePredictor) -> &AnalysisOutcome {
        let outside = self.input.check_bounds(&self.bounds);
        if !outside.is_empty() {
            tracing::warn!(fields = ?outside, "Inputs outside form ranges");
        }

        let outcome = match analyze_workout(predictor, &self.input) {
            Ok(report) => AnalysisOutcome::Completed {
                input: self.input,
                report,
            },
            Err(e) => {
                tracing::warn!("Analysis failed: {}", e);
                AnalysisOutcome::Failed(e.to_string())
            }
        };

        self.outcome.insert(outcome)
    }

    /// Report of the last successful analysis.
    pub fn last_report(&self) -> Option<&EvaluationReport> {
        match &self.outcome {
            Some(AnalysisOutcome::Completed { report, .. }) => Some(report),
            _ => None,
        }
    }

    /// Render the analysis screen.
    pub fn show(&mut self, ui: &mut Ui, predictor: &dyn CaloriePredictor, palette: &Palette) {
        ui.label(
            RichText::new("Patient & Workout Data Input")
                .size(20.0)
                .strong()
                .color(palette.secondary),
        );
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            self.show_demographics(&mut columns[0]);
            self.show_workout_metrics(&mut columns[1], palette);
        });

        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(
                RichText::new("🔬 ANALYZE WORKOUT")
                    .size(18.0)
                    .strong()
                    .color(Color32::WHITE),
            )
            .fill(palette.primary);

            if ui.add_sized([320.0, 44.0], button).clicked() {
                self.analyze(predictor);
            }
        });

        match &self.outcome {
            Some(AnalysisOutcome::Completed { input, report }) => {
                ui.add_space(12.0);
                ui.separator();
                show_results(ui, input, report, palette);
            }
            Some(AnalysisOutcome::Failed(message)) => {
                ui.add_space(12.0);
                ui.colored_label(palette.danger, format!("Unable to analyze workout: {}", message));
            }
            None => {}
        }
    }

    fn show_demographics(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("👤 Demographic Information").size(16.0).strong());
        ui.add_space(6.0);

        egui::ComboBox::from_label("Gender")
            .selected_text(self.input.gender.label())
            .show_ui(ui, |ui| {
                for gender in Gender::ALL {
                    ui.selectable_value(&mut self.input.gender, gender, gender.label());
                }
            })
            .response
            .on_hover_text("Biological sex affects metabolic rate");

        ui.add(egui::Slider::new(&mut self.input.age, self.bounds.age.clone()).text("Age (years)"))
            .on_hover_text("Age influences basal metabolic rate");

        ui.add(
            egui::Slider::new(&mut self.input.height_cm, self.bounds.height_cm.clone())
                .step_by(1.0)
                .text("Height (cm)"),
        )
        .on_hover_text("Height in centimeters");

        ui.add(
            egui::Slider::new(&mut self.input.weight_kg, self.bounds.weight_kg.clone())
                .step_by(1.0)
                .text("Weight (kg)"),
        )
        .on_hover_text("Body weight in kilograms");
    }

    fn show_workout_metrics(&mut self, ui: &mut Ui, palette: &Palette) {
        ui.label(RichText::new("💪 Workout Metrics").size(16.0).strong());
        ui.add_space(6.0);

        ui.add(
            egui::Slider::new(&mut self.input.duration_min, self.bounds.duration_min.clone())
                .step_by(1.0)
                .text("Duration (minutes)"),
        )
        .on_hover_text("Total exercise duration");

        ui.add(
            egui::Slider::new(
                &mut self.input.heart_rate_bpm,
                self.bounds.heart_rate_bpm.clone(),
            )
            .step_by(1.0)
            .text("Average Heart Rate (bpm)"),
        )
        .on_hover_text("Average heart rate during exercise");

        ui.add(
            egui::Slider::new(&mut self.input.body_temp_c, self.bounds.body_temp_c.clone())
                .step_by(self.bounds.body_temp_step)
                .fixed_decimals(1)
                .text("Body Temperature (°C)"),
        )
        .on_hover_text("Core body temperature during workout");

        ui.add_space(8.0);

        // Live max HR readout
        card_frame(palette, Some(palette.secondary)).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match estimate_max_heart_rate(self.input.age) {
                Ok(max_hr) => {
                    ui.label(RichText::new(format!("Max Heart Rate: {} bpm", max_hr)).strong());
                    if let Ok(pct) = heart_rate_percentage(self.input.heart_rate_bpm, max_hr as f64) {
                        ui.label(format!("Current HR %: {:.1}% of maximum", pct));
                    }
                }
                Err(e) => {
                    ui.colored_label(palette.warning, e.to_string());
                }
            }
        });
    }
}

impl Default for AnalysisScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn section_header(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).size(18.0).strong().color(palette.text_primary));
    ui.add_space(6.0);
}

fn show_results(ui: &mut Ui, input: &WorkoutInput, report: &EvaluationReport, palette: &Palette) {
    section_header(ui, "🔬 Analysis Results", palette);

    ui.vertical_centered(|ui| {
        card_frame(palette, Some(palette.primary)).show(ui, |ui| {
            MetricDisplay::calories(report.calories_burned)
                .with_color(palette.primary)
                .show(ui);
        });
    });

    ui.add_space(8.0);

    let bmi_color = match report.bmi_category {
        BmiCategory::Normal => palette.success,
        BmiCategory::Underweight | BmiCategory::Overweight => palette.warning,
    };

    ui.columns(4, |cols| {
        MetricDisplay::duration(input.duration_min).show(&mut cols[0]);
        MetricDisplay::heart_rate(input.heart_rate_bpm).show(&mut cols[1]);
        MetricDisplay::burn_rate(report.calories_per_minute).show(&mut cols[2]);
        MetricDisplay::new(format!("{:.1}", report.bmi), "", "BMI")
            .with_caption(report.bmi_category.label(), bmi_color)
            .show(&mut cols[3]);
    });

    section_header(ui, "💡 Workout Intensity Analysis", palette);

    ui.columns(2, |cols| {
        let zone = report.zone_info();
        let zone_color = to_color32(&zone.color);

        card_frame(palette, Some(zone_color)).show(&mut cols[0], |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new(format!("● {} - {} Intensity", zone.name, zone.level))
                    .size(20.0)
                    .strong()
                    .color(zone_color),
            );
            ui.label(RichText::new(zone.description).color(palette.text_secondary));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Heart Rate Range").small().color(palette.text_secondary));
                    ui.label(
                        RichText::new(format!("{} Max HR", zone.range_label))
                            .size(16.0)
                            .strong()
                            .color(palette.primary),
                    );
                });
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new("Current").small().color(palette.text_secondary));
                    ui.label(
                        RichText::new(format!("{:.1}%", report.heart_rate_percentage))
                            .size(16.0)
                            .strong()
                            .color(zone_color),
                    );
                });
            });

            ui.add_space(8.0);
            ZoneIndicator::show(ui, Some(report.zone));
        });

        let tier = report.recommendation;
        let tier_color = to_color32(&tier.color());

        card_frame(palette, Some(tier_color)).show(&mut cols[1], |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(tier.icon()).size(28.0));
            ui.label(RichText::new(tier.title()).size(17.0).strong().color(tier_color));
            ui.label(RichText::new(tier.advice()).color(palette.text_secondary));
        });
    });

    section_header(ui, "📈 Detailed Breakdown", palette);

    egui::Grid::new("analysis_breakdown")
        .num_columns(3)
        .striped(true)
        .spacing([32.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Parameter").strong());
            ui.label(RichText::new("Value").strong());
            ui.label(RichText::new("Status").strong());
            ui.end_row();

            for row in breakdown_rows(input, report) {
                ui.label(row.parameter);
                ui.label(row.value);
                ui.colored_label(palette.success, "✓");
                ui.end_row();
            }
        });
}
