//! Main application state and egui integration.

use eframe::egui;

use calorie_burn::ml::{ModelBundle, FEATURE_COUNT};
use calorie_burn::storage::config::ConfigStore;
use calorie_burn::ui::content::{INPUT_PARAMETERS, MEDICAL_DISCLAIMER};
use calorie_burn::ui::screens::{
    AboutScreen, AnalysisScreen, PerformanceScreen, Screen, ZonesGuideScreen,
};
use calorie_burn::ui::theme::{card_frame, Theme};
use calorie_burn::ui::widgets::ZoneIndicator;

/// Main application state.
pub struct CalorieBurnApp {
    /// Current tab
    current_screen: Screen,
    /// UI theme
    theme: Theme,
    /// Application configuration and where it is saved
    store: ConfigStore,
    /// Loaded model and metrics
    bundle: ModelBundle,
    /// Analysis screen state
    analysis_screen: AnalysisScreen,
}

impl CalorieBurnApp {
    /// Create a new application instance.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: ConfigStore,
        bundle: ModelBundle,
    ) -> Self {
        let theme = Theme::from(store.config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(store.config.ui.font_scale);

        Self {
            current_screen: Screen::default(),
            theme,
            store,
            bundle,
            analysis_screen: AnalysisScreen::new(),
        }
    }

    /// Navigate to a different tab.
    fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);
        self.current_screen = screen;
    }

    /// Toggle between dark and light theme and persist the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.store.config.ui.theme = self.theme.into();
        match self.store.save() {
            Ok(true) => {}
            Ok(false) => tracing::debug!("Config is read-only this session, theme not saved"),
            Err(e) => tracing::warn!("Failed to save theme preference: {}", e),
        }
    }

    fn show_sidebar(&self, ui: &mut egui::Ui) {
        let palette = self.theme.palette();
        let metrics = &self.bundle.metrics;

        ui.add_space(8.0);
        ui.label(egui::RichText::new("📊 System Information").size(16.0).strong());
        ui.add_space(6.0);

        card_frame(palette, Some(palette.primary)).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new("MODEL ACCURACY (R²)")
                    .small()
                    .color(palette.text_secondary),
            );
            ui.label(
                egui::RichText::new(format!("{:.2}%", metrics.accuracy_percent()))
                    .size(26.0)
                    .strong()
                    .color(palette.primary),
            );
            match metrics.evaluation_note() {
                Some(note) => {
                    ui.label(egui::RichText::new(note).small().color(palette.warning));
                }
                None => {
                    ui.label(
                        egui::RichText::new("Evaluation data not documented")
                            .small()
                            .color(palette.warning),
                    );
                }
            }
        });

        card_frame(palette, Some(palette.primary)).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new("MEAN ABSOLUTE ERROR")
                    .small()
                    .color(palette.text_secondary),
            );
            ui.label(
                egui::RichText::new(format!("±{:.2}", metrics.mean_absolute_error))
                    .size(26.0)
                    .strong()
                    .color(palette.success),
            );
            ui.label(egui::RichText::new("calories").small().color(palette.text_secondary));
        });

        ui.separator();

        ui.label(egui::RichText::new("🔬 Algorithm Details").size(16.0).strong());
        card_frame(palette, Some(palette.secondary)).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(format!("Model: {}", self.bundle.model_name()));
            ui.label(format!("Features: {} physiological parameters", FEATURE_COUNT));
            ui.horizontal(|ui| {
                ui.label("Status:");
                ui.colored_label(palette.success, "● Loaded");
            });
        });

        ZoneIndicator::zone_badge(
            ui,
            "Last analysed zone:",
            self.analysis_screen.last_report().map(|report| report.zone),
        );
        ui.add_space(6.0);

        ui.label(egui::RichText::new("📋 Input Parameters").size(16.0).strong());
        for parameter in INPUT_PARAMETERS {
            ui.label(format!("• {}", parameter));
        }

        ui.separator();
        ui.label(egui::RichText::new("⚕ For educational purposes only").small().weak());
    }
}

impl eframe::App for CalorieBurnApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let palette = self.theme.palette();

        // Header with title, theme toggle and tabs
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("🏥 Calorie Burn Predictor")
                            .size(26.0)
                            .strong()
                            .color(palette.primary),
                    );
                    ui.label(
                        egui::RichText::new("ML analytics for workout performance assessment")
                            .color(palette.text_secondary),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for screen in Screen::ALL {
                    if ui
                        .selectable_label(self.current_screen == screen, screen.label())
                        .clicked()
                    {
                        self.navigate(screen);
                    }
                }
            });
            ui.add_space(4.0);
        });

        // Footer with model summary
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(self.bundle.metrics.summary_line(self.bundle.model_name()))
                        .small()
                        .color(palette.text_secondary),
                );
                ui.label(egui::RichText::new(MEDICAL_DISCLAIMER).small().weak());
            });
        });

        if self.store.config.ui.show_sidebar {
            egui::SidePanel::left("sidebar")
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.show_sidebar(ui));
                });
        }

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.current_screen {
                Screen::Analysis => {
                    let predictor = self.bundle.predictor.clone();
                    self.analysis_screen.show(ui, predictor.as_ref(), palette);
                }
                Screen::Performance => {
                    PerformanceScreen::show(
                        ui,
                        &self.bundle.metrics,
                        self.bundle.model_name(),
                        palette,
                    );
                }
                Screen::About => {
                    AboutScreen::show(ui, self.bundle.model_name(), palette);
                }
                Screen::HeartRateZones => {
                    let current = self
                        .analysis_screen
                        .last_report()
                        .map(|report| report.heart_rate_percentage);
                    ZonesGuideScreen::show(ui, current, palette);
                }
            });
        });
    }
}
