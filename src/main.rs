//! Calorie Burn Predictor - workout analytics dashboard
//!
//! Main entry point for the application.

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use calorie_burn::ml::{load_holdout, score_predictor, ModelBundle};
use calorie_burn::storage::config::{self, ConfigStore};

mod app;

#[derive(Parser)]
#[command(
    name = "calorie-burn",
    about = "Calorie Burn Predictor",
    long_about = "Predict calories burned during a workout and put the result in context"
)]
struct Args {
    /// Configuration file override
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model artifact override
    #[arg(long)]
    model: Option<PathBuf>,

    /// Metrics artifact override
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Re-measure the model on this held-out set and compare with the metrics file
    #[arg(long)]
    holdout: Option<PathBuf>,
}

/// Tolerance for reported vs re-measured metrics (artifact values are rounded).
const METRICS_TOLERANCE: f64 = 1e-4;

fn check_metrics(bundle: &ModelBundle, holdout_path: &Path) -> anyhow::Result<()> {
    let samples = load_holdout(holdout_path)?;
    let measured = score_predictor(bundle.predictor.as_ref(), &samples)?;
    let reported = &bundle.metrics;

    tracing::info!(
        r2 = measured.r2,
        mae = measured.mean_absolute_error,
        samples = samples.len(),
        "Re-measured model on holdout set"
    );

    if (measured.r2 - reported.r2).abs() > METRICS_TOLERANCE
        || (measured.mean_absolute_error - reported.mean_absolute_error).abs() > METRICS_TOLERANCE
    {
        tracing::warn!(
            reported_r2 = reported.r2,
            reported_mae = reported.mean_absolute_error,
            "Metrics file does not match the model"
        );
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    tracing::info!("Starting Calorie Burn Predictor v{}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let store = ConfigStore::open(&config_path);
    tracing::info!(saving_to = ?store.path(), "Configuration ready");

    // Overrides apply to this session only and are never saved back
    let model_path = args
        .model
        .unwrap_or_else(|| store.config.model.model_path.clone());
    let metrics_path = args
        .metrics
        .unwrap_or_else(|| store.config.model.metrics_path.clone());

    // The dashboard is useless without a model, so a failed load ends the process.
    let bundle = ModelBundle::load(&model_path, &metrics_path)
        .inspect_err(|e| tracing::error!("Failed to load model: {}", e))
        .with_context(|| {
            format!(
                "loading model {:?} with metrics {:?}",
                model_path, metrics_path
            )
        })?;

    if let Some(holdout_path) = args.holdout {
        check_metrics(&bundle, &holdout_path)
            .with_context(|| format!("scoring holdout set {:?}", holdout_path))?;
    }

    tracing::info!("Model ready: {}", bundle.model_name());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Calorie Burn Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Calorie Burn Predictor",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::CalorieBurnApp::new(cc, store, bundle)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
