//! Integration test modules.

mod config_test;
mod model_loading_test;
mod prediction_pipeline_test;
