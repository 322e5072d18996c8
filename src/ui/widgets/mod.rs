//! UI widgets for reusable components.

pub mod metric_display;
pub mod zone_chart;
pub mod zone_indicator;

pub use metric_display::{MetricDisplay, MetricSize};
pub use zone_chart::ZoneChart;
pub use zone_indicator::ZoneIndicator;
