mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod json_contract;
mod line_chart;
mod observer_dispatch;
mod observer_registry;
mod option_seed;
mod validation;

pub use data_controller::{AppendOutcome, AppendSummary};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{CHART_OPTIONS_JSON_SCHEMA_V1, ChartOptionsJsonContractV1};
pub use line_chart::LineChartConfig;
pub use option_seed::fill_axis_data;
