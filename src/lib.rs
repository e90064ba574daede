//! livechart-rs: bounded-memory live chart adapter.
//!
//! The crate sits between a UI layer and an option-driven chart renderer. It
//! splits seed data into an initial window and a pending queue, then turns
//! every incoming batch into per-series append records that keep each series
//! at most `visibleDataPointsNum` points long.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, LineChartConfig};
pub use error::{ChartError, ChartResult};
