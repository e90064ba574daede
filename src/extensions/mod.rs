//! Hooks around the engine that do not take part in windowing decisions.

pub mod observers;

pub use observers::{ChartEvent, ChartObserver, ObserverContext};
