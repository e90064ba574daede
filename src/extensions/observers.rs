use serde::{Deserialize, Serialize};

use crate::core::{AxisMode, VisibleCap};

/// Read-only engine state passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub initialized: bool,
    pub pending_len: usize,
    pub visible_cap: VisibleCap,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// The renderer reported a configured x axis for the first time.
    Initialized {
        series_count: usize,
        axis_mode: AxisMode,
    },
    PendingQueueFlushed {
        points_len: usize,
    },
    DataAppended {
        points_len: usize,
        records_len: usize,
        /// Points that grew the window instead of evicting.
        grown_points: usize,
    },
    YAxisMaxChanged {
        max: f64,
    },
    /// A best-effort operation failed and the error was not returned.
    AppendFailed {
        message: String,
    },
}

/// Hook for hosts that need to see what the engine did, including the
/// failures `add_data_points` swallows.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ObserverContext);
}
