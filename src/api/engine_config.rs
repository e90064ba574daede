use serde::{Deserialize, Serialize};

use crate::core::{ArityPolicy, DataPoint, VisibleCap};
use crate::error::ChartResult;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Keys follow the renderer's
/// camelCase naming (`visibleDataPointsNum`, `data`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEngineConfig {
    /// Falls back to the options' own cap, then to 80.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_data_points_num: Option<VisibleCap>,
    /// Initial seed; overflow beyond the cap becomes the pending queue.
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub arity_policy: ArityPolicy,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the visible cap from a point count; zero is rejected.
    pub fn with_visible_data_points_num(mut self, limit: usize) -> ChartResult<Self> {
        self.visible_data_points_num = Some(VisibleCap::new(limit)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_visible_cap(mut self, cap: VisibleCap) -> Self {
        self.visible_data_points_num = Some(cap);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<DataPoint>) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_arity_policy(mut self, policy: ArityPolicy) -> Self {
        self.arity_policy = policy;
        self
    }
}
