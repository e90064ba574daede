use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisMode, DataPoint, VisibleCap, XValue};
use crate::error::{ChartError, ChartResult};

/// Value carried by one append instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppendValue {
    /// Time axis: the renderer pairs every value with its own timestamp.
    Pair(XValue, f64),
    /// Category axis: bare value, labels live on the shared x-axis array.
    Value(f64),
}

impl AppendValue {
    #[must_use]
    pub fn y(&self) -> f64 {
        match self {
            Self::Pair(_, y) | Self::Value(y) => *y,
        }
    }
}

/// One series-scoped instruction for the renderer's append primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppendRecord {
    pub series_index: usize,
    pub value: AppendValue,
    /// Reserved for prepend support; always `false` from the planner.
    pub is_head: bool,
    /// `true` grows the visible window, `false` evicts the oldest point.
    pub grows_window: bool,
    /// Shared category label; only the last series record of a point has one.
    pub x_label: Option<XValue>,
}

/// How y arity that disagrees with the series count is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArityPolicy {
    /// Reject the batch with [`ChartError::SeriesArityMismatch`].
    #[default]
    Strict,
    /// Index-based mapping: extra values are dropped, missing series skipped.
    Lenient,
}

impl ArityPolicy {
    /// Number of leading y values that map onto series for one point.
    pub fn mapped_len(
        self,
        point_index: usize,
        arity: usize,
        series_count: usize,
    ) -> ChartResult<usize> {
        match self {
            Self::Strict if arity != series_count => Err(ChartError::SeriesArityMismatch {
                point_index,
                expected: series_count,
                actual: arity,
            }),
            Self::Strict => Ok(arity),
            Self::Lenient => Ok(arity.min(series_count)),
        }
    }
}

/// Renderer state the planner needs, captured by value before planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendContext {
    /// Points currently rendered in the first series.
    pub current_point_count: usize,
    pub series_count: usize,
    pub cap: VisibleCap,
    pub axis_mode: AxisMode,
}

impl AppendContext {
    #[must_use]
    pub fn remaining_growth(&self) -> usize {
        self.cap.remaining_growth(self.current_point_count)
    }
}

/// Computes per-series append records for `points`.
///
/// Growth budget is spent per point, so all series of a point share the same
/// `grows_window` flag. The whole batch is validated before any record is
/// returned.
pub fn plan_append(
    points: &[DataPoint],
    context: &AppendContext,
    policy: ArityPolicy,
) -> ChartResult<Vec<AppendRecord>> {
    if points.is_empty() {
        return Ok(Vec::new());
    }
    if context.series_count == 0 {
        return Err(ChartError::InvalidData(
            "cannot append to a chart without series".to_owned(),
        ));
    }

    let mut remaining_growth = context.remaining_growth();
    let mut records = Vec::with_capacity(points.len() * context.series_count);
    for (point_index, point) in points.iter().enumerate() {
        let values = point.y.values();
        let mapped = policy.mapped_len(point_index, values.len(), context.series_count)?;
        let grows_window = remaining_growth > 0;
        remaining_growth = remaining_growth.saturating_sub(1);

        let last_index = mapped.checked_sub(1);
        for (series_index, &y) in values[..mapped].iter().enumerate() {
            let record = match context.axis_mode {
                AxisMode::Time => AppendRecord {
                    series_index,
                    value: AppendValue::Pair(point.x.clone(), y),
                    is_head: false,
                    grows_window,
                    x_label: None,
                },
                AxisMode::Category => AppendRecord {
                    series_index,
                    value: AppendValue::Value(y),
                    is_head: false,
                    grows_window,
                    x_label: (Some(series_index) == last_index).then(|| point.x.clone()),
                },
            };
            records.push(record);
        }
    }

    trace!(
        points_len = points.len(),
        records_len = records.len(),
        remaining_growth = context.remaining_growth(),
        axis_mode = ?context.axis_mode,
        "planned append"
    );
    Ok(records)
}
