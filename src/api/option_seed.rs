use tracing::debug;

use crate::core::{ArityPolicy, AxisMode, DataPoint, VisibleCap, split_initial_data};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartOptions, SeriesValue};

/// Resets axes and series in `options` and fills them with the part of
/// `data` that fits the visible cap. Returns the overflow, oldest first.
///
/// The cap comes from `cap`, then from `options.visible_data_points_num`,
/// then from the crate default; whichever wins is written back to `options`
/// so the renderer reports it on later reads.
pub fn fill_axis_data(
    options: &mut ChartOptions,
    data: Vec<DataPoint>,
    cap: Option<VisibleCap>,
    policy: ArityPolicy,
) -> ChartResult<Vec<DataPoint>> {
    let axis_mode = options.axis_mode().ok_or(ChartError::MissingAxis)?;
    let series_count = options.series.len();
    for (point_index, point) in data.iter().enumerate() {
        policy.mapped_len(point_index, point.y.arity(), series_count)?;
    }

    let cap = cap
        .or(options.visible_data_points_num)
        .unwrap_or_default();
    options.visible_data_points_num = Some(cap);

    let split = split_initial_data(data, cap);
    for series in &mut options.series {
        series.data = Vec::with_capacity(split.older.len());
    }

    let Some(axis) = options.x_axis.first_mut() else {
        return Err(ChartError::MissingAxis);
    };
    match axis_mode {
        AxisMode::Time => {
            axis.boundary_gap = None;
            axis.data = None;
        }
        AxisMode::Category => {
            axis.data = Some(split.older.iter().map(|point| point.x.clone()).collect());
        }
    }

    for point in &split.older {
        for (series_index, series) in options.series.iter_mut().enumerate() {
            let value = match seed_value(point, series_index) {
                Some(y) if axis_mode == AxisMode::Time => SeriesValue::Pair(point.x.clone(), y),
                Some(y) => SeriesValue::Value(y),
                None => SeriesValue::Missing,
            };
            series.data.push(value);
        }
    }

    debug!(
        visible_len = split.older.len(),
        pending_len = split.newer.len(),
        series_count,
        cap = %cap,
        axis_mode = ?axis_mode,
        "seeded chart options"
    );
    Ok(split.newer)
}

/// A scalar y fills every series while seeding.
fn seed_value(point: &DataPoint, series_index: usize) -> Option<f64> {
    if point.y.is_scalar() {
        return point.y.first();
    }
    point.y.values().get(series_index).copied()
}
