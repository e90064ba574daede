use serde::{Deserialize, Serialize};

use crate::core::{DataBatch, DataPoint, VisibleCap};

/// Initial render window and the deferred remainder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowSplit {
    /// Points rendered when the chart is created.
    pub older: Vec<DataPoint>,
    /// Points appended after the first render, oldest first.
    pub newer: Vec<DataPoint>,
}

impl WindowSplit {
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.newer.is_empty()
    }
}

/// Splits `data` into the prefix that fits `cap` and the overflow suffix.
///
/// Order is preserved: `older ++ newer == data`, and `older` holds
/// `min(len, cap)` points.
#[must_use]
pub fn split_initial_data(data: impl Into<DataBatch>, cap: VisibleCap) -> WindowSplit {
    let mut older = data.into().into_points();
    match cap.limit() {
        Some(limit) if older.len() > limit => {
            let newer = older.split_off(limit);
            WindowSplit { older, newer }
        }
        _ => WindowSplit {
            older,
            newer: Vec::new(),
        },
    }
}

/// Projects every point onto its first y value.
#[must_use]
pub fn first_series_data(data: impl Into<DataBatch>) -> Vec<DataPoint> {
    data.into()
        .into_points()
        .into_iter()
        .filter_map(|point| {
            let y = point.y.first()?;
            Some(DataPoint::new(point.x, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{first_series_data, split_initial_data};
    use crate::core::{DataPoint, VisibleCap};

    fn points(n: usize) -> Vec<DataPoint> {
        (0..n).map(|i| DataPoint::new(i as f64, i as f64)).collect()
    }

    #[test]
    fn short_input_stays_in_older() {
        let split = split_initial_data(points(3), VisibleCap::new(3).expect("cap"));
        assert_eq!(split.older.len(), 3);
        assert!(!split.has_pending());
    }

    #[test]
    fn overflow_moves_to_newer_in_order() {
        let split = split_initial_data(points(5), VisibleCap::new(2).expect("cap"));
        assert_eq!(split.older, points(2));
        assert_eq!(split.newer, points(5)[2..].to_vec());
    }

    #[test]
    fn unbounded_cap_keeps_everything_visible() {
        let split = split_initial_data(points(500), VisibleCap::Unbounded);
        assert_eq!(split.older.len(), 500);
        assert!(split.newer.is_empty());
    }

    #[test]
    fn single_point_is_normalized() {
        let split = split_initial_data(DataPoint::new(1.0, 2.0), VisibleCap::default());
        assert_eq!(split.older, vec![DataPoint::new(1.0, 2.0)]);
    }

    #[test]
    fn first_series_projection_keeps_x() {
        let projected = first_series_data(vec![
            DataPoint::new("a", [1.0, 2.0]),
            DataPoint::new("b", 3.0),
        ]);
        assert_eq!(
            projected,
            vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)]
        );
    }
}
