use livechart_rs::core::{
    AppendContext, AppendValue, ArityPolicy, AxisMode, DataPoint, VisibleCap, plan_append,
    split_initial_data,
};
use proptest::prelude::*;

fn points_strategy(series_count: usize) -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(
        (
            -1_000i32..1_000,
            prop::collection::vec(-1_000.0f64..1_000.0, series_count),
        ),
        0..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(x, ys)| DataPoint::new(x, ys))
            .collect()
    })
}

fn batch_strategy() -> impl Strategy<Value = (usize, Vec<DataPoint>)> {
    (1usize..5).prop_flat_map(|series_count| (Just(series_count), points_strategy(series_count)))
}

fn axis_mode_strategy() -> impl Strategy<Value = AxisMode> {
    prop_oneof![Just(AxisMode::Time), Just(AxisMode::Category)]
}

proptest! {
    #[test]
    fn split_is_an_order_preserving_partition(
        raw in prop::collection::vec((-1_000i32..1_000, -1_000.0f64..1_000.0), 0..128),
        cap in 1usize..150,
    ) {
        let data: Vec<DataPoint> = raw
            .into_iter()
            .map(|(x, y)| DataPoint::new(x, y))
            .collect();
        let split = split_initial_data(data.clone(), VisibleCap::new(cap).expect("cap"));

        prop_assert_eq!(split.older.len(), data.len().min(cap));
        let mut joined = split.older;
        joined.extend(split.newer);
        prop_assert_eq!(joined, data);
    }

    #[test]
    fn records_of_one_point_share_growth_flag(
        (series_count, points) in batch_strategy(),
        current in 0usize..120,
        cap in 1usize..100,
        axis_mode in axis_mode_strategy(),
    ) {
        let context = AppendContext {
            current_point_count: current,
            series_count,
            cap: VisibleCap::new(cap).expect("cap"),
            axis_mode,
        };
        let records = plan_append(&points, &context, ArityPolicy::Strict).expect("plan");
        prop_assert_eq!(records.len(), points.len() * series_count);

        let flags: Vec<bool> = records
            .chunks(series_count)
            .map(|group| {
                let first = group[0].grows_window;
                assert!(group.iter().all(|record| record.grows_window == first));
                first
            })
            .collect();
        let grown = flags.iter().filter(|flag| **flag).count();
        prop_assert_eq!(grown, points.len().min(cap.saturating_sub(current)));
        prop_assert!(flags.windows(2).all(|pair| pair[0] || !pair[1]));
    }

    #[test]
    fn category_label_sits_on_last_series_only(
        (series_count, points) in batch_strategy(),
    ) {
        let context = AppendContext {
            current_point_count: 0,
            series_count,
            cap: VisibleCap::default(),
            axis_mode: AxisMode::Category,
        };
        let records = plan_append(&points, &context, ArityPolicy::Strict).expect("plan");

        for (group, point) in records.chunks(series_count).zip(&points) {
            let labelled: Vec<_> = group.iter().filter(|r| r.x_label.is_some()).collect();
            prop_assert_eq!(labelled.len(), 1);
            prop_assert_eq!(labelled[0].series_index, series_count - 1);
            prop_assert_eq!(labelled[0].x_label.as_ref(), Some(&point.x));
        }
    }

    #[test]
    fn time_records_are_pairs_without_labels(
        (series_count, points) in batch_strategy(),
    ) {
        let context = AppendContext {
            current_point_count: 0,
            series_count,
            cap: VisibleCap::default(),
            axis_mode: AxisMode::Time,
        };
        let records = plan_append(&points, &context, ArityPolicy::Strict).expect("plan");

        for (group, point) in records.chunks(series_count).zip(&points) {
            for (series_index, record) in group.iter().enumerate() {
                prop_assert!(record.x_label.is_none());
                prop_assert!(!record.is_head);
                prop_assert_eq!(record.series_index, series_index);
                match &record.value {
                    AppendValue::Pair(x, y) => {
                        prop_assert_eq!(x, &point.x);
                        prop_assert_eq!(*y, point.y.values()[series_index]);
                    }
                    AppendValue::Value(_) => prop_assert!(false, "time axis must emit pairs"),
                }
            }
        }
    }
}
