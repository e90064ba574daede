use livechart_rs::api::{ChartEngine, ChartEngineConfig, LineChartConfig};
use livechart_rs::core::{AxisMode, DataPoint};
use livechart_rs::render::{ChartOptions, MemoryRenderer, SeriesOption, XAxisOption};

#[test]
fn engine_smoke_flow() {
    let options = ChartOptions {
        x_axis: vec![XAxisOption::time()],
        series: vec![SeriesOption::named("rx"), SeriesOption::named("tx")],
        ..ChartOptions::default()
    };
    let config = ChartEngineConfig::new()
        .with_visible_data_points_num(3)
        .expect("valid cap")
        .with_data(vec![
            DataPoint::new(1_000.0, [1.0, 2.0]),
            DataPoint::new(2_000.0, [3.0, 4.0]),
        ]);
    let mut engine =
        ChartEngine::new(MemoryRenderer::default(), options, config).expect("engine init");
    assert!(engine.is_initialized());
    assert_eq!(engine.pending_len(), 0);

    engine.add_data_points(DataPoint::new(3_000.0, [5.0, 6.0]), None);
    engine.add_data_points(
        vec![
            DataPoint::new(4_000.0, [7.0, 8.0]),
            DataPoint::new(5_000.0, [9.0, 10.0]),
        ],
        Some(50.0),
    );

    let renderer = engine.renderer();
    assert_eq!(
        renderer.series_values(0),
        vec![Some(5.0), Some(7.0), Some(9.0)]
    );
    assert_eq!(
        renderer.series_values(1),
        vec![Some(6.0), Some(8.0), Some(10.0)]
    );
    assert_eq!(renderer.state().y_axis[0].max, Some(50.0));
    assert_eq!(renderer.state().axis_mode(), Some(AxisMode::Time));
}

#[test]
fn line_chart_smoke_flow() {
    let mut engine = LineChartConfig::new(vec![DataPoint::new("09:00", 1.0)])
        .with_series_names(["load"])
        .with_max_data_num(2)
        .into_engine(MemoryRenderer::default())
        .expect("line chart init");

    engine.add_data_points(DataPoint::new("09:01", 2.0), None);
    engine.add_data_points(DataPoint::new("09:02", 3.0), None);

    let state = engine.renderer().state();
    assert_eq!(engine.renderer().series_values(0), vec![Some(2.0), Some(3.0)]);
    assert_eq!(
        state.x_axis[0].data,
        Some(vec!["09:01".into(), "09:02".into()])
    );
}
