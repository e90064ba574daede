use crate::error::{ChartError, ChartResult};
use crate::render::ChartOptions;

pub(super) fn validate_base_options(options: &ChartOptions) -> ChartResult<()> {
    if !options.has_axis() {
        return Err(ChartError::MissingAxis);
    }
    if options.series.is_empty() {
        return Err(ChartError::InvalidConfig(
            "chart options must declare at least one series".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_y_axis_max(max: f64) -> ChartResult<f64> {
    if !max.is_finite() {
        return Err(ChartError::InvalidData(
            "y-axis max must be finite".to_owned(),
        ));
    }
    Ok(max)
}
