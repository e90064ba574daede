use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(
        "series arity mismatch at point {point_index}: expected {expected} y value(s), got {actual}"
    )]
    SeriesArityMismatch {
        point_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("series index {series_index} out of range (series count: {series_count})")]
    SeriesIndexOutOfRange {
        series_index: usize,
        series_count: usize,
    },

    #[error("chart options declare no x axis")]
    MissingAxis,

    #[error("renderer failure: {0}")]
    Renderer(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
