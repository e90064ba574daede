pub mod append;
pub mod primitives;
pub mod types;
pub mod windowing;

pub use append::{AppendContext, AppendRecord, AppendValue, ArityPolicy, plan_append};
pub use types::{
    AxisMode, DEFAULT_VISIBLE_DATA_POINTS_NUM, DataBatch, DataPoint, VisibleCap, XValue, YValue,
};
pub use windowing::{WindowSplit, first_series_data, split_initial_data};
