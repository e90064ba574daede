use std::fmt;
use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Visible points per series used when neither the engine config nor the
/// renderer's live options carry a cap.
pub const DEFAULT_VISIBLE_DATA_POINTS_NUM: usize = 80;

/// X coordinate of a data point: a timestamp/number or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Label(String),
}

impl XValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Label(_) => None,
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for XValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for XValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for XValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_owned())
    }
}

impl From<String> for XValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl From<DateTime<Utc>> for XValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Number(datetime_to_unix_millis(value))
    }
}

/// Y payload of a data point.
///
/// `Scalar` feeds a single-series chart; `Series` maps index `i` to series `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YValue {
    Scalar(f64),
    Series(SmallVec<[f64; 4]>),
}

impl YValue {
    /// Per-series view of the payload. A scalar is a one-element slice.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Series(values) => values.as_slice(),
        }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.values().len()
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.values().first().copied()
    }
}

impl From<f64> for YValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for YValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Series(SmallVec::from_vec(values))
    }
}

impl From<&[f64]> for YValue {
    fn from(values: &[f64]) -> Self {
        Self::Series(SmallVec::from_slice(values))
    }
}

impl<const N: usize> From<[f64; N]> for YValue {
    fn from(values: [f64; N]) -> Self {
        Self::Series(values.iter().copied().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    pub y: YValue,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: impl Into<XValue>, y: impl Into<YValue>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Builds a time-axis point stamped with `time` as epoch milliseconds.
    #[must_use]
    pub fn at(time: DateTime<Utc>, y: impl Into<YValue>) -> Self {
        Self::new(time, y)
    }

    /// Builds a point from exact decimal readings; one value is a scalar y.
    pub fn from_decimal_values(x: impl Into<XValue>, values: &[Decimal]) -> ChartResult<Self> {
        let y = match values {
            [] => {
                return Err(ChartError::InvalidData(
                    "data point requires at least one y value".to_owned(),
                ));
            }
            [single] => YValue::Scalar(decimal_to_f64(*single, "y value")?),
            many => YValue::Series(
                many.iter()
                    .map(|value| decimal_to_f64(*value, "y value"))
                    .collect::<ChartResult<_>>()?,
            ),
        };
        Ok(Self { x: x.into(), y })
    }
}

/// Input shape accepted by the public data operations.
///
/// Normalized once via [`DataBatch::into_points`]; nothing downstream branches
/// on point-vs-sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataBatch {
    #[default]
    Absent,
    Sequence(Vec<DataPoint>),
    Single(DataPoint),
}

impl DataBatch {
    #[must_use]
    pub fn into_points(self) -> Vec<DataPoint> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(point) => vec![point],
            Self::Sequence(points) => points,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Single(_) => false,
            Self::Sequence(points) => points.is_empty(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Single(_) => 1,
            Self::Sequence(points) => points.len(),
        }
    }
}

impl From<DataPoint> for DataBatch {
    fn from(point: DataPoint) -> Self {
        Self::Single(point)
    }
}

impl From<Vec<DataPoint>> for DataBatch {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::Sequence(points)
    }
}

impl From<&[DataPoint]> for DataBatch {
    fn from(points: &[DataPoint]) -> Self {
        Self::Sequence(points.to_vec())
    }
}

impl<const N: usize> From<[DataPoint; N]> for DataBatch {
    fn from(points: [DataPoint; N]) -> Self {
        Self::Sequence(points.into())
    }
}

impl<T: Into<DataBatch>> From<Option<T>> for DataBatch {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// X-axis interpretation, fixed per chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    Time,
    #[default]
    Category,
}

/// Maximum number of points kept visible per series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VisibleCapRepr", into = "VisibleCapRepr")]
pub enum VisibleCap {
    Bounded(NonZeroUsize),
    Unbounded,
}

impl VisibleCap {
    pub fn new(limit: usize) -> ChartResult<Self> {
        NonZeroUsize::new(limit).map(Self::Bounded).ok_or_else(|| {
            ChartError::InvalidConfig("visible data points num must be > 0".to_owned())
        })
    }

    #[must_use]
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Bounded(limit) => Some(limit.get()),
            Self::Unbounded => None,
        }
    }

    /// Number of points the window can still absorb before eviction starts.
    #[must_use]
    pub fn remaining_growth(self, current_point_count: usize) -> usize {
        match self {
            Self::Bounded(limit) => limit.get().saturating_sub(current_point_count),
            Self::Unbounded => usize::MAX,
        }
    }

    #[must_use]
    pub fn admits(self, len: usize) -> bool {
        self.limit().is_none_or(|limit| len <= limit)
    }
}

impl Default for VisibleCap {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_VISIBLE_DATA_POINTS_NUM) {
            Some(limit) => Self::Bounded(limit),
            None => Self::Unbounded,
        }
    }
}

impl fmt::Display for VisibleCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(limit) => write!(f, "{limit}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum VisibleCapRepr {
    Count(usize),
    Keyword(String),
}

impl TryFrom<VisibleCapRepr> for VisibleCap {
    type Error = ChartError;

    fn try_from(repr: VisibleCapRepr) -> Result<Self, Self::Error> {
        match repr {
            VisibleCapRepr::Count(limit) => Self::new(limit),
            VisibleCapRepr::Keyword(keyword) if keyword == "unbounded" => Ok(Self::Unbounded),
            VisibleCapRepr::Keyword(keyword) => Err(ChartError::InvalidConfig(format!(
                "unknown visible data points num `{keyword}`"
            ))),
        }
    }
}

impl From<VisibleCap> for VisibleCapRepr {
    fn from(cap: VisibleCap) -> Self {
        match cap {
            VisibleCap::Bounded(limit) => Self::Count(limit.get()),
            VisibleCap::Unbounded => Self::Keyword("unbounded".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{DataBatch, DataPoint, VisibleCap, XValue, YValue};
    use crate::error::ChartError;

    #[test]
    fn decimal_values_convert_to_scalar_and_series() {
        let scalar = DataPoint::from_decimal_values("t0", &[Decimal::new(1_250, 2)])
            .expect("scalar decimal");
        assert_eq!(scalar.y, YValue::Scalar(12.5));

        let series =
            DataPoint::from_decimal_values(1.0, &[Decimal::new(15, 1), Decimal::new(-3, 0)])
                .expect("series decimal");
        assert_eq!(series.y, YValue::from([1.5, -3.0]));
        assert_eq!(series.y.arity(), 2);
    }

    #[test]
    fn decimal_values_reject_empty_slice() {
        let err = DataPoint::from_decimal_values(1.0, &[]).expect_err("no y value");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn timestamped_point_uses_epoch_millis() {
        let time = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");
        let point = DataPoint::at(time, 7.0);
        assert_eq!(point.x, XValue::Number(1_704_164_645_000.0));
        assert_eq!(point.y, YValue::Scalar(7.0));
    }

    #[test]
    fn scalar_y_is_a_single_series_view() {
        let y = YValue::from(4.5);
        assert_eq!(y.values(), &[4.5]);
        assert!(y.is_scalar());
    }

    #[test]
    fn zero_cap_is_rejected() {
        let err = VisibleCap::new(0).expect_err("zero cap must fail");
        assert!(format!("{err}").contains("visible data points num"));
    }

    #[test]
    fn unbounded_cap_never_runs_out_of_growth() {
        assert_eq!(VisibleCap::Unbounded.remaining_growth(1_000_000), usize::MAX);
        assert!(VisibleCap::Unbounded.admits(usize::MAX));
    }

    #[test]
    fn batch_from_none_is_absent() {
        let batch = DataBatch::from(None::<DataPoint>);
        assert_eq!(batch, DataBatch::Absent);
        assert!(batch.is_empty());
        assert!(batch.into_points().is_empty());
    }

    #[test]
    fn batch_json_accepts_null_point_and_array() {
        let null: DataBatch = serde_json::from_str("null").expect("null batch");
        assert_eq!(null, DataBatch::Absent);

        let single: DataBatch = serde_json::from_str(r#"{"x": 1, "y": 2}"#).expect("single");
        assert_eq!(single, DataBatch::Single(DataPoint::new(1.0, 2.0)));

        let many: DataBatch =
            serde_json::from_str(r#"[{"x": "a", "y": [1, 2]}]"#).expect("sequence");
        assert_eq!(
            many,
            DataBatch::Sequence(vec![DataPoint::new("a", [1.0, 2.0])])
        );
    }
}
