use serde::{Deserialize, Serialize};

use crate::core::{AppendValue, AxisMode, VisibleCap, XValue};

/// One rendered value of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesValue {
    /// Hole left by a point that carried no value for this series.
    Missing,
    Value(f64),
    Pair(XValue, f64),
}

impl SeriesValue {
    #[must_use]
    pub fn y(&self) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Value(y) | Self::Pair(_, y) => Some(*y),
        }
    }
}

impl From<AppendValue> for SeriesValue {
    fn from(value: AppendValue) -> Self {
        match value {
            AppendValue::Pair(x, y) => Self::Pair(x, y),
            AppendValue::Value(y) => Self::Value(y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOption {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOption {
    pub show: bool,
    #[serde(default)]
    pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisOption {
    /// Renderer default is `category` when unset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<bool>,
    /// Shared category labels; absent on time axes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<XValue>>,
}

impl XAxisOption {
    #[must_use]
    pub fn time() -> Self {
        Self {
            axis_type: Some(AxisMode::Time),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category() -> Self {
        Self {
            axis_type: Some(AxisMode::Category),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> AxisMode {
        self.axis_type.unwrap_or_default()
    }

    fn merge(&mut self, patch: &Self) {
        if patch.axis_type.is_some() {
            self.axis_type = patch.axis_type;
        }
        if patch.boundary_gap.is_some() {
            self.boundary_gap = patch.boundary_gap;
        }
        if patch.data.is_some() {
            self.data.clone_from(&patch.data);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
}

impl YAxisOption {
    fn merge(&mut self, patch: &Self) {
        if patch.min.is_some() {
            self.min = patch.min;
        }
        if patch.max.is_some() {
            self.max = patch.max;
        }
        if patch.split_number.is_some() {
            self.split_number = patch.split_number;
        }
        if patch.scale.is_some() {
            self.scale = patch.scale;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default)]
    pub data: Vec<SeriesValue>,
}

impl SeriesOption {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    fn merge(&mut self, patch: &Self) {
        if patch.name.is_some() {
            self.name.clone_from(&patch.name);
        }
        if patch.stack.is_some() {
            self.stack.clone_from(&patch.stack);
        }
        if !patch.data.is_empty() {
            self.data.clone_from(&patch.data);
        }
    }
}

/// Renderer configuration: the state read by `get_option` and written by
/// `set_option`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x_axis: Vec<XAxisOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y_axis: Vec<YAxisOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_data_points_num: Option<VisibleCap>,
}

impl ChartOptions {
    /// Partial update that only raises or lowers the y-axis ceiling.
    #[must_use]
    pub fn y_axis_max_patch(max: f64) -> Self {
        Self {
            y_axis: vec![YAxisOption {
                max: Some(max),
                ..YAxisOption::default()
            }],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_axis(&self) -> bool {
        !self.x_axis.is_empty()
    }

    #[must_use]
    pub fn axis_mode(&self) -> Option<AxisMode> {
        self.x_axis.first().map(XAxisOption::mode)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Points rendered in the first series.
    #[must_use]
    pub fn current_point_count(&self) -> usize {
        self.series.first().map_or(0, |series| series.data.len())
    }

    #[must_use]
    pub fn has_series_data(&self) -> bool {
        self.series.iter().any(|series| !series.data.is_empty())
    }

    /// Non-destructive update: set fields of `patch` win, list entries merge
    /// by index and extra entries are appended.
    pub fn merge(&mut self, patch: &Self) {
        if patch.title.is_some() {
            self.title.clone_from(&patch.title);
        }
        if patch.legend.is_some() {
            self.legend.clone_from(&patch.legend);
        }
        merge_indexed(&mut self.x_axis, &patch.x_axis, XAxisOption::merge);
        merge_indexed(&mut self.y_axis, &patch.y_axis, YAxisOption::merge);
        merge_indexed(&mut self.series, &patch.series, SeriesOption::merge);
        if patch.visible_data_points_num.is_some() {
            self.visible_data_points_num = patch.visible_data_points_num;
        }
    }
}

fn merge_indexed<T: Clone>(target: &mut Vec<T>, patch: &[T], merge: impl Fn(&mut T, &T)) {
    for (index, entry) in patch.iter().enumerate() {
        match target.get_mut(index) {
            Some(existing) => merge(existing, entry),
            None => target.push(entry.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartOptions, SeriesOption, SeriesValue, XAxisOption, YAxisOption};
    use crate::core::AxisMode;

    #[test]
    fn y_axis_patch_keeps_other_fields() {
        let mut options = ChartOptions {
            x_axis: vec![XAxisOption::time()],
            y_axis: vec![YAxisOption {
                split_number: Some(3),
                ..YAxisOption::default()
            }],
            series: vec![SeriesOption {
                data: vec![SeriesValue::Value(1.0)],
                ..SeriesOption::named("cpu")
            }],
            ..ChartOptions::default()
        };

        options.merge(&ChartOptions::y_axis_max_patch(100.0));

        assert_eq!(options.y_axis[0].max, Some(100.0));
        assert_eq!(options.y_axis[0].split_number, Some(3));
        assert_eq!(options.axis_mode(), Some(AxisMode::Time));
        assert_eq!(options.current_point_count(), 1);
    }

    #[test]
    fn unset_axis_type_reads_as_category() {
        let options = ChartOptions {
            x_axis: vec![XAxisOption::default()],
            ..ChartOptions::default()
        };
        assert_eq!(options.axis_mode(), Some(AxisMode::Category));
    }

    #[test]
    fn options_json_uses_renderer_keys() {
        let json = r#"{
            "xAxis": [{"type": "time"}],
            "series": [{"name": "a", "data": [[1, 2.5], null]}],
            "visibleDataPointsNum": 2
        }"#;
        let options: ChartOptions = serde_json::from_str(json).expect("options json");
        assert_eq!(options.axis_mode(), Some(AxisMode::Time));
        assert_eq!(
            options.series[0].data,
            vec![SeriesValue::Pair(1.0.into(), 2.5), SeriesValue::Missing]
        );
        assert_eq!(
            options.visible_data_points_num.and_then(|cap| cap.limit()),
            Some(2)
        );
    }
}
