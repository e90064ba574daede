use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ArityPolicy, AxisMode, DataPoint, VisibleCap};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartOptions, LegendOption, Renderer, SeriesOption, TitleOption, XAxisOption, YAxisOption,
};

use super::{ChartEngine, ChartEngineConfig};

const STACK_GROUP: &str = "total";

/// Declarative setup for a live line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartConfig {
    /// Legend/tooltip names; derived from the first point when absent.
    #[serde(default)]
    pub series_names: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub stacked: bool,
    /// Only honored when there is more than one series.
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_y_axis_values_num")]
    pub y_axis_values_num: u32,
    #[serde(default)]
    pub scale: bool,
    /// Maximal points per series. When absent nothing is evicted and memory
    /// grows with every appended point.
    #[serde(default)]
    pub max_data_num: Option<usize>,
    #[serde(default)]
    pub x_axis_type: AxisMode,
    #[serde(default)]
    pub arity_policy: ArityPolicy,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            series_names: None,
            stacked: default_true(),
            show_legend: default_true(),
            title: None,
            y_axis_values_num: default_y_axis_values_num(),
            scale: false,
            max_data_num: None,
            x_axis_type: AxisMode::default(),
            arity_policy: ArityPolicy::default(),
            data: Vec::new(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_series_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_show_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_max_data_num(mut self, max_data_num: usize) -> Self {
        self.max_data_num = Some(max_data_num);
        self
    }

    #[must_use]
    pub fn with_x_axis_type(mut self, axis_mode: AxisMode) -> Self {
        self.x_axis_type = axis_mode;
        self
    }

    #[must_use]
    pub fn with_arity_policy(mut self, policy: ArityPolicy) -> Self {
        self.arity_policy = policy;
        self
    }

    /// Resolves series names, falling back to `Series 1..n` sized by the
    /// first point's y arity.
    pub fn resolved_series_names(&self) -> ChartResult<Vec<String>> {
        if let Some(names) = &self.series_names {
            if names.is_empty() {
                return Err(ChartError::InvalidConfig(
                    "series names must not be empty".to_owned(),
                ));
            }
            return Ok(names.clone());
        }

        let first = self.data.first().ok_or_else(|| {
            ChartError::InvalidConfig("series names are required when no data is given".to_owned())
        })?;
        warn!(
            series_count = first.y.arity(),
            "series names not defined, using generated names"
        );
        Ok((1..=first.y.arity())
            .map(|index| format!("Series {index}"))
            .collect())
    }

    /// Builds renderer options (with empty series data) and the engine config
    /// that seeds them.
    pub fn build(self) -> ChartResult<(ChartOptions, ChartEngineConfig)> {
        let names = self.resolved_series_names()?;
        let cap = match self.max_data_num {
            Some(limit) => VisibleCap::new(limit)?,
            None => VisibleCap::Unbounded,
        };

        let series: Vec<SeriesOption> = names
            .iter()
            .map(|name| SeriesOption {
                stack: self.stacked.then(|| STACK_GROUP.to_owned()),
                ..SeriesOption::named(name.clone())
            })
            .collect();
        let legend = (series.len() > 1 && self.show_legend).then(|| LegendOption {
            show: true,
            data: names,
        });

        let options = ChartOptions {
            title: self.title.map(|text| TitleOption { text }),
            legend,
            x_axis: vec![XAxisOption {
                axis_type: Some(self.x_axis_type),
                boundary_gap: Some(false),
                data: None,
            }],
            y_axis: vec![YAxisOption {
                split_number: Some(self.y_axis_values_num),
                scale: Some(self.scale),
                ..YAxisOption::default()
            }],
            series,
            visible_data_points_num: None,
        };
        let config = ChartEngineConfig::new()
            .with_visible_cap(cap)
            .with_data(self.data)
            .with_arity_policy(self.arity_policy);
        Ok((options, config))
    }

    pub fn into_engine<R: Renderer>(self, renderer: R) -> ChartResult<ChartEngine<R>> {
        let (options, config) = self.build()?;
        ChartEngine::new(renderer, options, config)
    }
}

fn default_true() -> bool {
    true
}

fn default_y_axis_values_num() -> u32 {
    3
}
