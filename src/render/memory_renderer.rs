use std::cell::Cell;

use tracing::trace;

use crate::core::AppendRecord;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartOptions, Renderer, SeriesValue};

/// Mutating call observed by [`MemoryRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RendererCall {
    SetOption {
        options: ChartOptions,
        overwrite: bool,
    },
    AddData(Vec<AppendRecord>),
    HideLoading,
}

/// Headless renderer used by tests and host applications without a canvas.
///
/// It keeps the option state the way the reference renderer does: axes are
/// only reported by `get_option` once some series holds data, appends evict
/// per series, and category labels evict together with their values.
#[derive(Debug)]
pub struct MemoryRenderer {
    state: ChartOptions,
    axis_materialized: bool,
    loading: bool,
    calls: Vec<RendererCall>,
    get_option_count: Cell<usize>,
}

impl Default for MemoryRenderer {
    fn default() -> Self {
        Self {
            state: ChartOptions::default(),
            axis_materialized: false,
            loading: true,
            calls: Vec::new(),
            get_option_count: Cell::new(0),
        }
    }
}

impl MemoryRenderer {
    /// Full state, including axes that are not materialized yet.
    #[must_use]
    pub fn state(&self) -> &ChartOptions {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn calls(&self) -> &[RendererCall] {
        &self.calls
    }

    #[must_use]
    pub fn get_option_count(&self) -> usize {
        self.get_option_count.get()
    }

    /// Total renderer interactions, reads included.
    #[must_use]
    pub fn interaction_count(&self) -> usize {
        self.calls.len() + self.get_option_count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.get_option_count.set(0);
    }

    /// Rendered y values of one series, holes as `None`.
    #[must_use]
    pub fn series_values(&self, series_index: usize) -> Vec<Option<f64>> {
        self.state
            .series
            .get(series_index)
            .map(|series| series.data.iter().map(SeriesValue::y).collect())
            .unwrap_or_default()
    }

    fn validate_records(&self, records: &[AppendRecord]) -> ChartResult<()> {
        let series_count = self.state.series.len();
        for record in records {
            if record.is_head {
                return Err(ChartError::Unsupported(
                    "head insertion is not supported".to_owned(),
                ));
            }
            if record.series_index >= series_count {
                return Err(ChartError::SeriesIndexOutOfRange {
                    series_index: record.series_index,
                    series_count,
                });
            }
            if record.x_label.is_some() && self.state.x_axis.is_empty() {
                return Err(ChartError::MissingAxis);
            }
        }
        Ok(())
    }
}

impl Renderer for MemoryRenderer {
    fn get_option(&self) -> ChartResult<ChartOptions> {
        self.get_option_count.set(self.get_option_count.get() + 1);
        let mut options = self.state.clone();
        if !self.axis_materialized {
            options.x_axis.clear();
        }
        Ok(options)
    }

    fn set_option(&mut self, options: &ChartOptions, overwrite: bool) -> ChartResult<()> {
        if overwrite {
            self.state = options.clone();
            self.axis_materialized = self.state.has_series_data();
        } else {
            self.state.merge(options);
            self.axis_materialized |= self.state.has_series_data();
        }
        self.calls.push(RendererCall::SetOption {
            options: options.clone(),
            overwrite,
        });
        Ok(())
    }

    fn add_data(&mut self, records: &[AppendRecord]) -> ChartResult<()> {
        self.validate_records(records)?;

        // Evictions are applied once per series after all pushes.
        let mut evicted = vec![0usize; self.state.series.len()];
        let mut evicted_labels = 0usize;
        for record in records {
            self.state.series[record.series_index]
                .data
                .push(record.value.clone().into());
            if !record.grows_window {
                evicted[record.series_index] += 1;
            }

            if let Some(label) = &record.x_label {
                if let Some(axis) = self.state.x_axis.first_mut() {
                    axis.data
                        .get_or_insert_with(Vec::new)
                        .push(label.clone());
                    if !record.grows_window {
                        evicted_labels += 1;
                    }
                }
            }
        }

        for (series, count) in self.state.series.iter_mut().zip(evicted) {
            let count = count.min(series.data.len());
            series.data.drain(..count);
        }
        if let Some(labels) = self
            .state
            .x_axis
            .first_mut()
            .and_then(|axis| axis.data.as_mut())
        {
            let count = evicted_labels.min(labels.len());
            labels.drain(..count);
        }

        self.axis_materialized |= self.state.has_series_data();
        trace!(
            records_len = records.len(),
            points_len = self.state.current_point_count(),
            "memory renderer applied append"
        );
        self.calls.push(RendererCall::AddData(records.to_vec()));
        Ok(())
    }

    fn hide_loading(&mut self) -> ChartResult<()> {
        self.loading = false;
        self.calls.push(RendererCall::HideLoading);
        Ok(())
    }
}
