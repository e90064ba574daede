use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{AppendContext, DataBatch, DataPoint, plan_append};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::{ChartOptions, Renderer};

use super::{ChartEngine, option_seed::fill_axis_data, validation::validate_y_axis_max};

/// What one data call did to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppendOutcome {
    /// Empty or absent input; the renderer was not touched.
    Skipped,
    /// The chart had no axis yet and was re-seeded from the batch.
    Reseeded { initialized: bool, pending_len: usize },
    Appended(AppendSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendSummary {
    pub points_len: usize,
    pub records_len: usize,
    pub grown_points: usize,
}

impl<R: Renderer> ChartEngine<R> {
    /// Adds one point or a batch of points, optionally raising the y-axis
    /// ceiling first.
    ///
    /// Best-effort: this never fails. Errors are logged at `warn` and
    /// delivered to observers as [`ChartEvent::AppendFailed`]; use
    /// [`ChartEngine::try_add_data_points`] to receive them instead.
    pub fn add_data_points(&mut self, data: impl Into<DataBatch>, new_y_axis_max: Option<f64>) {
        if let Err(err) = self.try_add_data_points(data, new_y_axis_max) {
            self.report_failure(&err, "add_data_points");
        }
    }

    /// Propagating variant of [`ChartEngine::add_data_points`].
    pub fn try_add_data_points(
        &mut self,
        data: impl Into<DataBatch>,
        new_y_axis_max: Option<f64>,
    ) -> ChartResult<AppendOutcome> {
        let points = data.into().into_points();
        if points.is_empty() {
            trace!("skipping empty data batch");
            return Ok(AppendOutcome::Skipped);
        }
        if !self.initialized {
            return self.reseed(points);
        }

        self.flush_pending()?;
        self.append_points(&points, new_y_axis_max)
    }

    /// Applies the pending overflow once; it is restored when the append fails.
    pub(super) fn flush_pending(&mut self) -> ChartResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let pending = std::mem::take(&mut self.pending);
        match self.append_points(&pending, None) {
            Ok(_) => {
                debug!(points_len = pending.len(), "flushed pending queue");
                self.emit_event(ChartEvent::PendingQueueFlushed {
                    points_len: pending.len(),
                });
                Ok(())
            }
            Err(err) => {
                self.pending = pending;
                Err(err)
            }
        }
    }

    fn append_points(
        &mut self,
        points: &[DataPoint],
        new_y_axis_max: Option<f64>,
    ) -> ChartResult<AppendOutcome> {
        let new_y_axis_max = new_y_axis_max.map(validate_y_axis_max).transpose()?;
        let context = append_context(&self.renderer.get_option()?)?;
        let records = plan_append(points, &context, self.arity_policy)?;
        if records.is_empty() {
            return Ok(AppendOutcome::Skipped);
        }

        if let Some(max) = new_y_axis_max {
            self.renderer
                .set_option(&ChartOptions::y_axis_max_patch(max), false)?;
            self.emit_event(ChartEvent::YAxisMaxChanged { max });
        }
        self.renderer.add_data(&records)?;

        let summary = AppendSummary {
            points_len: points.len(),
            records_len: records.len(),
            grown_points: points.len().min(context.remaining_growth()),
        };
        self.emit_event(ChartEvent::DataAppended {
            points_len: summary.points_len,
            records_len: summary.records_len,
            grown_points: summary.grown_points,
        });
        Ok(AppendOutcome::Appended(summary))
    }

    fn reseed(&mut self, points: Vec<DataPoint>) -> ChartResult<AppendOutcome> {
        let mut options = self.options.clone();
        let pending = fill_axis_data(&mut options, points, self.visible_cap, self.arity_policy)?;
        self.renderer.set_option(&options, true)?;
        self.options = options;
        self.pending = pending;
        self.initialized = self.renderer.get_option()?.has_axis();
        debug!(
            initialized = self.initialized,
            pending_len = self.pending.len(),
            "re-seeded chart from first data batch"
        );

        if self.initialized {
            self.complete_initialization();
            self.renderer.hide_loading()?;
        }
        Ok(AppendOutcome::Reseeded {
            initialized: self.initialized,
            pending_len: self.pending.len(),
        })
    }

    pub(super) fn report_failure(&mut self, err: &ChartError, operation: &'static str) {
        warn!(error = %err, operation, "best-effort chart update failed");
        self.emit_event(ChartEvent::AppendFailed {
            message: err.to_string(),
        });
    }
}

fn append_context(current: &ChartOptions) -> ChartResult<AppendContext> {
    let axis_mode = current.axis_mode().ok_or(ChartError::MissingAxis)?;
    Ok(AppendContext {
        current_point_count: current.current_point_count(),
        series_count: current.series_count(),
        cap: current.visible_data_points_num.unwrap_or_default(),
        axis_mode,
    })
}
