use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::{ChartEvent, ChartObserver};
use crate::render::{ChartOptions, Renderer};

use super::{ChartEngine, ChartEngineConfig, option_seed::fill_axis_data, validation};

impl<R: Renderer> ChartEngine<R> {
    /// Seeds `options` from `config.data`, hands them to the renderer and, if
    /// the renderer reports an axis, flushes the pending overflow.
    ///
    /// With empty seed data the renderer stays unconfigured and the first
    /// `add_data_points` call re-seeds instead of appending.
    pub fn new(renderer: R, options: ChartOptions, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::with_observers(renderer, options, config, Vec::new())
    }

    /// Like [`ChartEngine::new`], but registers `observers` before the first
    /// renderer call so they see `Initialized`, the construction-time flush
    /// and any failure of that flush.
    pub fn with_observers(
        renderer: R,
        options: ChartOptions,
        config: ChartEngineConfig,
        observers: Vec<Box<dyn ChartObserver>>,
    ) -> ChartResult<Self> {
        validation::validate_base_options(&options)?;

        let mut engine = Self {
            renderer,
            options,
            visible_cap: config.visible_data_points_num,
            arity_policy: config.arity_policy,
            pending: Vec::new(),
            initialized: false,
            observers: Vec::with_capacity(observers.len()),
        };
        for observer in observers {
            engine.register_observer(observer)?;
        }
        engine.pending = fill_axis_data(
            &mut engine.options,
            config.data,
            engine.visible_cap,
            engine.arity_policy,
        )?;
        engine.renderer.set_option(&engine.options, true)?;
        engine.initialized = engine.renderer.get_option()?.has_axis();
        debug!(
            initialized = engine.initialized,
            pending_len = engine.pending.len(),
            "chart engine constructed"
        );

        if engine.initialized {
            engine.complete_initialization();
        }
        Ok(engine)
    }

    /// Announces the configured axis and flushes the pending queue; a failed
    /// flush keeps the queue for the next call.
    pub(super) fn complete_initialization(&mut self) {
        let axis_mode = self.options.axis_mode().unwrap_or_default();
        self.emit_event(ChartEvent::Initialized {
            series_count: self.options.series_count(),
            axis_mode,
        });
        if let Err(err) = self.flush_pending() {
            self.report_failure(&err, "pending queue flush");
        }
    }
}
