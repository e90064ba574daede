use crate::core::{ArityPolicy, DataPoint, VisibleCap};
use crate::extensions::ChartObserver;
use crate::render::{ChartOptions, Renderer};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the construction-time options (needed to re-seed a chart
/// that started without data), the one-shot pending queue and the observer
/// list. Live series state always stays in the renderer and is re-read on
/// every call. Methods take `&mut self`, so calls on one chart are serialized.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) options: ChartOptions,
    pub(super) visible_cap: Option<VisibleCap>,
    pub(super) arity_policy: ArityPolicy,
    pub(super) pending: Vec<DataPoint>,
    pub(super) initialized: bool,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl<R: Renderer> ChartEngine<R> {
    /// `true` once the renderer has reported a configured x axis.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Overflow points still waiting for their first append.
    #[must_use]
    pub fn pending(&self) -> &[DataPoint] {
        &self.pending
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Cap written into the options at the last seeding.
    #[must_use]
    pub fn visible_cap(&self) -> VisibleCap {
        self.options.visible_data_points_num.unwrap_or_default()
    }

    #[must_use]
    pub fn arity_policy(&self) -> ArityPolicy {
        self.arity_policy
    }

    /// Options as last seeded by the engine, not the live renderer state.
    #[must_use]
    pub fn seeded_options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
