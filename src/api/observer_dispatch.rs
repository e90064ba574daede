use crate::extensions::{ChartEvent, ObserverContext};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            initialized: self.initialized,
            pending_len: self.pending.len(),
            visible_cap: self.visible_cap(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(&event, context);
        }
    }
}
