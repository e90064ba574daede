mod memory_renderer;
mod options;

pub use memory_renderer::{MemoryRenderer, RendererCall};
pub use options::{
    ChartOptions, LegendOption, SeriesOption, SeriesValue, TitleOption, XAxisOption, YAxisOption,
};

use crate::core::AppendRecord;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// The engine only reads live state through `get_option` and only mutates it
/// through `set_option` and `add_data`, so the windowing logic stays
/// independent of how a backend draws.
pub trait Renderer {
    /// Current render state, including series data accumulated by appends.
    fn get_option(&self) -> ChartResult<ChartOptions>;

    /// Applies `options`; `overwrite` replaces the state, otherwise merges.
    fn set_option(&mut self, options: &ChartOptions, overwrite: bool) -> ChartResult<()>;

    /// Applies append records in order. Records with `grows_window == false`
    /// evict the oldest point of their series.
    fn add_data(&mut self, records: &[AppendRecord]) -> ChartResult<()>;

    fn hide_loading(&mut self) -> ChartResult<()>;
}
