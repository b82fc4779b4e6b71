use alloc::sync::Arc;

use crate::error::{WindowResult, check_container_extent, check_item_extent};
use crate::{RenderWindow, ScrollEvent};

/// The host's per-item template: `(item, index, top_offset)`.
///
/// Invoked for every entry of each recomputed window, in index order.
pub type RenderItemCallback<T> = Arc<dyn Fn(&T, usize, f64) + Send + Sync>;

/// A window-level hook fired after the per-item callbacks of a recomputation, typically used
/// to size the scroll spacer from `total_extent`.
pub type OnRenderCallback<T> = Arc<dyn Fn(&RenderWindow<'_, T>) + Send + Sync>;

/// Fired after every scroll event, e.g. to lazy-load more data or toggle a "back to top"
/// affordance.
pub type OnScrollCallback = Arc<dyn Fn(ScrollEvent) + Send + Sync>;

/// Overscan used when the host does not specify one.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Construction-time geometry for [`crate::WindowedList`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; a missing
/// `overscan` field falls back to [`DEFAULT_OVERSCAN`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Size of every item along the scroll axis. Must be positive.
    pub item_extent: f64,
    /// Initial size of the visible viewport along the scroll axis.
    #[cfg_attr(feature = "serde", serde(default))]
    pub container_extent: f64,
    /// Items rendered beyond each edge of the visible window.
    #[cfg_attr(feature = "serde", serde(default = "default_overscan"))]
    pub overscan: usize,
}

#[cfg(feature = "serde")]
fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

impl WindowConfig {
    pub fn new(item_extent: f64, container_extent: f64) -> Self {
        Self {
            item_extent,
            container_extent,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_item_extent(mut self, item_extent: f64) -> Self {
        self.item_extent = item_extent;
        self
    }

    pub fn with_container_extent(mut self, container_extent: f64) -> Self {
        self.container_extent = container_extent;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Checks the geometry without building an engine.
    pub fn validate(&self) -> WindowResult<()> {
        check_item_extent(self.item_extent)?;
        check_container_extent(self.container_extent)?;
        Ok(())
    }
}
