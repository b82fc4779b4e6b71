use crate::WindowConfig;
use crate::error::{WindowResult, check_container_extent, check_item_extent};

/// The inputs of a window computation.
///
/// A `ViewportState` can only be built from validated geometry, so every value of this type
/// has a positive finite item extent and a non-negative container extent and scroll offset.
///
/// With `feature = "serde"`, this type implements `Serialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewportState {
    pub(crate) scroll_offset: f64,
    pub(crate) container_extent: f64,
    pub(crate) item_extent: f64,
    pub(crate) overscan: usize,
    pub(crate) item_count: usize,
}

impl ViewportState {
    /// Builds a state scrolled to the top.
    pub fn new(config: &WindowConfig, item_count: usize) -> WindowResult<Self> {
        Ok(Self {
            scroll_offset: 0.0,
            container_extent: check_container_extent(config.container_extent)?,
            item_extent: check_item_extent(config.item_extent)?,
            overscan: config.overscan,
            item_count,
        })
    }

    /// Returns a copy with the given scroll offset. Negative and NaN offsets become `0`.
    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = non_negative(scroll_offset);
        self
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn container_extent(&self) -> f64 {
        self.container_extent
    }

    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// `item_count * item_extent`.
    pub fn total_extent(&self) -> f64 {
        self.item_count as f64 * self.item_extent
    }

    /// The largest offset at which the viewport still shows list content.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.total_extent() - self.container_extent).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
