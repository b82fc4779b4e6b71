/// Result alias for fallible [`crate::WindowedList`] operations.
pub type WindowResult<T> = Result<T, WindowError>;

/// Errors reported synchronously by the engine.
///
/// Configuration errors are raised at the boundary (construction or an explicit update) and
/// never clamped into range. A rejected operation leaves the engine state untouched.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// The item extent was zero, negative, or not finite.
    #[error("item extent must be a positive finite number, got {0}")]
    InvalidItemExtent(f64),

    /// The container extent was negative or not finite.
    #[error("container extent must be a non-negative finite number, got {0}")]
    InvalidContainerExtent(f64),

    /// A programmatic scroll targeted an index outside `[0, count)`.
    #[error("index {index} is out of range for a list of {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}

impl WindowError {
    /// Returns `true` for errors caused by invalid geometry configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidItemExtent(_) | Self::InvalidContainerExtent(_)
        )
    }
}

pub(crate) fn check_item_extent(extent: f64) -> WindowResult<f64> {
    if extent.is_finite() && extent > 0.0 {
        Ok(extent)
    } else {
        vwarn!(extent, "rejected item extent");
        Err(WindowError::InvalidItemExtent(extent))
    }
}

pub(crate) fn check_container_extent(extent: f64) -> WindowResult<f64> {
    if extent.is_finite() && extent >= 0.0 {
        Ok(extent)
    } else {
        vwarn!(extent, "rejected container extent");
        Err(WindowError::InvalidContainerExtent(extent))
    }
}
