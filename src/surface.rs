/// The host's scrollable element, seen through the two operations the engine needs.
///
/// `move_to` is a request: the host may apply it immediately, animate it, or clamp it. The
/// engine only learns the resulting offset when the host calls
/// [`crate::WindowedList::on_scroll`] (or [`crate::WindowedList::sync_from_surface`]).
pub trait ScrollSurface {
    fn move_to(&mut self, offset: f64);

    fn current_offset(&self) -> f64;
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn move_to(&mut self, offset: f64) {
        (**self).move_to(offset);
    }

    fn current_offset(&self) -> f64 {
        (**self).current_offset()
    }
}

/// A surface that applies every move immediately.
///
/// Useful for tests and for hosts without native scrolling (e.g. terminal UIs), where the
/// engine's offset is the only scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImmediateSurface {
    offset: f64,
}

impl ImmediateSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScrollSurface for ImmediateSurface {
    fn move_to(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn current_offset(&self) -> f64 {
        self.offset
    }
}
