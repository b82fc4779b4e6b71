use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// What caused a scroll notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollSource {
    /// Wheel, drag, keyboard, or anything else the engine did not request.
    User,
    /// The host completed a `scroll_to_*` command.
    Programmatic,
}

/// A contiguous index window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl WindowRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Scroll notification delivered to the host after every scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    /// The clamped offset now held by the engine.
    pub scroll_offset: f64,
    /// `None` when the offset did not change.
    pub direction: Option<ScrollDirection>,
    pub source: ScrollSource,
}

/// One materialized item of a render window.
#[derive(Debug, PartialEq)]
pub struct WindowEntry<'a, T> {
    pub item: &'a T,
    pub index: usize,
    /// Absolute position along the scroll axis (`index * item_extent`).
    pub top_offset: f64,
}

impl<T> Clone for WindowEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WindowEntry<'_, T> {}

/// The slice of the dataset the host must render, plus the spacer size.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderWindow<'a, T> {
    pub range: WindowRange,
    pub entries: Vec<WindowEntry<'a, T>>,
    /// `item_count * item_extent`, used to size the scroll spacer.
    pub total_extent: f64,
}

impl<T> RenderWindow<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
