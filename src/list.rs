use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{WindowError, WindowResult, check_container_extent, check_item_extent};
use crate::projector;
use crate::range;
use crate::{
    OnRenderCallback, OnScrollCallback, RenderItemCallback, RenderWindow, ScrollDirection,
    ScrollEvent, ScrollSource, ScrollSurface, ViewportState, WindowConfig, WindowEntry,
    WindowRange,
};

/// A windowed list: fixed-extent virtualization over a host-owned dataset.
///
/// The engine holds no UI objects. The host drives it with scroll and resize events, supplies
/// datasets, and receives render notifications through the callbacks installed at
/// construction. Every mutation recomputes the window synchronously; the cost of a
/// recomputation depends on the window size only, never on the dataset size.
pub struct WindowedList<T, S> {
    state: ViewportState,
    window: WindowRange,
    items: Arc<[T]>,
    surface: S,

    render_item: RenderItemCallback<T>,
    on_render: Option<OnRenderCallback<T>>,
    on_scroll: Option<OnScrollCallback>,

    scroll_direction: Option<ScrollDirection>,
    pending_target: Option<f64>,

    notify_depth: usize,
    notify_pending: bool,
}

impl<T, S: ScrollSurface> WindowedList<T, S> {
    /// Creates an engine scrolled to the top of `items`.
    ///
    /// Fails with a configuration error when `config` holds an invalid item or container
    /// extent; no engine is created in that case. The constructor does not render: call
    /// [`Self::render`] once the host is ready for its first frame.
    pub fn new(
        config: WindowConfig,
        items: impl Into<Arc<[T]>>,
        surface: S,
        render_item: impl Fn(&T, usize, f64) + Send + Sync + 'static,
    ) -> WindowResult<Self> {
        let items = items.into();
        let state = ViewportState::new(&config, items.len())?;
        vdebug!(
            count = items.len(),
            item_extent = config.item_extent,
            container_extent = config.container_extent,
            overscan = config.overscan,
            "WindowedList::new"
        );
        Ok(Self {
            window: range::compute_window(&state),
            state,
            items,
            surface,
            render_item: Arc::new(render_item),
            on_render: None,
            on_scroll: None,
            scroll_direction: None,
            pending_target: None,
            notify_depth: 0,
            notify_pending: false,
        })
    }

    pub fn with_on_render(
        mut self,
        on_render: impl Fn(&RenderWindow<'_, T>) + Send + Sync + 'static,
    ) -> Self {
        self.on_render = Some(Arc::new(on_render));
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: impl Fn(ScrollEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll = Some(Arc::new(on_scroll));
        self
    }

    pub fn set_render_item(
        &mut self,
        render_item: impl Fn(&T, usize, f64) + Send + Sync + 'static,
    ) {
        self.render_item = Arc::new(render_item);
    }

    pub fn set_on_render(
        &mut self,
        on_render: Option<impl Fn(&RenderWindow<'_, T>) + Send + Sync + 'static>,
    ) {
        self.on_render = on_render.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_scroll(
        &mut self,
        on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>,
    ) {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    /// Runs the render callbacks for the current window.
    pub fn render(&self) {
        let extent = self.state.item_extent;
        let render_item = &self.render_item;
        match &self.on_render {
            Some(on_render) => {
                let window = projector::project(&self.items, self.window, extent);
                for entry in &window.entries {
                    render_item(entry.item, entry.index, entry.top_offset);
                }
                on_render(&window);
            }
            None => {
                projector::for_each_entry(&self.items, self.window, extent, |entry| {
                    render_item(entry.item, entry.index, entry.top_offset);
                });
            }
        }
    }

    fn invalidate(&mut self) {
        self.window = range::compute_window(&self.state);
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.render();
    }

    /// Batches multiple updates into a single render notification.
    ///
    /// Scroll notifications are still delivered as they happen; only the render callbacks are
    /// deferred to the end of the outermost batch.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::replace(&mut self.notify_pending, false) {
            self.render();
        }
    }

    /// Replaces the dataset.
    ///
    /// A dataset with a new identity resets the scroll offset to `0` and asks the surface to
    /// move to the top. Passing the handle that is already installed is a no-op.
    pub fn set_dataset(&mut self, items: impl Into<Arc<[T]>>) {
        let items = items.into();
        if Arc::ptr_eq(&self.items, &items) {
            vtrace!(count = items.len(), "set_dataset: same dataset");
            return;
        }
        vdebug!(
            prev_count = self.items.len(),
            count = items.len(),
            "set_dataset"
        );
        self.state.item_count = items.len();
        self.state.scroll_offset = 0.0;
        self.items = items;
        self.scroll_direction = None;
        self.pending_target = None;
        self.surface.move_to(0.0);
        self.invalidate();
    }

    /// Applies a host resize.
    ///
    /// When the larger viewport leaves the current offset past the new maximum, the surface is
    /// moved to the maximum and the clamped offset goes through [`Self::on_scroll`].
    pub fn set_container_extent(&mut self, extent: f64) -> WindowResult<()> {
        let extent = check_container_extent(extent)?;
        if self.state.container_extent == extent {
            return Ok(());
        }
        vtrace!(extent, "set_container_extent");
        self.state.container_extent = extent;
        self.settle_geometry();
        Ok(())
    }

    /// Changes the per-item extent. Rejected values leave the engine unchanged.
    ///
    /// Shrinking items shrinks the content; an offset past the new maximum is clamped the same
    /// way as in [`Self::set_container_extent`].
    pub fn set_item_extent(&mut self, extent: f64) -> WindowResult<()> {
        let extent = check_item_extent(extent)?;
        if self.state.item_extent == extent {
            return Ok(());
        }
        vdebug!(extent, "set_item_extent");
        self.state.item_extent = extent;
        self.settle_geometry();
        Ok(())
    }

    // The offset must stay within `[0, max_scroll_offset]` or the window falls past the list.
    fn settle_geometry(&mut self) {
        let offset = self.state.scroll_offset;
        let clamped = self.state.clamp_scroll_offset(offset);
        if clamped == offset {
            self.invalidate();
            return;
        }
        vdebug!(offset, clamped, "geometry change clamps scroll offset");
        self.request_move(clamped);
        self.on_scroll(clamped);
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.state.overscan == overscan {
            return;
        }
        self.state.overscan = overscan;
        self.invalidate();
    }

    /// Processes a scroll offset reported by the host.
    ///
    /// The offset is clamped to `[0, max_scroll_offset]`, the window is recomputed and both
    /// the render callbacks and the scroll hook fire. Repeating a call with the same offset
    /// yields the same window.
    pub fn on_scroll(&mut self, raw_offset: f64) -> ScrollEvent {
        let offset = self.state.clamp_scroll_offset(raw_offset);
        let prev = self.state.scroll_offset;
        let direction = if offset > prev {
            Some(ScrollDirection::Forward)
        } else if offset < prev {
            Some(ScrollDirection::Backward)
        } else {
            None
        };
        if direction.is_some() {
            self.scroll_direction = direction;
        }

        // Any event settles an outstanding command; only an exact landing counts as its result.
        let source = match self.pending_target.take() {
            Some(target) if self.state.clamp_scroll_offset(target) == offset => {
                ScrollSource::Programmatic
            }
            _ => ScrollSource::User,
        };
        vtrace!(raw_offset, offset, ?source, "on_scroll");

        self.state.scroll_offset = offset;
        self.invalidate();

        let event = ScrollEvent {
            scroll_offset: offset,
            direction,
            source,
        };
        if let Some(cb) = &self.on_scroll {
            cb(event);
        }
        event
    }

    /// Reads the surface's current offset and processes it as a scroll event.
    pub fn sync_from_surface(&mut self) -> ScrollEvent {
        let offset = self.surface.current_offset();
        self.on_scroll(offset)
    }

    /// Asks the surface to bring `index` to the top of the viewport.
    ///
    /// Returns the requested offset (`index * item_extent`). The engine state changes only
    /// when the host reports the resulting offset.
    pub fn scroll_to_index(&mut self, index: usize) -> WindowResult<f64> {
        let count = self.state.item_count;
        if index >= count {
            vwarn!(index, count, "scroll_to_index: index out of range");
            return Err(WindowError::IndexOutOfRange { index, count });
        }
        let target = projector::top_offset(index, self.state.item_extent);
        self.request_move(target);
        Ok(target)
    }

    /// Same as `scroll_to_index(0)`; returns `None` without touching the surface when the
    /// list is empty.
    pub fn scroll_to_top(&mut self) -> Option<f64> {
        if self.state.item_count == 0 {
            return None;
        }
        self.request_move(0.0);
        Some(0.0)
    }

    /// Asks the surface to move to the last valid offset and returns it.
    pub fn scroll_to_bottom(&mut self) -> f64 {
        let target = self.state.max_scroll_offset();
        self.request_move(target);
        target
    }

    fn request_move(&mut self, target: f64) {
        vtrace!(target, "request_move");
        self.pending_target = Some(target);
        self.surface.move_to(target);
    }

    /// `true` while a `scroll_to_*` request has not been answered by a scroll event.
    pub fn has_pending_scroll(&self) -> bool {
        self.pending_target.is_some()
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// The current overscanned window.
    pub fn window(&self) -> WindowRange {
        self.window
    }

    /// The items intersecting the viewport, including a partly visible last row (no overscan).
    pub fn visible_range(&self) -> WindowRange {
        range::compute_visible_range(&self.state)
    }

    pub fn is_index_visible(&self, index: usize) -> bool {
        self.visible_range().contains(index)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.state.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn container_extent(&self) -> f64 {
        self.state.container_extent
    }

    pub fn item_extent(&self) -> f64 {
        self.state.item_extent
    }

    pub fn overscan(&self) -> usize {
        self.state.overscan
    }

    pub fn len(&self) -> usize {
        self.state.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.state.item_count == 0
    }

    pub fn total_extent(&self) -> f64 {
        self.state.total_extent()
    }

    pub fn max_scroll_offset(&self) -> f64 {
        self.state.max_scroll_offset()
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        self.state.clamp_scroll_offset(offset)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn dataset(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn item_top(&self, index: usize) -> Option<f64> {
        (index < self.state.item_count)
            .then(|| projector::top_offset(index, self.state.item_extent))
    }

    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        range::index_at_offset(&self.state, offset)
    }

    /// Projects the current window onto the dataset.
    pub fn render_window(&self) -> RenderWindow<'_, T> {
        projector::project(&self.items, self.window, self.state.item_extent)
    }

    /// Zero-allocation iteration over the current window.
    pub fn for_each_entry<'a>(&'a self, f: impl FnMut(WindowEntry<'a, T>)) {
        projector::for_each_entry(&self.items, self.window, self.state.item_extent, f);
    }

    /// Collects the current window into `out` (clears `out` first).
    pub fn collect_entries<'a>(&'a self, out: &mut Vec<WindowEntry<'a, T>>) {
        projector::collect_entries(&self.items, self.window, self.state.item_extent, out);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<T, S: fmt::Debug> fmt::Debug for WindowedList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedList")
            .field("state", &self.state)
            .field("window", &self.window)
            .field("surface", &self.surface)
            .field("scroll_direction", &self.scroll_direction)
            .field("pending_target", &self.pending_target)
            .finish_non_exhaustive()
    }
}
