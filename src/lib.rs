//! A headless windowed list virtualization engine.
//!
//! Given a dataset of any size, a viewport extent, and a fixed per-item extent, the engine
//! computes at every scroll position the contiguous window of items to materialize, where
//! each of them goes, and how tall the scrollable content is. Recomputation is O(1) in the
//! dataset size; projecting the window onto the dataset is O(window).
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport extent (and resize notifications)
//! - scroll offsets (from its scroll surface)
//! - a per-item render callback and a [`ScrollSurface`] for programmatic scrolling
//!
//! The building blocks are also usable on their own: [`compute_window`] is a pure function
//! of a [`ViewportState`], and [`project`] maps a window onto any slice.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod error;
mod list;
mod projector;
mod range;
mod state;
mod surface;
mod types;


pub use config::{
    DEFAULT_OVERSCAN, OnRenderCallback, OnScrollCallback, RenderItemCallback, WindowConfig,
};
pub use error::{WindowError, WindowResult};
pub use list::WindowedList;
pub use projector::{collect_entries, for_each_entry, project, top_offset, total_extent};
pub use range::{compute_visible_range, compute_window, index_at_offset};
pub use state::ViewportState;
pub use surface::{ImmediateSurface, ScrollSurface};
pub use types::{
    RenderWindow, ScrollDirection, ScrollEvent, ScrollSource, WindowEntry, WindowRange,
};
