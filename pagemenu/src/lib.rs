//! A headless core for paging menus (tab strips synchronized with a swipeable content pager).
//!
//! For the controller that wires everything to a UI host, see the `pagemenu-adapter` crate.
//!
//! This crate focuses on the parts that are independent of any rendering technology:
//! - a windowed item set that materializes only a viewport's worth of items around a focal item,
//!   which keeps unbounded or streamed item universes cheap
//! - a window diff that turns two successive windows into added/removed positions and an
//!   offset correction, so the menu can slide its window without visual jumps
//! - a paging state machine that reconciles programmatic selection and swipe progress into one
//!   authoritative current item
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - neighbor lookups (`item_before`/`item_after`) for its items
//! - measured item widths once items are placed (estimates are used until then)
//! - the viewport width of the menu
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod diff;
mod item;
mod layout;
mod machine;
mod options;
mod provider;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use diff::WindowDiff;
pub use item::PagingItem;
pub use layout::{WindowLayout, interpolate_offset};
pub use machine::{PagingObserver, PagingStateMachine};
pub use options::PagingOptions;
pub use provider::{
    ContentProvider, ItemMeasure, MeasureFn, NeighborFn, NeighborProvider, neighbors_fn,
};
pub use state::{PagingEvent, PagingState};
pub use types::{Direction, InvalidationKind, ItemFrame, MenuTransition, SelectedScrollPosition};
pub use window::PagingWindow;
