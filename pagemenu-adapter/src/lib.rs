//! Adapter utilities for the `pagemenu` crate.
//!
//! The `pagemenu` crate is UI-agnostic and focuses on windowing, diffing and the paging state
//! machine. This crate wires those pieces to a host:
//!
//! - a [`Controller`] that turns taps, swipes and pager progress into host calls
//!   (navigate, layout invalidation, highlight, menu offset)
//! - offset-preserving window reloads, so the menu never jumps when its window slides
//! - menu offsets that follow swipe progress (optional; see `MenuTransition`)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;


pub use controller::{Controller, SwipeDirection};
pub use host::PagingHost;
