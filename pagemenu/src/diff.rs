use alloc::vec::Vec;

use crate::{PagingItem, PagingWindow};

/// Added/removed positions between two windows.
///
/// - `removed`: positions in the old window whose item is absent from the new one.
/// - `added`: positions in the new window whose item is absent from the old one.
///
/// Both sequences are ascending. Items are matched by identity, never by position.
///
/// For an offset-preserving reload, only the deltas in front of a shared *anchor* item move that
/// anchor on screen. [`WindowDiff::offset_correction`] sums them so the adapter can keep the
/// menu visually still while the window slides.
#[derive(Debug)]
pub struct WindowDiff<'a, T> {
    from: &'a PagingWindow<T>,
    to: &'a PagingWindow<T>,
}

impl<T> Clone for WindowDiff<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WindowDiff<'_, T> {}

impl<'a, T: PagingItem> WindowDiff<'a, T> {
    pub fn new(from: &'a PagingWindow<T>, to: &'a PagingWindow<T>) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> &'a PagingWindow<T> {
        self.from
    }

    pub fn to(&self) -> &'a PagingWindow<T> {
        self.to
    }

    /// Visits removed positions (old window) in ascending order without allocating.
    pub fn for_each_removed(&self, mut f: impl FnMut(usize, &'a T)) {
        for (position, item) in self.from.iter().enumerate() {
            if !self.to.contains(item) {
                f(position, item);
            }
        }
    }

    /// Visits added positions (new window) in ascending order without allocating.
    pub fn for_each_added(&self, mut f: impl FnMut(usize, &'a T)) {
        for (position, item) in self.to.iter().enumerate() {
            if !self.from.contains(item) {
                f(position, item);
            }
        }
    }

    pub fn removed(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_removed(|position, _| out.push(position));
        out
    }

    pub fn added(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_added(|position, _| out.push(position));
        out
    }

    /// `true` when both windows hold the same items.
    pub fn is_empty(&self) -> bool {
        self.from.len() == self.to.len() && self.from.iter().all(|item| self.to.contains(item))
    }

    /// The last item of the new window that also exists in the old one.
    pub fn anchor(&self) -> Option<&'a T> {
        self.to.iter().rev().find(|item| self.from.contains(item))
    }

    /// Removed positions that sit before the anchor in the old window.
    ///
    /// Empty when the windows share no item.
    pub fn removed_before_anchor(&self) -> Vec<usize> {
        let Some(end) = self.anchor().and_then(|anchor| self.from.position(anchor)) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        self.for_each_removed(|position, _| {
            if position < end {
                out.push(position);
            }
        });
        out
    }

    /// Added positions that sit before the anchor in the new window.
    ///
    /// Empty when the windows share no item.
    pub fn added_before_anchor(&self) -> Vec<usize> {
        let Some(end) = self.anchor().and_then(|anchor| self.to.position(anchor)) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        self.for_each_added(|position, _| {
            if position < end {
                out.push(position);
            }
        });
        out
    }

    /// Signed content-offset delta that keeps the anchor at the same screen position.
    ///
    /// `new_offset = old_offset + correction`, where the correction adds `width + spacing` for
    /// every item added before the anchor and subtracts it for every item removed before it.
    /// Returns `None` when the windows share no item; there is nothing to hold still then.
    pub fn offset_correction(&self, mut width: impl FnMut(&T) -> f64, spacing: f64) -> Option<f64> {
        let anchor = self.anchor()?;
        let old_end = self.from.position(anchor)?;
        let new_end = self.to.position(anchor)?;

        let mut correction = 0.0;
        self.for_each_removed(|position, item| {
            if position < old_end {
                correction -= width(item) + spacing;
            }
        });
        self.for_each_added(|position, item| {
            if position < new_end {
                correction += width(item) + spacing;
            }
        });
        ptrace!(correction, "WindowDiff::offset_correction");
        Some(correction)
    }
}
