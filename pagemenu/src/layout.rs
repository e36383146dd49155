use alloc::vec::Vec;

use crate::options::non_negative;
use crate::{
    ItemFrame, ItemMeasure, PagingItem, PagingOptions, PagingWindow, SelectedScrollPosition,
};

/// Horizontal placement of a window's items.
///
/// Items are laid out left to right in window order, separated by the item spacing. There is
/// no trailing spacing after the last item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowLayout {
    frames: Vec<ItemFrame>,
    content_width: f64,
}

impl WindowLayout {
    pub fn new<T, M>(window: &PagingWindow<T>, measure: &M, options: &PagingOptions) -> Self
    where
        T: PagingItem,
        M: ItemMeasure<T> + ?Sized,
    {
        Self::from_widths(
            window.iter().map(|item| options.item_width(measure, item)),
            options.spacing(),
        )
    }

    pub fn from_widths(widths: impl IntoIterator<Item = f64>, spacing: f64) -> Self {
        let spacing = non_negative(spacing);
        let mut frames = Vec::new();
        let mut x = 0.0;
        for width in widths {
            if !frames.is_empty() {
                x += spacing;
            }
            let width = non_negative(width);
            frames.push(ItemFrame { x, width });
            x += width;
        }
        Self {
            frames,
            content_width: x,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[ItemFrame] {
        &self.frames
    }

    pub fn frame(&self, position: usize) -> Option<ItemFrame> {
        self.frames.get(position).copied()
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn max_offset(&self, viewport_width: f64) -> f64 {
        non_negative(self.content_width - viewport_width)
    }

    pub fn clamp_offset(&self, offset: f64, viewport_width: f64) -> f64 {
        offset.clamp(0.0, self.max_offset(viewport_width))
    }

    /// Content offset that places the item at `position` according to `anchor`.
    ///
    /// Returns `None` if `position` is out of bounds. Every anchor except
    /// [`SelectedScrollPosition::Center`] is clamped to the scrollable range.
    pub fn offset_for(
        &self,
        position: usize,
        anchor: SelectedScrollPosition,
        viewport_width: f64,
    ) -> Option<f64> {
        let frame = self.frame(position)?;
        let viewport_width = non_negative(viewport_width);
        let offset = match anchor {
            SelectedScrollPosition::Left => self.clamp_offset(frame.x, viewport_width),
            SelectedScrollPosition::Right => {
                self.clamp_offset(frame.end() - viewport_width, viewport_width)
            }
            SelectedScrollPosition::Center => frame.center() - viewport_width / 2.0,
            SelectedScrollPosition::PreferCenter => {
                self.clamp_offset(frame.center() - viewport_width / 2.0, viewport_width)
            }
        };
        Some(offset)
    }

    /// Index of the item covering `x`; points inside the spacing map to the previous item.
    pub fn position_at(&self, x: f64) -> Option<usize> {
        if self.frames.is_empty() || x.is_nan() {
            return None;
        }
        let index = self.frames.partition_point(|frame| frame.x <= x);
        Some(index.saturating_sub(1))
    }
}

/// Menu offset part-way through a transition.
///
/// The sign of `progress` only encodes the swipe direction, so its magnitude is used. Values
/// beyond 1 overshoot `to` the same way an overscrolling pager does.
pub fn interpolate_offset(from: f64, to: f64, progress: f64) -> f64 {
    let t = if progress < 0.0 { -progress } else { progress };
    from + (to - from) * t
}
