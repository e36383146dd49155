use crate::{ItemMeasure, MenuTransition, SelectedScrollPosition};

/// Configuration shared by [`crate::PagingWindow::generate`], [`crate::WindowLayout`] and the
/// adapter controller.
///
/// All fields are plain data, so the options are cheap to copy and (with `feature = "serde"`)
/// can be loaded from any serde format.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagingOptions {
    /// Width used for items the measurement port has not placed yet.
    pub estimated_item_width: f64,
    /// Space between two adjacent menu items.
    pub item_spacing: f64,
    /// Where the selected item is scrolled to after a selection settles.
    pub selected_scroll_position: SelectedScrollPosition,
    /// Whether the menu follows swipe progress or animates once the transition completes.
    pub menu_transition: MenuTransition,
    /// Upper bound on materialized items per window.
    ///
    /// Window filling also stops when the neighbor provider revisits an item, so a cyclic
    /// provider cannot make it spin; this bound covers providers that never repeat.
    pub max_window_items: usize,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            estimated_item_width: 100.0,
            item_spacing: 0.0,
            selected_scroll_position: SelectedScrollPosition::PreferCenter,
            menu_transition: MenuTransition::ScrollAlongside,
            max_window_items: 1024,
        }
    }
}

impl PagingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_estimated_item_width(mut self, width: f64) -> Self {
        self.estimated_item_width = width;
        self
    }

    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    pub fn with_selected_scroll_position(mut self, position: SelectedScrollPosition) -> Self {
        self.selected_scroll_position = position;
        self
    }

    pub fn with_menu_transition(mut self, transition: MenuTransition) -> Self {
        self.menu_transition = transition;
        self
    }

    pub fn with_max_window_items(mut self, max: usize) -> Self {
        self.max_window_items = max;
        self
    }

    /// Inter-item spacing, clamped to a non-negative value.
    pub fn spacing(&self) -> f64 {
        non_negative(self.item_spacing)
    }

    /// Resolves the width of `item`: the measured width once placed, the estimate otherwise.
    pub fn item_width<T, M: ItemMeasure<T> + ?Sized>(&self, measure: &M, item: &T) -> f64 {
        let width = measure
            .measured_width(item)
            .unwrap_or(self.estimated_item_width);
        non_negative(width)
    }

    pub(crate) fn window_limit(&self) -> usize {
        self.max_window_items.max(1)
    }
}

// NaN collapses to zero as well.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}
