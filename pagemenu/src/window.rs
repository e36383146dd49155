use alloc::vec::Vec;

use crate::item::ItemSet;
use crate::{Direction, ItemMeasure, NeighborProvider, PagingItem, PagingOptions};

/// The bounded set of items currently materialized in the menu.
///
/// A window is an immutable value. When the focal item or the viewport changes, build a new one
/// with [`PagingWindow::generate`] and compare it to the previous one with
/// [`crate::WindowDiff`]; never patch a window in place.
///
/// Invariant: `items()` is the sorted materialization of the visible set, so
/// `position(item_at(p)) == Some(p)` for every position `p < len()`.
#[derive(Clone, Debug)]
pub struct PagingWindow<T> {
    visible: ItemSet<T>,
    sorted: Vec<T>,
    has_items_before: bool,
    has_items_after: bool,
}

impl<T: PagingItem> Default for PagingWindow<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PagingItem> PagingWindow<T> {
    pub fn empty() -> Self {
        Self {
            visible: ItemSet::new(),
            sorted: Vec::new(),
            has_items_before: false,
            has_items_after: false,
        }
    }

    /// Builds a window from an explicit item set. Duplicates collapse.
    pub fn new(
        items: impl IntoIterator<Item = T>,
        has_items_before: bool,
        has_items_after: bool,
    ) -> Self {
        let visible: ItemSet<T> = items.into_iter().collect();
        Self::from_set(visible, has_items_before, has_items_after)
    }

    fn from_set(visible: ItemSet<T>, has_items_before: bool, has_items_after: bool) -> Self {
        let mut sorted: Vec<T> = visible.iter().cloned().collect();
        sorted.sort_unstable();
        Self {
            visible,
            sorted,
            has_items_before,
            has_items_after,
        }
    }

    /// Materializes the items around `focal` that cover `viewport_width`.
    ///
    /// The backward edge is filled first with a budget of one viewport width, then the forward
    /// edge with one viewport width plus whatever the backward pass left unused. If the forward
    /// edge runs out of items with budget left, the backward pass resumes with the remainder.
    /// Each inserted item costs its width (measured, else estimated) plus the item spacing.
    ///
    /// Filling stops early when the provider answers with an item already in the window or the
    /// window reaches [`PagingOptions::max_window_items`].
    pub fn generate<N, M>(
        focal: T,
        viewport_width: f64,
        neighbors: &N,
        measure: &M,
        options: &PagingOptions,
    ) -> Self
    where
        N: NeighborProvider<T> + ?Sized,
        M: ItemMeasure<T> + ?Sized,
    {
        let limit = options.window_limit();
        let spacing = options.spacing();
        let width = |item: &T| options.item_width(measure, item) + spacing;

        let mut items = ItemSet::new();
        items.insert(focal.clone());
        let mut previous = focal.clone();
        let mut next = focal;

        let mut before = viewport_width;
        fill_toward(
            &mut items,
            &mut previous,
            &mut before,
            limit,
            |item| neighbors.item_before(item),
            width,
        );

        let mut after = viewport_width + before;
        fill_toward(
            &mut items,
            &mut next,
            &mut after,
            limit,
            |item| neighbors.item_after(item),
            width,
        );

        if after > 0.0 {
            fill_toward(
                &mut items,
                &mut previous,
                &mut after,
                limit,
                |item| neighbors.item_before(item),
                width,
            );
        }

        let mut window = Self::from_set(items, false, false);
        window.has_items_before = window
            .first()
            .is_some_and(|first| neighbors.item_before(first).is_some());
        window.has_items_after = window
            .last()
            .is_some_and(|last| neighbors.item_after(last).is_some());

        pdebug!(
            len = window.len(),
            viewport_width,
            has_items_before = window.has_items_before,
            has_items_after = window.has_items_after,
            "PagingWindow::generate"
        );
        window
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Items in sort order; the slice index is the item's position.
    pub fn items(&self) -> &[T] {
        &self.sorted
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.sorted.iter()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.visible.contains(item)
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        if !self.visible.contains(item) {
            return None;
        }
        self.sorted.binary_search(item).ok()
    }

    pub fn item_at(&self, position: usize) -> Option<&T> {
        self.sorted.get(position)
    }

    pub fn first(&self) -> Option<&T> {
        self.sorted.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.sorted.last()
    }

    /// Whether the neighbor provider had an item before the first item of the window.
    pub fn has_items_before(&self) -> bool {
        self.has_items_before
    }

    /// Whether the neighbor provider had an item after the last item of the window.
    pub fn has_items_after(&self) -> bool {
        self.has_items_after
    }

    /// Direction of a move from `from` to `to`.
    ///
    /// Uses window positions when both items are materialized and the total order otherwise.
    pub fn direction(&self, from: &T, to: &T) -> Direction {
        match (self.position(from), self.position(to)) {
            (Some(a), Some(b)) => Direction::between(&a, &b),
            _ => Direction::between(from, to),
        }
    }
}

impl<'a, T> IntoIterator for &'a PagingWindow<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted.iter()
    }
}

fn fill_toward<T: PagingItem>(
    items: &mut ItemSet<T>,
    edge: &mut T,
    budget: &mut f64,
    limit: usize,
    mut step: impl FnMut(&T) -> Option<T>,
    width: impl Fn(&T) -> f64,
) {
    while *budget > 0.0 {
        if items.len() >= limit {
            pwarn!(limit, "window fill stopped at max_window_items");
            return;
        }
        let Some(item) = step(edge) else {
            return;
        };
        if items.contains(&item) {
            pwarn!("neighbor provider revisited an item; window fill stopped");
            return;
        }
        *budget -= width(&item);
        *edge = item.clone();
        items.insert(item);
    }
}
