use alloc::vec::Vec;

use crate::Direction;

/// Resolves the items immediately before/after a given item.
///
/// Contract (not checked): answers are consistent with the total order of `T`. If
/// `item_after(a) == Some(b)` then `a < b` and no item exists strictly between them, and the same
/// question always gets the same answer.
pub trait NeighborProvider<T> {
    fn item_before(&self, item: &T) -> Option<T>;

    fn item_after(&self, item: &T) -> Option<T>;

    /// Neighbor in `direction`; `Direction::None` has no neighbor.
    fn neighbor(&self, item: &T, direction: Direction) -> Option<T> {
        match direction {
            Direction::Forward => self.item_after(item),
            Direction::Reverse => self.item_before(item),
            Direction::None => None,
        }
    }
}

impl<T, P: NeighborProvider<T> + ?Sized> NeighborProvider<T> for &P {
    fn item_before(&self, item: &T) -> Option<T> {
        (**self).item_before(item)
    }

    fn item_after(&self, item: &T) -> Option<T> {
        (**self).item_after(item)
    }
}

/// A sorted slice is a finite neighbor provider.
impl<T: Ord + Clone> NeighborProvider<T> for [T] {
    fn item_before(&self, item: &T) -> Option<T> {
        let index = self.binary_search(item).ok()?;
        index.checked_sub(1).map(|i| self[i].clone())
    }

    fn item_after(&self, item: &T) -> Option<T> {
        let index = self.binary_search(item).ok()?;
        self.get(index + 1).cloned()
    }
}

impl<T: Ord + Clone> NeighborProvider<T> for Vec<T> {
    fn item_before(&self, item: &T) -> Option<T> {
        self.as_slice().item_before(item)
    }

    fn item_after(&self, item: &T) -> Option<T> {
        self.as_slice().item_after(item)
    }
}

/// A neighbor provider built from two closures. See [`neighbors_fn`].
#[derive(Clone, Copy, Debug)]
pub struct NeighborFn<B, A> {
    before: B,
    after: A,
}

/// Builds a [`NeighborProvider`] from `before`/`after` closures.
///
/// This is the usual shape for unbounded item universes (dates, page numbers, streamed feeds).
pub fn neighbors_fn<T, B, A>(before: B, after: A) -> NeighborFn<B, A>
where
    B: Fn(&T) -> Option<T>,
    A: Fn(&T) -> Option<T>,
{
    NeighborFn { before, after }
}

impl<T, B, A> NeighborProvider<T> for NeighborFn<B, A>
where
    B: Fn(&T) -> Option<T>,
    A: Fn(&T) -> Option<T>,
{
    fn item_before(&self, item: &T) -> Option<T> {
        (self.before)(item)
    }

    fn item_after(&self, item: &T) -> Option<T> {
        (self.after)(item)
    }
}

/// Reports the on-screen width of items that have been placed.
///
/// Returning `None` means "not placed yet"; callers then fall back to
/// [`crate::PagingOptions::estimated_item_width`].
pub trait ItemMeasure<T> {
    fn measured_width(&self, item: &T) -> Option<f64>;
}

/// No measurements: every item uses the estimated width.
impl<T> ItemMeasure<T> for () {
    fn measured_width(&self, _item: &T) -> Option<f64> {
        None
    }
}

impl<T, M: ItemMeasure<T> + ?Sized> ItemMeasure<T> for &M {
    fn measured_width(&self, item: &T) -> Option<f64> {
        (**self).measured_width(item)
    }
}

/// Adapts a closure into an [`ItemMeasure`].
#[derive(Clone, Copy, Debug)]
pub struct MeasureFn<F>(pub F);

impl<T, F: Fn(&T) -> Option<f64>> ItemMeasure<T> for MeasureFn<F> {
    fn measured_width(&self, item: &T) -> Option<f64> {
        (self.0)(item)
    }
}

/// Resolves an item to an opaque displayable unit (a page, a view handle, a route).
///
/// Called whenever the authoritative current item changes, and when the external pager asks for
/// a neighbor's content to prefetch.
pub trait ContentProvider<T> {
    type Content;

    fn content_for(&mut self, item: &T) -> Self::Content;
}

impl<T, P: ContentProvider<T> + ?Sized> ContentProvider<T> for &mut P {
    type Content = P::Content;

    fn content_for(&mut self, item: &T) -> Self::Content {
        (**self).content_for(item)
    }
}
