#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type ItemSet<T> = HashSet<T>;
#[cfg(not(feature = "std"))]
pub(crate) type ItemSet<T> = BTreeSet<T>;

/// Identity contract for items shown in a paging menu.
///
/// Items must be uniquely identifiable and totally ordered. The order defines the scroll
/// direction and each item's position inside a [`crate::PagingWindow`]. With `feature = "std"`
/// items are also hashed for set membership.
#[cfg(feature = "std")]
pub trait PagingItem: Clone + Ord + core::hash::Hash {}
#[cfg(feature = "std")]
impl<T: Clone + Ord + core::hash::Hash> PagingItem for T {}

#[cfg(not(feature = "std"))]
pub trait PagingItem: Clone + Ord {}
#[cfg(not(feature = "std"))]
impl<T: Clone + Ord> PagingItem for T {}
