use pagemenu::{ContentProvider, Direction, InvalidationKind, ItemMeasure, NeighborProvider};

/// Everything the [`crate::Controller`] needs from the surrounding UI.
///
/// The supertraits are the collaborators the core queries (neighbors, measured widths, page
/// content). The methods below are the events the controller emits; all of them default to
/// no-ops so a host only implements what it renders.
///
/// Hosts are called synchronously from inside controller methods and cannot reach back into the
/// controller while it is borrowed.
pub trait PagingHost<T>: NeighborProvider<T> + ItemMeasure<T> + ContentProvider<T> {
    /// Show `content` (resolved for `item`) in the content pager.
    fn navigate(
        &mut self,
        _item: &T,
        _content: Self::Content,
        _direction: Direction,
        _animated: bool,
    ) {
    }

    /// Invalidate the menu layout.
    fn invalidate_layout(&mut self, _kind: InvalidationKind) {}

    /// Mark `item` as the selected menu item.
    fn highlight(&mut self, _item: &T, _animated: bool) {}

    /// Move the menu to a new content offset.
    fn set_content_offset(&mut self, _offset: f64, _animated: bool) {}
}
