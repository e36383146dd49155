use core::cmp;

/// Direction of a paging transition, derived from the total order of items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The target sorts after the current item.
    Forward,
    /// The target sorts before the current item.
    Reverse,
    #[default]
    None,
}

impl Direction {
    /// Compares `to` against `from`: later ⇒ `Forward`, earlier ⇒ `Reverse`, equal ⇒ `None`.
    pub fn between<T: Ord + ?Sized>(from: &T, to: &T) -> Self {
        match to.cmp(from) {
            cmp::Ordering::Greater => Self::Forward,
            cmp::Ordering::Less => Self::Reverse,
            cmp::Ordering::Equal => Self::None,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
            Self::None => Self::None,
        }
    }
}

/// What a state change asks the surrounding UI to invalidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidationKind {
    /// A gesture-driven transition just began (`Selected` → `Scrolling`).
    TransitionStart,
    /// Progress moved inside an ongoing transition; only the content offset changed.
    Offset,
    /// The machine settled into `Selected`; the window is recomputed.
    Reload,
}

/// Where the selected item is placed inside the menu viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectedScrollPosition {
    Left,
    Right,
    /// Centered, even if that scrolls past the content edges.
    Center,
    /// Centered, clamped to the scrollable content.
    #[default]
    PreferCenter,
}

/// How the menu follows the content pager during a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuTransition {
    /// The menu offset is interpolated with the swipe progress.
    #[default]
    ScrollAlongside,
    /// The menu stays put and animates to the selection once the transition completes.
    AnimateAfter,
}

/// The placement of one item along the menu axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemFrame {
    /// Start offset of the item inside the menu content.
    pub x: f64,
    pub width: f64,
}

impl ItemFrame {
    pub fn end(&self) -> f64 {
        self.x + self.width
    }

    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}
