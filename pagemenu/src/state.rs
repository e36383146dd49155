use crate::Direction;

/// Selection state of a paging menu.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagingState<T> {
    /// At rest; `item` is the authoritative current item.
    Selected { item: T },
    /// A gesture-driven transition reported by the content pager.
    ///
    /// `progress` is signed (positive moves forward) and unbounded; fast swipes and overscroll
    /// can push it past ±1 for a while.
    Scrolling {
        from: T,
        to: T,
        progress: f64,
        initiated_by_gesture: bool,
    },
}

impl<T> PagingState<T> {
    pub fn selected(item: T) -> Self {
        Self::Selected { item }
    }

    /// The authoritative current item: the selection, or the transition target while scrolling.
    pub fn current_item(&self) -> &T {
        match self {
            Self::Selected { item } => item,
            Self::Scrolling { to, .. } => to,
        }
    }

    /// The item that should look selected right now.
    ///
    /// While scrolling this is `from` until the swipe is more than half-way, then `to`. A
    /// progress of exactly ±0.5 still shows `from`.
    pub fn visual_item(&self) -> &T {
        match self {
            Self::Selected { item } => item,
            Self::Scrolling {
                from, to, progress, ..
            } => {
                if *progress > 0.5 || *progress < -0.5 {
                    to
                } else {
                    from
                }
            }
        }
    }

    /// The item a transition started from; the selection when at rest.
    pub fn origin_item(&self) -> &T {
        match self {
            Self::Selected { item } => item,
            Self::Scrolling { from, .. } => from,
        }
    }

    pub fn upcoming_item(&self) -> Option<&T> {
        match self {
            Self::Selected { .. } => None,
            Self::Scrolling { to, .. } => Some(to),
        }
    }

    /// Signed swipe progress; `0.0` when at rest.
    pub fn progress(&self) -> f64 {
        match self {
            Self::Selected { .. } => 0.0,
            Self::Scrolling { progress, .. } => *progress,
        }
    }

    pub fn is_scrolling(&self) -> bool {
        matches!(self, Self::Scrolling { .. })
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

/// Inputs of the paging state machine.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagingEvent<T> {
    /// Programmatic or menu-driven selection.
    Select {
        item: T,
        direction: Direction,
        animated: bool,
    },
    /// Swipe progress from the content pager.
    Scroll { progress: f64 },
    /// The pager settled on the transition target.
    FinishScrolling,
    /// The pager returned to the transition origin, or the transition was interrupted.
    CancelScrolling,
}
