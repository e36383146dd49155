use crate::{Direction, InvalidationKind, NeighborProvider, PagingEvent, PagingItem, PagingState};

/// Receives the side effects of [`PagingStateMachine::fire`].
///
/// Both methods default to no-ops, so an observer only implements what it consumes. `()` is the
/// observer that ignores everything.
pub trait PagingObserver<T> {
    /// The authoritative current item changed.
    fn item_changed(&mut self, _item: &T, _direction: Direction, _animated: bool) {}

    /// Any state change, including progress updates inside a transition.
    ///
    /// Runs after the new state is in place and before [`PagingObserver::item_changed`].
    fn state_changed(
        &mut self,
        _old: &PagingState<T>,
        _new: &PagingState<T>,
        _event: &PagingEvent<T>,
        _invalidation: InvalidationKind,
    ) {
    }
}

impl<T> PagingObserver<T> for () {}

impl<T, O: PagingObserver<T> + ?Sized> PagingObserver<T> for &mut O {
    fn item_changed(&mut self, item: &T, direction: Direction, animated: bool) {
        (**self).item_changed(item, direction, animated);
    }

    fn state_changed(
        &mut self,
        old: &PagingState<T>,
        new: &PagingState<T>,
        event: &PagingEvent<T>,
        invalidation: InvalidationKind,
    ) {
        (**self).state_changed(old, new, event, invalidation);
    }
}

/// Reconciles selections and swipe progress into a single current item.
///
/// The machine always holds a state; it is created already `Selected`. Collaborators are passed
/// to [`PagingStateMachine::fire`] per call, so the machine holds no callbacks of its own.
///
/// | state | event | result |
/// |---|---|---|
/// | `Selected(a)` | `Select(b)`, `b != a` | `Selected(b)` |
/// | `Selected(a)` | `Select(a)` | unchanged |
/// | `Selected(a)` | `Scroll(p)`, neighbor of `a` toward `p` exists | `Scrolling(a, neighbor, p)` |
/// | `Scrolling(a, b, p)` | `Scroll(q)` | `Scrolling(a, b, q)` |
/// | `Scrolling(a, b, _)` | `FinishScrolling` | `Selected(b)` |
/// | `Scrolling(a, b, _)` | `CancelScrolling` | `Selected(a)` |
/// | `Scrolling(a, b, _)` | `Select(c)` | finish, then select `c` from `Selected(b)` |
///
/// Anything else is a no-op. A transition keeps its target until it is finished or cancelled,
/// even if the pager drags back through zero or past the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PagingStateMachine<T> {
    state: PagingState<T>,
}

impl<T: PagingItem> PagingStateMachine<T> {
    pub fn new(item: T) -> Self {
        Self {
            state: PagingState::selected(item),
        }
    }

    pub fn state(&self) -> &PagingState<T> {
        &self.state
    }

    pub fn into_state(self) -> PagingState<T> {
        self.state
    }

    /// Applies `event` and reports the effects to `observer`.
    ///
    /// `neighbors` resolves the upcoming item when a swipe starts. Returns `true` if the state
    /// changed; guarded no-ops return `false` and emit nothing.
    pub fn fire<N, O>(&mut self, event: PagingEvent<T>, neighbors: &N, observer: &mut O) -> bool
    where
        N: NeighborProvider<T> + ?Sized,
        O: PagingObserver<T> + ?Sized,
    {
        match &event {
            PagingEvent::Select {
                item,
                direction,
                animated,
            } => {
                let (item, direction, animated) = (item.clone(), *direction, *animated);
                self.select(item, direction, animated, &event, observer)
            }
            PagingEvent::Scroll { progress } => {
                let progress = *progress;
                self.scroll(progress, &event, neighbors, observer)
            }
            PagingEvent::FinishScrolling => self.finish(&event, observer),
            PagingEvent::CancelScrolling => self.cancel(&event, observer),
        }
    }

    fn select<O>(
        &mut self,
        item: T,
        direction: Direction,
        animated: bool,
        event: &PagingEvent<T>,
        observer: &mut O,
    ) -> bool
    where
        O: PagingObserver<T> + ?Sized,
    {
        let mut changed = false;
        if self.state.is_scrolling() {
            changed = self.finish(&PagingEvent::FinishScrolling, observer);
        }
        if *self.state.current_item() == item {
            return changed;
        }

        self.transition(
            PagingState::selected(item.clone()),
            event,
            InvalidationKind::Reload,
            observer,
        );
        observer.item_changed(&item, direction, animated);
        true
    }

    fn scroll<N, O>(
        &mut self,
        progress: f64,
        event: &PagingEvent<T>,
        neighbors: &N,
        observer: &mut O,
    ) -> bool
    where
        N: NeighborProvider<T> + ?Sized,
        O: PagingObserver<T> + ?Sized,
    {
        if progress.is_nan() {
            pwarn!("ignoring NaN scroll progress");
            return false;
        }

        match &self.state {
            PagingState::Selected { item } => {
                if progress == 0.0 {
                    return false;
                }
                let direction = if progress > 0.0 {
                    Direction::Forward
                } else {
                    Direction::Reverse
                };
                let Some(upcoming) = neighbors.neighbor(item, direction) else {
                    ptrace!(progress, "scroll past the last item in this direction");
                    return false;
                };
                let next = PagingState::Scrolling {
                    from: item.clone(),
                    to: upcoming.clone(),
                    progress,
                    initiated_by_gesture: true,
                };
                self.transition(next, event, InvalidationKind::TransitionStart, observer);
                observer.item_changed(&upcoming, direction, true);
                true
            }
            PagingState::Scrolling {
                from,
                to,
                initiated_by_gesture,
                ..
            } => {
                let next = PagingState::Scrolling {
                    from: from.clone(),
                    to: to.clone(),
                    progress,
                    initiated_by_gesture: *initiated_by_gesture,
                };
                self.transition(next, event, InvalidationKind::Offset, observer);
                true
            }
        }
    }

    fn finish<O>(&mut self, event: &PagingEvent<T>, observer: &mut O) -> bool
    where
        O: PagingObserver<T> + ?Sized,
    {
        let PagingState::Scrolling { to, .. } = &self.state else {
            return false;
        };
        let target = to.clone();
        self.transition(
            PagingState::selected(target),
            event,
            InvalidationKind::Reload,
            observer,
        );
        true
    }

    fn cancel<O>(&mut self, event: &PagingEvent<T>, observer: &mut O) -> bool
    where
        O: PagingObserver<T> + ?Sized,
    {
        let PagingState::Scrolling { from, to, .. } = &self.state else {
            return false;
        };
        let origin = from.clone();
        let direction = Direction::between(to, from);
        self.transition(
            PagingState::selected(origin.clone()),
            event,
            InvalidationKind::Reload,
            observer,
        );
        observer.item_changed(&origin, direction, true);
        true
    }

    fn transition<O>(
        &mut self,
        next: PagingState<T>,
        event: &PagingEvent<T>,
        invalidation: InvalidationKind,
        observer: &mut O,
    ) where
        O: PagingObserver<T> + ?Sized,
    {
        let old = core::mem::replace(&mut self.state, next);
        ptrace!(
            from_scrolling = old.is_scrolling(),
            to_scrolling = self.state.is_scrolling(),
            progress = self.state.progress(),
            invalidation = ?invalidation,
            "PagingStateMachine::transition"
        );
        observer.state_changed(&old, &self.state, event, invalidation);
    }
}
