use pagemenu::{
    Direction, InvalidationKind, MenuTransition, PagingEvent, PagingItem, PagingObserver,
    PagingOptions, PagingState, PagingStateMachine, PagingWindow, WindowDiff, WindowLayout,
    interpolate_offset,
};

use crate::PagingHost;

/// A swipe over the menu itself, as opposed to progress reported by the content pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// The finger moves left, revealing the next item.
    Left,
    /// The finger moves right, revealing the previous item.
    Right,
}

impl SwipeDirection {
    pub fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Forward,
            Self::Right => Direction::Reverse,
        }
    }
}

/// A framework-neutral controller that owns the paging state machine and the current window,
/// and drives a [`PagingHost`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `select` / `swipe` for menu taps and menu swipes
/// - `scroll` / `finish_scrolling` / `cancel_scrolling` with progress from the content pager
/// - `set_viewport_width` / `on_menu_scroll` when the menu is resized or scrolled by the user
///
/// The state machine is created lazily by the first `select`. Until then, pager events are
/// ignored. Every time the selection settles, the window is regenerated around it and diffed
/// against the previous one; the menu offset is corrected so the items that stay do not jump,
/// then the selected item is scrolled into place and highlighted.
#[derive(Clone, Debug)]
pub struct Controller<T, H> {
    host: H,
    options: PagingOptions,
    machine: Option<PagingStateMachine<T>>,
    window: PagingWindow<T>,
    layout: WindowLayout,
    viewport_width: f64,
    content_offset: f64,
    track: Option<MenuTrack>,
}

/// Menu offsets a gesture interpolates between.
#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuTrack {
    from: f64,
    to: f64,
}

impl<T: PagingItem, H: PagingHost<T>> Controller<T, H> {
    pub fn new(host: H, options: PagingOptions) -> Self {
        Self {
            host,
            options,
            machine: None,
            window: PagingWindow::empty(),
            layout: WindowLayout::default(),
            viewport_width: 0.0,
            content_offset: 0.0,
            track: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn options(&self) -> &PagingOptions {
        &self.options
    }

    /// Replaces the options and regenerates the window around the current item.
    pub fn set_options(&mut self, options: PagingOptions) {
        self.options = options;
        self.reload();
    }

    /// `None` until the first selection.
    pub fn state(&self) -> Option<&PagingState<T>> {
        self.machine.as_ref().map(PagingStateMachine::state)
    }

    /// The authoritative current item. See [`PagingState::current_item`].
    pub fn current_item(&self) -> Option<&T> {
        self.state().map(PagingState::current_item)
    }

    /// The item that should look selected. See [`PagingState::visual_item`].
    pub fn visual_item(&self) -> Option<&T> {
        self.state().map(PagingState::visual_item)
    }

    pub fn window(&self) -> &PagingWindow<T> {
        &self.window
    }

    pub fn layout(&self) -> &WindowLayout {
        &self.layout
    }

    pub fn content_offset(&self) -> f64 {
        self.content_offset
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Selects `item`.
    ///
    /// Items outside the current window (and the very first selection) take the cold-start
    /// path: a fresh state machine, a fresh window, and a non-animated navigation with
    /// `Direction::None`. Returns `false` if `item` was already selected, even when the menu has
    /// since slid its window away from it.
    pub fn select(&mut self, item: T, animated: bool) -> bool {
        if let Some(PagingState::Selected { item: current }) = self.state() {
            if *current == item {
                ptrace!("selection unchanged");
                return false;
            }
        }
        let in_window = self.machine.is_some() && self.window.contains(&item);
        if !in_window {
            self.cold_start(item);
            return true;
        }
        let Some(current) = self.current_item().cloned() else {
            return false;
        };
        let direction = self.window.direction(&current, &item);
        self.fire(PagingEvent::Select {
            item,
            direction,
            animated,
        })
    }

    /// Selects the neighbor of the current item in the swipe direction (animated).
    ///
    /// Returns `false` when there is no selection or no neighbor on that side.
    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        let Some(current) = self.current_item() else {
            return false;
        };
        let Some(target) = self.host.neighbor(current, direction.direction()) else {
            ptrace!(direction = ?direction, "swipe past the last item");
            return false;
        };
        self.select(target, true)
    }

    /// Swipe progress from the content pager. Positive values move forward.
    pub fn scroll(&mut self, progress: f64) -> bool {
        self.fire(PagingEvent::Scroll { progress })
    }

    /// The content pager settled on the transition target.
    pub fn finish_scrolling(&mut self) -> bool {
        self.fire(PagingEvent::FinishScrolling)
    }

    /// The content pager returned to the origin, or the transition was interrupted.
    pub fn cancel_scrolling(&mut self) -> bool {
        self.fire(PagingEvent::CancelScrolling)
    }

    /// Content for the neighbor of the current item, for pagers that prefetch adjacent pages.
    pub fn content_for_neighbor(&mut self, direction: Direction) -> Option<H::Content> {
        let current = self.current_item()?.clone();
        let neighbor = self.host.neighbor(&current, direction)?;
        Some(self.host.content_for(&neighbor))
    }

    /// Call this when the menu viewport is laid out or resized.
    ///
    /// An in-flight transition is cancelled, then the window and offsets are recomputed for the
    /// current item.
    pub fn set_viewport_width(&mut self, width: f64) {
        let width = if width > 0.0 {
            width
        } else {
            if width.is_nan() || width < 0.0 {
                pwarn!(width, "invalid viewport width, using 0");
            }
            0.0
        };
        if width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        if self.machine.is_none() {
            return;
        }
        if self.cancel_scrolling() {
            return;
        }
        self.reload();
    }

    /// Call this when the user scrolls the menu directly.
    ///
    /// At rest, reaching an edge of the window while the provider has more items on that side
    /// regenerates the window around the edge item. The offset correction keeps what is on
    /// screen in place, and the selection highlight is re-applied if it is still materialized.
    pub fn on_menu_scroll(&mut self, offset: f64) {
        if offset.is_nan() {
            pwarn!("ignoring NaN menu offset");
            return;
        }
        self.content_offset = offset;
        let Some(state) = self.state() else {
            return;
        };
        if state.is_scrolling() {
            return;
        }

        let edge = if offset <= 0.0 && self.window.has_items_before() {
            self.window.first().cloned()
        } else if offset >= self.layout.max_offset(self.viewport_width)
            && self.window.has_items_after()
        {
            self.window.last().cloned()
        } else {
            None
        };
        let Some(edge) = edge else {
            return;
        };

        ptrace!(offset, "menu reached a window edge");
        self.replace_window(&edge);
        if let Some(selected) = self.current_item().cloned() {
            if self.window.contains(&selected) {
                self.host.highlight(&selected, false);
            }
        }
    }

    /// Regenerates the window around the current item without animation.
    pub fn reload(&mut self) {
        self.settle(false);
    }

    fn cold_start(&mut self, item: T) {
        pdebug!(had_selection = self.machine.is_some(), "cold start selection");
        self.track = None;
        self.machine = Some(PagingStateMachine::new(item.clone()));
        self.window = PagingWindow::generate(
            item.clone(),
            self.viewport_width,
            &self.host,
            &self.host,
            &self.options,
        );
        self.layout = WindowLayout::new(&self.window, &self.host, &self.options);
        self.host.invalidate_layout(InvalidationKind::Reload);

        let content = self.host.content_for(&item);
        self.host.navigate(&item, content, Direction::None, false);
        self.scroll_to_item(&item, false);
        self.host.highlight(&item, false);
    }

    fn fire(&mut self, event: PagingEvent<T>) -> bool {
        let settle_animated = match &event {
            PagingEvent::Select { animated, .. } => *animated,
            _ => self.options.menu_transition == MenuTransition::AnimateAfter,
        };
        let Some(machine) = self.machine.as_mut() else {
            ptrace!("pager event ignored before the first selection");
            return false;
        };

        let mut effects = Effects::<T>::default();
        if !machine.fire(event, &self.host, &mut effects) {
            return false;
        }

        if let Some(change) = effects.item_change {
            let content = self.host.content_for(&change.item);
            self.host.navigate(&change.item, content, change.direction, change.animated);
        }

        if effects.reload {
            self.track = None;
            self.settle(settle_animated);
        } else if effects.transition_started {
            self.begin_track();
            self.host.invalidate_layout(InvalidationKind::TransitionStart);
            self.follow_progress();
        } else if effects.offset_changed {
            self.host.invalidate_layout(InvalidationKind::Offset);
            self.follow_progress();
        }
        true
    }

    fn settle(&mut self, animated: bool) {
        let Some(item) = self.current_item().cloned() else {
            return;
        };
        self.replace_window(&item);
        self.scroll_to_item(&item, animated);
        self.host.highlight(&item, animated);
    }

    fn replace_window(&mut self, focal: &T) {
        let window = PagingWindow::generate(
            focal.clone(),
            self.viewport_width,
            &self.host,
            &self.host,
            &self.options,
        );
        let spacing = self.options.spacing();
        let correction = WindowDiff::new(&self.window, &window)
            .offset_correction(|item| self.options.item_width(&self.host, item), spacing);
        pdebug!(
            old_len = self.window.len(),
            new_len = window.len(),
            correction = ?correction,
            "replacing window"
        );

        self.window = window;
        self.layout = WindowLayout::new(&self.window, &self.host, &self.options);
        self.host.invalidate_layout(InvalidationKind::Reload);

        if let Some(delta) = correction {
            if delta != 0.0 {
                self.content_offset += delta;
                self.host.set_content_offset(self.content_offset, false);
            }
        }
    }

    fn scroll_to_item(&mut self, item: &T, animated: bool) {
        let Some(offset) = self.offset_for_item(item) else {
            return;
        };
        self.content_offset = offset;
        self.host.set_content_offset(offset, animated);
    }

    fn offset_for_item(&self, item: &T) -> Option<f64> {
        let position = self.window.position(item)?;
        self.layout.offset_for(
            position,
            self.options.selected_scroll_position,
            self.viewport_width,
        )
    }

    fn begin_track(&mut self) {
        let target = match self.state() {
            Some(PagingState::Scrolling { to, .. }) => self.offset_for_item(to),
            _ => None,
        };
        // An upcoming item outside the window has no frame yet; the menu then waits for the
        // transition to settle.
        self.track = target.map(|to| MenuTrack {
            from: self.content_offset,
            to,
        });
    }

    fn follow_progress(&mut self) {
        if self.options.menu_transition != MenuTransition::ScrollAlongside {
            return;
        }
        let (Some(track), Some(progress)) = (self.track, self.state().map(PagingState::progress))
        else {
            return;
        };
        let offset = interpolate_offset(track.from, track.to, progress);
        self.content_offset = offset;
        self.host.set_content_offset(offset, false);
    }
}

struct ItemChange<T> {
    item: T,
    direction: Direction,
    animated: bool,
}

/// Collects what one `fire` asked for, so the controller can react once the machine returns.
struct Effects<T> {
    item_change: Option<ItemChange<T>>,
    transition_started: bool,
    offset_changed: bool,
    reload: bool,
}

impl<T> Default for Effects<T> {
    fn default() -> Self {
        Self {
            item_change: None,
            transition_started: false,
            offset_changed: false,
            reload: false,
        }
    }
}

impl<T: Clone> PagingObserver<T> for Effects<T> {
    fn item_changed(&mut self, item: &T, direction: Direction, animated: bool) {
        self.item_change = Some(ItemChange {
            item: item.clone(),
            direction,
            animated,
        });
    }

    fn state_changed(
        &mut self,
        _old: &PagingState<T>,
        _new: &PagingState<T>,
        _event: &PagingEvent<T>,
        invalidation: InvalidationKind,
    ) {
        match invalidation {
            InvalidationKind::TransitionStart => self.transition_started = true,
            InvalidationKind::Offset => self.offset_changed = true,
            InvalidationKind::Reload => self.reload = true,
        }
    }
}
