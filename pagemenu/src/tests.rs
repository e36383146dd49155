use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as u32
    }

    fn gen_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * unit
    }
}

fn universe(n: u32) -> Vec<u32> {
    (0..n).collect()
}

fn fixed(width: f64) -> MeasureFn<impl Fn(&u32) -> Option<f64>> {
    MeasureFn(move |_: &u32| Some(width))
}

#[derive(Default)]
struct Log {
    items: Vec<(u32, Direction, bool)>,
    states: Vec<(PagingState<u32>, PagingState<u32>, PagingEvent<u32>, InvalidationKind)>,
}

impl Log {
    fn kinds(&self) -> Vec<InvalidationKind> {
        self.states.iter().map(|s| s.3).collect()
    }
}

impl PagingObserver<u32> for Log {
    fn item_changed(&mut self, item: &u32, direction: Direction, animated: bool) {
        self.items.push((*item, direction, animated));
    }

    fn state_changed(
        &mut self,
        old: &PagingState<u32>,
        new: &PagingState<u32>,
        event: &PagingEvent<u32>,
        invalidation: InvalidationKind,
    ) {
        self.states
            .push((old.clone(), new.clone(), event.clone(), invalidation));
    }
}

fn scrolling(from: u32, to: u32, progress: f64) -> PagingState<u32> {
    PagingState::Scrolling {
        from,
        to,
        progress,
        initiated_by_gesture: true,
    }
}

#[test]
fn generate_fills_one_viewport_on_each_side() {
    let items = universe(100);
    let w = PagingWindow::generate(50, 200.0, &items, &fixed(50.0), &PagingOptions::default());
    assert_eq!(w.items(), (46..=54).collect::<Vec<_>>().as_slice());
    assert!(w.has_items_before());
    assert!(w.has_items_after());
}

#[test]
fn generate_carries_unused_backward_budget_forward() {
    let items = universe(100);
    // Only item 0 exists before 1, leaving 150 of the backward budget for the forward pass.
    let w = PagingWindow::generate(1, 200.0, &items, &fixed(50.0), &PagingOptions::default());
    assert_eq!(w.items(), (0..=8).collect::<Vec<_>>().as_slice());
    assert!(!w.has_items_before());
    assert!(w.has_items_after());
}

#[test]
fn generate_backfills_when_forward_runs_out() {
    let items = universe(100);
    let w = PagingWindow::generate(98, 200.0, &items, &fixed(50.0), &PagingOptions::default());
    assert_eq!(w.items(), (91..=99).collect::<Vec<_>>().as_slice());
    assert!(w.has_items_before());
    assert!(!w.has_items_after());
}

#[test]
fn generate_takes_everything_when_all_items_fit() {
    let items = universe(3);
    let w = PagingWindow::generate(1, 1000.0, &items, &fixed(50.0), &PagingOptions::default());
    assert_eq!(w.items(), &[0, 1, 2]);
    assert!(!w.has_items_before());
    assert!(!w.has_items_after());
}

#[test]
fn generate_without_viewport_keeps_only_the_focal_item() {
    let items = universe(100);
    let w = PagingWindow::generate(50, 0.0, &items, &fixed(50.0), &PagingOptions::default());
    assert_eq!(w.items(), &[50]);
    assert!(w.has_items_before());
    assert!(w.has_items_after());
}

#[test]
fn generate_uses_estimates_for_unplaced_items() {
    let items = universe(100);
    let measure = MeasureFn(|i: &u32| if *i == 49 { Some(150.0) } else { None });
    let opts = PagingOptions::default().with_estimated_item_width(100.0);
    // before: 200 - 150 (item 49) - 100 (item 48) = -50, after: 150 - 100 - 100 = -50
    let w = PagingWindow::generate(50, 200.0, &items, &measure, &opts);
    assert_eq!(w.items(), &[48, 49, 50, 51, 52]);
}

#[test]
fn generate_charges_spacing_per_item() {
    let items = universe(100);
    let opts = PagingOptions::default().with_item_spacing(10.0);
    let w = PagingWindow::generate(50, 200.0, &items, &fixed(40.0), &opts);
    assert_eq!(w.items(), (46..=54).collect::<Vec<_>>().as_slice());
}

#[test]
fn generate_stops_on_a_cyclic_provider() {
    let ring = neighbors_fn(|i: &u32| Some((i + 4) % 5), |i: &u32| Some((i + 1) % 5));
    let w = PagingWindow::generate(0, 10_000.0, &ring, &(), &PagingOptions::default());
    assert_eq!(w.items(), &[0, 1, 2, 3, 4]);
}

#[test]
fn generate_respects_max_window_items() {
    let unbounded = neighbors_fn(|i: &u64| i.checked_sub(1), |i: &u64| i.checked_add(1));
    let opts = PagingOptions::default().with_max_window_items(16);
    let w = PagingWindow::generate(1_000_000, 1e9, &unbounded, &(), &opts);
    assert_eq!(w.len(), 16);
    assert_eq!(w.last(), Some(&1_000_000));
    assert_eq!(w.first(), Some(&999_985));
}

#[test]
fn positions_and_items_are_inverse() {
    let w = PagingWindow::new([9u32, 3, 7, 1, 3], false, true);
    assert_eq!(w.items(), &[1, 3, 7, 9]);
    for p in 0..w.len() {
        let item = w.item_at(p).unwrap();
        assert_eq!(w.position(item), Some(p));
    }
    assert_eq!(w.position(&4), None);
    assert_eq!(w.item_at(4), None);
    assert!(w.contains(&7));
    assert!(!w.has_items_before());
    assert!(w.has_items_after());
}

#[test]
fn window_direction_follows_the_total_order() {
    let w = PagingWindow::new([1u32, 3, 7], false, false);
    assert_eq!(w.direction(&1, &7), Direction::Forward);
    assert_eq!(w.direction(&7, &3), Direction::Reverse);
    assert_eq!(w.direction(&3, &3), Direction::None);
    // Outside the window the item order decides.
    assert_eq!(w.direction(&3, &100), Direction::Forward);
    assert_eq!(w.direction(&100, &0), Direction::Reverse);
}

#[test]
fn slice_provider_answers_neighbors() {
    let items = vec![2u32, 4, 8];
    assert_eq!(items.item_before(&4), Some(2));
    assert_eq!(items.item_after(&4), Some(8));
    assert_eq!(items.item_before(&2), None);
    assert_eq!(items.item_after(&8), None);
    assert_eq!(items.item_after(&5), None);
    assert_eq!(items.neighbor(&4, Direction::None), None);
    assert_eq!(items.neighbor(&4, Direction::Reverse), Some(2));
}

#[test]
fn windows_are_ordered_and_cover_the_viewport() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let n = rng.gen_range_u32(1, 200);
        let items = universe(n);
        let widths: Vec<f64> = (0..n).map(|_| rng.gen_f64(5.0, 120.0)).collect();
        let measure = MeasureFn(|i: &u32| Some(widths[*i as usize]));
        let spacing = rng.gen_f64(0.0, 8.0);
        let opts = PagingOptions::default().with_item_spacing(spacing);
        let focal = rng.gen_range_u32(0, n);
        let viewport = rng.gen_f64(0.0, 900.0);

        let w = PagingWindow::generate(focal, viewport, &items, &measure, &opts);

        assert!(w.contains(&focal), "focal item must be materialized");
        for pair in w.items().windows(2) {
            assert!(pair[0] < pair[1], "positions must follow the item order");
        }
        for (p, item) in w.iter().enumerate() {
            assert_eq!(w.position(item), Some(p));
        }
        // Windows are contiguous ranges of the universe.
        let first = *w.first().unwrap();
        let last = *w.last().unwrap();
        assert_eq!(w.len() as u32, last - first + 1);
        assert_eq!(w.has_items_before(), first > 0);
        assert_eq!(w.has_items_after(), last + 1 < n);

        let covered: f64 = w
            .iter()
            .filter(|item| **item != focal)
            .map(|item| widths[*item as usize] + spacing)
            .sum();
        assert!(
            covered >= viewport - 1e-9 || w.len() as u32 == n,
            "window must cover the viewport unless it holds every item"
        );
    }
}

#[test]
fn diff_reports_removed_and_added_positions() {
    let old = PagingWindow::new(0u32..=4, false, true);
    let new = PagingWindow::new(2u32..=6, true, true);
    let d = WindowDiff::new(&old, &new);
    assert_eq!(d.removed(), vec![0, 1]);
    assert_eq!(d.added(), vec![3, 4]);
    assert_eq!(d.anchor(), Some(&4));
    assert_eq!(d.removed_before_anchor(), vec![0, 1]);
    assert!(d.added_before_anchor().is_empty());
    assert_eq!(d.offset_correction(|_| 10.0, 0.0), Some(-20.0));
    assert!(!d.is_empty());
}

#[test]
fn diff_sliding_backward_adds_in_front_of_the_anchor() {
    let old = PagingWindow::new(2u32..=6, true, true);
    let new = PagingWindow::new(0u32..=4, false, true);
    let d = WindowDiff::new(&old, &new);
    assert_eq!(d.removed(), vec![3, 4]);
    assert_eq!(d.added(), vec![0, 1]);
    assert!(d.removed_before_anchor().is_empty());
    assert_eq!(d.added_before_anchor(), vec![0, 1]);
    assert_eq!(d.offset_correction(|_| 10.0, 2.0), Some(24.0));
}

#[test]
fn diff_of_disjoint_windows_has_no_correction() {
    let old = PagingWindow::new(0u32..=2, false, true);
    let new = PagingWindow::new(10u32..=12, true, true);
    let d = WindowDiff::new(&old, &new);
    assert_eq!(d.anchor(), None);
    assert_eq!(d.removed(), vec![0, 1, 2]);
    assert_eq!(d.added(), vec![0, 1, 2]);
    assert!(d.removed_before_anchor().is_empty());
    assert!(d.added_before_anchor().is_empty());
    assert_eq!(d.offset_correction(|_| 10.0, 0.0), None);
}

#[test]
fn diff_of_identical_windows_is_empty() {
    let a = PagingWindow::new([1u32, 2, 3], false, false);
    let b = PagingWindow::new([3u32, 2, 1], false, false);
    let d = WindowDiff::new(&a, &b);
    assert!(d.is_empty());
    assert_eq!(d.offset_correction(|_| 10.0, 0.0), Some(0.0));
}

#[test]
fn offset_correction_keeps_the_anchor_on_screen() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let n = rng.gen_range_u32(2, 120);
        let items = universe(n);
        let widths: Vec<f64> = (0..n).map(|_| rng.gen_f64(10.0, 90.0)).collect();
        let measure = MeasureFn(|i: &u32| Some(widths[*i as usize]));
        let opts = PagingOptions::default().with_item_spacing(rng.gen_f64(0.0, 6.0));
        let viewport = rng.gen_f64(50.0, 400.0);

        let a = rng.gen_range_u32(0, n);
        let b = rng.gen_range_u32(0, n);
        let old = PagingWindow::generate(a, viewport, &items, &measure, &opts);
        let new = PagingWindow::generate(b, viewport, &items, &measure, &opts);
        let old_layout = WindowLayout::new(&old, &measure, &opts);
        let new_layout = WindowLayout::new(&new, &measure, &opts);

        let diff = WindowDiff::new(&old, &new);
        let correction = diff.offset_correction(|i| opts.item_width(&measure, i), opts.spacing());
        let Some(correction) = correction else {
            assert!(diff.anchor().is_none());
            continue;
        };
        let anchor = diff.anchor().unwrap();
        let old_offset = rng.gen_f64(0.0, old_layout.content_width());
        let new_offset = old_offset + correction;

        let old_x = old_layout.frame(old.position(anchor).unwrap()).unwrap().x - old_offset;
        let new_x = new_layout.frame(new.position(anchor).unwrap()).unwrap().x - new_offset;
        assert!(
            (old_x - new_x).abs() < 1e-6,
            "anchor moved on screen: {old_x} -> {new_x}"
        );
    }
}

#[test]
fn layout_places_items_with_spacing() {
    let l = WindowLayout::from_widths([10.0, 20.0, 30.0], 5.0);
    assert_eq!(l.len(), 3);
    assert_eq!(l.frame(0), Some(ItemFrame { x: 0.0, width: 10.0 }));
    assert_eq!(l.frame(1), Some(ItemFrame { x: 15.0, width: 20.0 }));
    assert_eq!(l.frame(2), Some(ItemFrame { x: 40.0, width: 30.0 }));
    assert_eq!(l.content_width(), 70.0);
    assert_eq!(l.max_offset(30.0), 40.0);
    assert_eq!(l.max_offset(100.0), 0.0);

    assert_eq!(l.position_at(0.0), Some(0));
    assert_eq!(l.position_at(12.0), Some(0)); // spacing belongs to the previous item
    assert_eq!(l.position_at(15.0), Some(1));
    assert_eq!(l.position_at(500.0), Some(2));
    assert_eq!(WindowLayout::default().position_at(0.0), None);
}

#[test]
fn layout_offsets_follow_the_selected_scroll_position() {
    let l = WindowLayout::from_widths([10.0, 20.0, 30.0], 5.0);
    let at = |p, anchor| l.offset_for(p, anchor, 30.0).unwrap();

    assert_eq!(at(1, SelectedScrollPosition::Left), 15.0);
    assert_eq!(at(1, SelectedScrollPosition::Right), 5.0);
    assert_eq!(at(1, SelectedScrollPosition::Center), 10.0);
    assert_eq!(at(1, SelectedScrollPosition::PreferCenter), 10.0);

    // Centering the first item would scroll before the content; only `Center` allows that.
    assert_eq!(at(0, SelectedScrollPosition::Center), -10.0);
    assert_eq!(at(0, SelectedScrollPosition::PreferCenter), 0.0);
    assert_eq!(at(2, SelectedScrollPosition::PreferCenter), 40.0);
    assert_eq!(at(2, SelectedScrollPosition::Left), 40.0);

    assert_eq!(l.offset_for(3, SelectedScrollPosition::Left, 30.0), None);
}

#[test]
fn interpolation_uses_progress_magnitude() {
    assert_eq!(interpolate_offset(0.0, 100.0, 0.3), 30.0);
    assert_eq!(interpolate_offset(0.0, 100.0, -0.5), 50.0);
    assert_eq!(interpolate_offset(10.0, -10.0, 1.5), -20.0);
}

#[test]
fn selecting_the_current_item_is_a_no_op() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();
    let event = PagingEvent::Select {
        item: 3,
        direction: Direction::None,
        animated: true,
    };
    assert!(!m.fire(event, &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(3));
    assert!(log.items.is_empty());
    assert!(log.states.is_empty());
}

#[test]
fn select_moves_straight_to_the_new_item() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();
    let event = PagingEvent::Select {
        item: 7,
        direction: Direction::Forward,
        animated: true,
    };
    assert!(m.fire(event.clone(), &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(7));
    assert_eq!(log.items, vec![(7, Direction::Forward, true)]);
    assert_eq!(log.states.len(), 1);
    let (old, new, ev, kind) = &log.states[0];
    assert_eq!(old, &PagingState::selected(3));
    assert_eq!(new, &PagingState::selected(7));
    assert_eq!(ev, &event);
    assert_eq!(*kind, InvalidationKind::Reload);
}

#[test]
fn gesture_finishes_on_the_neighbor() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();

    assert!(m.fire(PagingEvent::Scroll { progress: 0.3 }, &items, &mut log));
    assert_eq!(m.state(), &scrolling(3, 4, 0.3));
    assert_eq!(m.state().current_item(), &4);
    assert_eq!(m.state().visual_item(), &3);

    assert!(m.fire(PagingEvent::Scroll { progress: 0.9 }, &items, &mut log));
    assert_eq!(m.state(), &scrolling(3, 4, 0.9));
    assert_eq!(m.state().visual_item(), &4);

    assert!(m.fire(PagingEvent::FinishScrolling, &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(4));

    assert_eq!(log.items, vec![(4, Direction::Forward, true)]);
    assert_eq!(
        log.kinds(),
        vec![
            InvalidationKind::TransitionStart,
            InvalidationKind::Offset,
            InvalidationKind::Reload
        ]
    );
}

#[test]
fn cancel_returns_to_the_origin() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();

    m.fire(PagingEvent::Scroll { progress: 0.4 }, &items, &mut log);
    assert!(m.fire(PagingEvent::CancelScrolling, &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(3));
    assert_eq!(
        log.items,
        vec![(4, Direction::Forward, true), (3, Direction::Reverse, true)]
    );
    assert_eq!(
        log.kinds(),
        vec![InvalidationKind::TransitionStart, InvalidationKind::Reload]
    );
}

#[test]
fn scroll_without_a_neighbor_is_a_no_op() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(9u32);
    let mut log = Log::default();

    assert!(!m.fire(PagingEvent::Scroll { progress: 0.2 }, &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(9));
    assert!(log.states.is_empty());

    assert!(m.fire(PagingEvent::Scroll { progress: -0.2 }, &items, &mut log));
    assert_eq!(m.state(), &scrolling(9, 8, -0.2));
    assert_eq!(log.items, vec![(8, Direction::Reverse, true)]);
}

#[test]
fn zero_and_nan_progress_do_not_start_a_transition() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    assert!(!m.fire(PagingEvent::Scroll { progress: 0.0 }, &items, &mut ()));
    assert!(!m.fire(PagingEvent::Scroll { progress: f64::NAN }, &items, &mut ()));
    assert_eq!(m.state(), &PagingState::selected(3));
}

#[test]
fn dragging_back_through_zero_keeps_the_transition() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();

    m.fire(PagingEvent::Scroll { progress: 0.3 }, &items, &mut log);
    assert!(m.fire(PagingEvent::Scroll { progress: 0.0 }, &items, &mut log));
    assert_eq!(m.state(), &scrolling(3, 4, 0.0));
    assert!(m.fire(PagingEvent::Scroll { progress: -0.1 }, &items, &mut log));
    assert_eq!(m.state(), &scrolling(3, 4, -0.1));
    assert_eq!(m.state().visual_item(), &3);
    assert!(m.fire(PagingEvent::Scroll { progress: 0.3 }, &items, &mut log));
    assert!(m.fire(PagingEvent::FinishScrolling, &items, &mut log));

    assert_eq!(m.state(), &PagingState::selected(4));
    assert_eq!(log.items, vec![(4, Direction::Forward, true)]);
    assert_eq!(
        log.kinds(),
        vec![
            InvalidationKind::TransitionStart,
            InvalidationKind::Offset,
            InvalidationKind::Offset,
            InvalidationKind::Offset,
            InvalidationKind::Reload,
        ]
    );
}

#[test]
fn finish_and_cancel_are_no_ops_at_rest() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();
    assert!(!m.fire(PagingEvent::FinishScrolling, &items, &mut log));
    assert!(!m.fire(PagingEvent::CancelScrolling, &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(3));
    assert!(log.states.is_empty());
}

#[test]
fn select_while_scrolling_finishes_first() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();

    m.fire(PagingEvent::Scroll { progress: 0.3 }, &items, &mut log);
    let select = PagingEvent::Select {
        item: 7,
        direction: Direction::Forward,
        animated: true,
    };
    assert!(m.fire(select.clone(), &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(7));

    assert_eq!(log.states.len(), 3);
    assert_eq!(log.states[1].1, PagingState::selected(4));
    assert_eq!(log.states[1].2, PagingEvent::FinishScrolling);
    assert_eq!(log.states[2].2, select);
    assert_eq!(
        log.items,
        vec![(4, Direction::Forward, true), (7, Direction::Forward, true)]
    );
}

#[test]
fn selecting_the_transition_target_only_finishes() {
    let items = universe(10);
    let mut m = PagingStateMachine::new(3u32);
    let mut log = Log::default();

    m.fire(PagingEvent::Scroll { progress: 0.3 }, &items, &mut log);
    let select = PagingEvent::Select {
        item: 4,
        direction: Direction::Forward,
        animated: false,
    };
    assert!(m.fire(select, &items, &mut log));
    assert_eq!(m.state(), &PagingState::selected(4));
    assert_eq!(log.items.len(), 1);
    assert_eq!(log.states.len(), 2);
}

#[test]
fn visual_item_ties_resolve_to_the_origin() {
    assert_eq!(scrolling(1, 2, 0.5).visual_item(), &1);
    assert_eq!(scrolling(1, 2, 0.51).visual_item(), &2);
    assert_eq!(scrolling(1, 0, -0.5).visual_item(), &1);
    assert_eq!(scrolling(1, 0, -0.6).visual_item(), &0);
    assert_eq!(scrolling(1, 2, 0.1).current_item(), &2);
    assert_eq!(scrolling(1, 2, 0.1).origin_item(), &1);
    assert_eq!(scrolling(1, 2, 0.1).upcoming_item(), Some(&2));
    assert_eq!(PagingState::selected(1).progress(), 0.0);
    assert_eq!(PagingState::selected(1).upcoming_item(), None);
}

#[test]
fn random_event_sequences_are_deterministic_and_well_formed() {
    let items = universe(12);
    let run = |seed: u64| {
        let mut rng = Lcg::new(seed);
        let mut m = PagingStateMachine::new(6u32);
        for _ in 0..500 {
            let before = m.state().clone();
            let event = match rng.gen_range_u32(0, 4) {
                0 => PagingEvent::Select {
                    item: rng.gen_range_u32(0, 12),
                    direction: Direction::None,
                    animated: true,
                },
                1 => PagingEvent::Scroll {
                    progress: rng.gen_f64(-1.2, 1.2),
                },
                2 => PagingEvent::FinishScrolling,
                _ => PagingEvent::CancelScrolling,
            };
            let settles = matches!(
                event,
                PagingEvent::FinishScrolling
                    | PagingEvent::CancelScrolling
                    | PagingEvent::Select { .. }
            );
            let changed = m.fire(event, &items, &mut ());
            if !changed {
                assert_eq!(m.state(), &before);
            }
            if settles {
                assert!(m.state().is_selected());
            }
            if let PagingState::Scrolling { from, to, .. } = m.state() {
                assert!(from.abs_diff(*to) == 1, "transitions only reach direct neighbors");
            }
        }
        m.into_state()
    };
    assert_eq!(run(7), run(7));
    assert_eq!(run(99), run(99));
}
