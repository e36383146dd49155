use pagemenu::{ContentProvider, Direction, InvalidationKind, ItemMeasure, NeighborProvider};
use pagemenu::{PagingOptions, SelectedScrollPosition};
use pagemenu_adapter::{Controller, PagingHost, SwipeDirection};

/// A pretend UI: an unbounded run of calendar days, labels printed instead of drawn.
struct DayStrip;

impl NeighborProvider<i64> for DayStrip {
    fn item_before(&self, day: &i64) -> Option<i64> {
        Some(day - 1)
    }

    fn item_after(&self, day: &i64) -> Option<i64> {
        Some(day + 1)
    }
}

impl ItemMeasure<i64> for DayStrip {
    fn measured_width(&self, day: &i64) -> Option<f64> {
        // Weekends get a wider tab.
        Some(if day.rem_euclid(7) >= 5 { 96.0 } else { 64.0 })
    }
}

impl ContentProvider<i64> for DayStrip {
    type Content = String;

    fn content_for(&mut self, day: &i64) -> String {
        format!("agenda for day {day}")
    }
}

impl PagingHost<i64> for DayStrip {
    fn navigate(&mut self, day: &i64, content: String, direction: Direction, animated: bool) {
        println!("navigate -> {day} ({direction:?}, animated={animated}): {content}");
    }

    fn invalidate_layout(&mut self, kind: InvalidationKind) {
        println!("invalidate {kind:?}");
    }

    fn highlight(&mut self, day: &i64, _animated: bool) {
        println!("highlight {day}");
    }

    fn set_content_offset(&mut self, offset: f64, animated: bool) {
        println!("menu offset {offset:.1} (animated={animated})");
    }
}

fn main() {
    // Example: the adapter flow for a tab strip synchronized with a content pager.
    //
    // An adapter would:
    // - report the menu viewport width on layout
    // - forward taps as `select`, and the pager's swipe progress as `scroll`/`finish_scrolling`
    // - apply the host calls to the real widgets
    let options = PagingOptions::new()
        .with_item_spacing(4.0)
        .with_selected_scroll_position(SelectedScrollPosition::PreferCenter);
    let mut c = Controller::new(DayStrip, options);
    c.set_viewport_width(360.0);

    c.select(0, false);
    println!("window: {:?}", c.window().items());

    // The user drags the pager forward and releases past the halfway point.
    for progress in [0.2, 0.45, 0.7] {
        c.scroll(progress);
        println!("visual item: {:?}", c.visual_item());
    }
    c.finish_scrolling();

    // A swipe over the menu itself, then a tap on a visible tab.
    c.swipe(SwipeDirection::Right);
    if let Some(&last) = c.window().last() {
        c.select(last, true);
    }
    println!(
        "settled on {:?}, window {:?}",
        c.current_item(),
        c.window().items()
    );
}
