use pagemenu::{
    MeasureFn, PagingEvent, PagingOptions, PagingStateMachine, PagingWindow, WindowDiff,
    WindowLayout,
};

fn main() {
    // Example: a tab strip over 1000 numbered pages, each tab 80px wide, in a 320px viewport.
    let pages: Vec<u32> = (0..1000).collect();
    let measure = MeasureFn(|_: &u32| Some(80.0));
    let opts = PagingOptions::default().with_item_spacing(8.0);

    let window = PagingWindow::generate(500, 320.0, &pages, &measure, &opts);
    let layout = WindowLayout::new(&window, &measure, &opts);
    println!(
        "window around 500: {:?} (content width {})",
        window.items(),
        layout.content_width()
    );

    // Swipe the content pager forward and let it settle.
    let mut machine = PagingStateMachine::new(500u32);
    machine.fire(PagingEvent::Scroll { progress: 0.4 }, &pages, &mut ());
    println!("mid-swipe: {:?}", machine.state());
    machine.fire(PagingEvent::FinishScrolling, &pages, &mut ());
    let current = *machine.state().current_item();

    // Slide the window and keep the menu visually still.
    let next = PagingWindow::generate(current, 320.0, &pages, &measure, &opts);
    let diff = WindowDiff::new(&window, &next);
    let correction = diff.offset_correction(|item| opts.item_width(&measure, item), opts.spacing());
    println!(
        "settled on {current}: removed {:?}, added {:?}, offset correction {correction:?}",
        diff.removed(),
        diff.added()
    );
}
