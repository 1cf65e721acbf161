// Example: sweep a page from top to bottom and print what the timeline reveals.
use chronoscroll::{
    Effect, Entry, Order, ScrollGeometry, Timeline, TimelineOptions, YearMonth, parse_month,
};

fn month(s: &str) -> YearMonth {
    parse_month(s).unwrap()
}

fn main() {
    let entries = vec![
        Entry::new("uni", month("2015-09"), Some(month("2019-06"))).with_title("Student"),
        Entry::new("acme", month("2019-08"), Some(month("2022-02")))
            .with_title("Engineer")
            .with_company("Acme"),
        Entry::new("globex", month("2022-03"), None)
            .with_title("Lead")
            .with_company("Globex"),
    ];
    let options = TimelineOptions::default().with_order(Order::Chronological);
    let mut t = Timeline::new(entries, month("2024-01"), options);
    println!("range={} .. {}", t.range().min(), t.range().max());

    for step in 0..=10 {
        let offset = step as f64 * 300.0;
        let update = t.on_scroll(ScrollGeometry::new(offset, 800.0, 0.0, 3800.0));
        for Effect::CenterOn(id) in &update.effects {
            println!("  center_on={id}");
        }
        println!(
            "offset={offset:>6} progress={:.3} cursor={} current={:?}",
            update.scroll.eased_progress,
            update.scroll.month(),
            update.current.as_ref().map(|id| id.as_str()),
        );
    }

    let update = t.toggle_order();
    println!("toggled: order={:?} cursor={}", t.order(), update.scroll.month());
    for (entry, state) in t.iter() {
        println!("  {} {:?}", entry.id, state);
    }
}
