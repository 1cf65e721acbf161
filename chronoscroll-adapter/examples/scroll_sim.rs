// Example: drive a Controller with synthetic scroll events and a fake clock.
use chronoscroll::{Entry, ScrollGeometry, YearMonth, parse_month};
use chronoscroll_adapter::{Controller, ControllerOptions, cards};

fn month(s: &str) -> YearMonth {
    parse_month(s).unwrap()
}

fn main() {
    let entries = vec![
        Entry::new("a", month("2018-01"), Some(month("2020-06"))).with_title("Analyst"),
        Entry::new("b", month("2020-07"), Some(month("2023-01"))).with_title("Engineer"),
        Entry::new("c", month("2023-02"), None).with_title("Lead"),
    ];
    let mut c = Controller::new(entries, month("2024-01"), ControllerOptions::default());

    // Reverse order by default: scrolling down walks back in time.
    let mut now_ms = 0;
    for step in 0..=20 {
        c.tick(now_ms);
        let geometry = ScrollGeometry::new(step as f64 * 100.0, 800.0, 0.0, 2800.0);
        let frame = c.on_scroll(geometry, now_ms);
        if let Some(id) = &frame.center_on {
            println!("t={now_ms}ms center_on={id}");
        }
        println!(
            "t={now_ms}ms rail={} fill={}",
            frame.rail.label,
            frame.rail.fill_percent()
        );
        now_ms += 16;
    }

    for card in cards(c.timeline()) {
        println!("{} [{}] {}", card.heading, card.classes.join(" "), card.meta);
    }
}
