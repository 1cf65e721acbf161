use crate::*;

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use chronoscroll::{
    Easing, Entry, EntryId, Order, Phase, RevealState, ScrollGeometry, TimelineOptions, YearMonth,
    parse_month,
};

fn ym(year: i32, month: u8) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn entry(id: &str, start: &str, end: Option<&str>) -> Entry {
    Entry::new(
        id,
        parse_month(start).unwrap(),
        end.map(|e| parse_month(e).unwrap()),
    )
}

// Range is 2019-07..2024-07 (60 months) for every fixture below.
fn three_entries() -> Vec<Entry> {
    vec![
        entry("a", "2020-01", Some("2021-01")),
        entry("b", "2021-06", Some("2022-06")),
        entry("c", "2023-01", None),
    ]
}

fn geometry_at(raw: f64) -> ScrollGeometry {
    ScrollGeometry::new(raw * 2000.0, 800.0, 400.0, 2800.0)
}

fn controller(order: Order) -> Controller {
    Controller::new(
        three_entries(),
        ym(2024, 1),
        ControllerOptions {
            timeline: TimelineOptions::default()
                .with_order(order)
                .with_easing(Easing::Linear),
            ..ControllerOptions::default()
        },
    )
}

#[test]
fn guard_holds_for_its_window() {
    let mut g = CenterGuard::default();
    assert_eq!(g.hold_ms, 120);
    assert!(!g.is_held(0));
    assert!(g.try_acquire(1_000));
    assert!(g.is_held(1_000));
    assert!(g.is_held(1_119));
    assert!(!g.try_acquire(1_100));
    assert!(!g.is_held(1_120));

    assert!(!g.expire(1_050));
    assert!(g.expire(1_120));
    assert!(!g.expire(1_120));

    assert!(g.try_acquire(2_000));
    g.release();
    assert!(!g.is_held(2_001));
}

#[test]
fn controller_centers_first_reveal_and_guards_the_follow_up() {
    let mut c = controller(Order::Chronological);

    // 2019-07 + 12 = 2020-07: reveals "a".
    let f = c.on_scroll(geometry_at(0.2), 0);
    assert_eq!(f.center_on, Some(EntryId::from("a")));
    assert!(c.is_centering(0));

    // The centering jump scrolls again; nothing new is revealed, nothing re-centers.
    let f = c.on_scroll(geometry_at(0.21), 16);
    assert_eq!(f.center_on, None);
    assert!(f.update.effects.is_empty());

    // 2019-07 + 24 = 2021-07: reveals "b" while the guard is still held.
    let f = c.on_scroll(geometry_at(0.4), 50);
    assert_eq!(f.update.effects.len(), 1);
    assert_eq!(f.center_on, None);
    let b = EntryId::from("b");
    assert!(c.timeline().state_of(&b).unwrap().is_revealed());

    // Once the hold elapses the next first reveal is centered again.
    assert!(c.tick(200));
    let f = c.on_scroll(geometry_at(0.8), 200);
    assert_eq!(f.center_on, Some(EntryId::from("c")));

    // A dropped request is never retried.
    let f = c.on_scroll(geometry_at(0.8), 1_000);
    assert_eq!(f.center_on, None);
}

#[test]
fn controller_centers_at_most_one_entry_per_frame() {
    let mut c = controller(Order::Chronological);
    let f = c.on_scroll(geometry_at(1.0), 0);
    assert_eq!(f.update.effects.len(), 3);
    assert_eq!(f.center_on, Some(EntryId::from("a")));
    assert!(c.timeline().iter().all(|(_, s)| s.is_revealed()));
}

#[test]
fn controller_order_change_recomputes_without_a_scroll() {
    let mut c = controller(Order::Chronological);
    c.on_scroll(geometry_at(0.25), 0);
    assert_eq!(c.rail().label, "Oct 2020");

    let f = c.toggle_order(500);
    assert!(f.update.reordered);
    assert_eq!(c.timeline().order(), Order::Reverse);
    // Same geometry, reverse direction: 2024-07 - 15 = 2023-04.
    assert_eq!(f.rail.label, "Apr 2023");
    assert_eq!(f.rail.fill, 0.75);
    // "a" stays revealed; "c" is not reached walking backwards from 2023-04.
    let a = EntryId::from("a");
    let cc = EntryId::from("c");
    assert_eq!(
        c.timeline().state_of(&a),
        Some(RevealState::Revealed(Phase::Past))
    );
    assert_eq!(c.timeline().state_of(&cc), Some(RevealState::Upcoming));

    let f = c.set_order(Order::Reverse, 600);
    assert!(!f.update.reordered);
}

#[test]
fn controller_keeps_reveals_across_reload() {
    let mut c = controller(Order::Chronological);
    c.on_scroll(geometry_at(0.2), 0);

    let mut next = three_entries();
    next.retain(|e| e.id.as_str() != "b");
    let f = c.set_entries(next, 10);
    assert!(f.update.reordered);
    assert_eq!(c.timeline().len(), 2);
    assert!(c.timeline().is_revealed(&EntryId::from("a")));
    assert_eq!(f.center_on, None);
}

#[test]
fn rail_fill_follows_order() {
    let mut asc = controller(Order::Chronological);
    let f = asc.on_scroll(geometry_at(0.25), 0);
    assert_eq!(f.rail.fill, 0.25);
    assert_eq!(f.rail.fill_percent(), "25.0%");
    assert_eq!(f.rail.label, "Oct 2020");

    let mut desc = controller(Order::Reverse);
    let f = desc.on_resize(geometry_at(0.25), 0);
    assert_eq!(f.rail.fill, 0.75);
    assert_eq!(f.rail.fill_percent(), "75.0%");
    assert_eq!(f.rail.label, "Apr 2023");
}

#[test]
fn class_lists_reflect_state() {
    assert_eq!(class_list(RevealState::Upcoming), &["entry"]);
    assert_eq!(
        class_list(RevealState::Revealed(Phase::Active)),
        &["entry", "revealed", "active"]
    );
    assert_eq!(
        class_list(RevealState::Revealed(Phase::Past)),
        &["entry", "revealed", "past"]
    );
}

#[test]
fn entry_card_text() {
    let mut e = entry("acme", "2020-01-15", None)
        .with_title("Engineer")
        .with_company("Acme");
    e.location = "Berlin".into();
    e.tags = vec!["rust".into()];
    let card = EntryCard::new(&e, RevealState::Revealed(Phase::Active));
    assert_eq!(card.meta, "Jan 2020 — Present · Berlin");
    assert_eq!(card.heading, "Engineer · Acme");
    assert_eq!(card.classes, vec!["entry", "revealed", "active"]);
    assert_eq!(card.tags, vec!["rust".to_string()]);

    let bare = entry("x", "2018-06", Some("2018-09")).with_title("Intern");
    let card = EntryCard::new(&bare, RevealState::Upcoming);
    assert_eq!(card.meta, "Jun 2018 — Sep 2018");
    assert_eq!(card.heading, "Intern");
}

#[test]
fn cards_follow_display_order() {
    let c = controller(Order::Reverse);
    let ids: Vec<_> = cards(c.timeline())
        .into_iter()
        .map(|card| card.id.to_string())
        .collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[cfg(feature = "load")]
mod loading {
    use super::*;

    use std::sync::{Arc, Mutex};

    const EXPERIENCE: &str = r#"[
        {"id": "acme", "title": "Engineer", "company": "Acme", "location": "Berlin",
         "start": "2020-01", "end": "2021-06", "summary": "Built things.", "tags": ["rust"]},
        {"title": "Undated"},
        {"id": "now", "title": "Lead", "start": "2022-03-01", "end": null}
    ]"#;

    const SKILLS: &str = r#"[{"title": "Languages", "items": ["Rust", "TypeScript"]}]"#;

    #[test]
    fn documents_parse_and_filter() {
        let docs = Documents::from_json(EXPERIENCE, SKILLS).unwrap();
        assert_eq!(docs.entries.len(), 2);
        assert_eq!(docs.entries[0].id.as_str(), "acme");
        assert_eq!(docs.entries[1].start, ym(2022, 3));
        assert!(docs.entries[1].is_ongoing());
        assert_eq!(
            docs.skills,
            vec![SkillGroup {
                title: "Languages".into(),
                items: vec!["Rust".into(), "TypeScript".into()],
            }]
        );
    }

    #[test]
    fn null_documents_are_empty() {
        let docs = Documents::from_json("null", "null").unwrap();
        assert!(docs.entries.is_empty());
        assert!(docs.skills.is_empty());
    }

    #[test]
    fn a_malformed_record_never_costs_its_siblings() {
        for bad in [
            "null",
            r#"{"start": "2020-01", "tags": null}"#,
            r#"{"start": 2021}"#,
            r#"{"id": 7, "start": "2020-01"}"#,
            r#"{"title": null, "start": "2020-01"}"#,
            r#"{"start": "2020-01", "end": 2021}"#,
        ] {
            let doc = format!(r#"[{bad}, {{"id": "keep", "start": "2022-03"}}]"#);
            let docs = Documents::from_json(&doc, "null").unwrap_or_else(|e| panic!("{bad}: {e}"));
            assert!(
                docs.entries.iter().any(|e| e.id.as_str() == "keep"),
                "{bad}"
            );
        }
    }

    #[test]
    fn malformed_fields_read_as_missing() {
        const DOC: &str = r#"[
            null,
            {"id": 7, "title": "Numeric id", "start": "2019-01", "tags": null},
            {"id": "bad-start", "start": 2021},
            {"title": null, "start": "2020-05", "end": 2021, "tags": ["rust", 3]},
            {"id": "keep", "title": "Valid", "start": "2022-03"}
        ]"#;
        let docs = Documents::from_json(DOC, SKILLS).unwrap();
        let ids: Vec<_> = docs.entries.iter().map(|e| e.id.as_str()).collect();
        // Dropped records still count toward the load index.
        assert_eq!(ids, vec!["7", "3", "keep"]);

        assert_eq!(docs.entries[0].title, "Numeric id");
        assert!(docs.entries[0].tags.is_empty());
        assert_eq!(docs.entries[1].title, "");
        assert!(docs.entries[1].is_ongoing());
        assert_eq!(docs.entries[1].tags, vec!["rust".to_string()]);
        assert_eq!(docs.entries[2].start, ym(2022, 3));
    }

    #[test]
    fn invalid_json_names_the_document() {
        let err = Documents::from_json(EXPERIENCE, "{not json").unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert_eq!(err.path(), SKILLS_JSON);
        assert!(err.to_string().starts_with("Invalid JSON in data/skills.json"));
    }

    #[test]
    fn error_card_lists_both_documents() {
        let err = LoadError::Fetch {
            path: EXPERIENCE_JSON.into(),
            status: 404,
        };
        let card = err.error_card();
        assert_eq!(card.title, ErrorCard::TITLE);
        assert_eq!(card.message, "Failed to load data/experience.json: 404");
        assert_eq!(
            card.hint,
            "Check that /data/experience.json and /data/skills.json exist, are valid JSON, and paths match."
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn both_documents_are_requested_before_either_completes() {
        let log = Arc::new(Mutex::new(Vec::<String>::new()));
        let fetch = {
            let log = Arc::clone(&log);
            move |path: String| {
                let log = Arc::clone(&log);
                async move {
                    log.lock().unwrap().push(format!("start {path}"));
                    tokio::task::yield_now().await;
                    log.lock().unwrap().push(format!("end {path}"));
                    Ok::<_, FetchError>(if path == EXPERIENCE_JSON {
                        EXPERIENCE.to_string()
                    } else {
                        SKILLS.to_string()
                    })
                }
            }
        };

        let docs = load_documents(fetch).await.unwrap();
        assert_eq!(docs.entries.len(), 2);

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 4);
        assert!(log[0].starts_with("start"));
        assert!(log[1].starts_with("start"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn any_fetch_failure_aborts_startup() {
        let fetch = |path: String| async move {
            if path == SKILLS_JSON {
                Err(FetchError::Status(500))
            } else {
                Ok(EXPERIENCE.to_string())
            }
        };

        match boot(fetch, ym(2024, 1), ControllerOptions::default()).await {
            Boot::Failed { error, card } => {
                assert!(matches!(error, LoadError::Fetch { status: 500, .. }));
                assert_eq!(card.message, "Failed to load data/skills.json: 500");
            }
            Boot::Ready { .. } => panic!("expected startup to fail"),
        }

        let fetch = |_path: String| async move {
            Err::<String, _>(FetchError::Transport("connection refused".into()))
        };
        let err = load_documents(fetch).await.unwrap_err();
        assert_eq!(err.path(), EXPERIENCE_JSON);
        assert_eq!(
            err.to_string(),
            "Failed to load data/experience.json: connection refused"
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn boot_builds_a_ready_controller() {
        let fetch = |path: String| async move {
            Ok::<_, FetchError>(if path == EXPERIENCE_JSON {
                EXPERIENCE.to_string()
            } else {
                SKILLS.to_string()
            })
        };

        let Boot::Ready {
            mut controller,
            skills,
        } = boot(fetch, ym(2024, 1), ControllerOptions::default()).await
        else {
            panic!("expected startup to succeed");
        };
        assert_eq!(skills.len(), 1);
        assert_eq!(controller.timeline().len(), 2);
        assert_eq!(controller.timeline().order(), Order::Reverse);

        // Nothing is evaluated until the first geometry arrives.
        assert!(controller.timeline().geometry().is_none());
        assert!(
            controller
                .timeline()
                .iter()
                .all(|(_, s)| s == RevealState::Upcoming)
        );
        assert_eq!(controller.rail().fill, 1.0);

        // Reverse order: the bottom of the page is the oldest edge, everything is revealed.
        let f = controller.on_scroll(geometry_at(1.0), 0);
        assert_eq!(f.center_on, Some(EntryId::from("now")));
        assert!(controller.timeline().iter().all(|(_, s)| s.is_revealed()));
    }
}
