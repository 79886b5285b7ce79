use imfridge_calendar::{
    RenderOptions, ViewWindow, assign_rows, build, classify, generate_events,
};
use imfridge_shared::{PerishableItem, Zone};
use time::macros::date;

fn pantry() -> Vec<PerishableItem> {
    vec![
        PerishableItem::new("cheese", "Cheddar").best_by(date!(2024 - 06 - 20)),
        PerishableItem::new("milk", "Milk").best_by(date!(2024 - 06 - 10)),
        PerishableItem::new("jam", "Jam"),
        PerishableItem::new("chicken", "Frozen Chicken")
            .best_by(date!(2024 - 06 - 02))
            .frozen(date!(2024 - 06 - 15)),
        PerishableItem::new("bread", "Bread").best_by(date!(2024 - 06 - 08)),
        PerishableItem::new("cream", "Cream").best_by(date!(2024 - 06 - 10)),
    ]
}

#[test]
fn test_milk_lifecycle_on_terminal_day() {
    let milk = PerishableItem::new("milk", "Milk").best_by(date!(2024 - 06 - 10));

    let events = generate_events(&milk);

    let expected = [
        (date!(2024 - 06 - 06), Zone::Soon),
        (date!(2024 - 06 - 07), Zone::Soon),
        (date!(2024 - 06 - 08), Zone::Freeze),
        (date!(2024 - 06 - 09), Zone::Freeze),
        (date!(2024 - 06 - 10), Zone::Expired),
    ];

    assert_eq!(events.len(), expected.len());
    for (event, (date, zone)) in events.iter().zip(expected) {
        assert_eq!(event.date, date);
        assert_eq!(event.zone, zone);
        assert_eq!(event.label, "Milk");
        assert_eq!(event.item_id, "milk");
    }
}

#[test]
fn test_frozen_chicken_single_thaw_event() {
    let chicken = PerishableItem::new("chicken", "Frozen Chicken").frozen(date!(2024 - 06 - 15));

    let events = generate_events(&chicken);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].date, date!(2024 - 06 - 15));
    assert_eq!(events[0].zone, Zone::Thaw);
}

#[test]
fn test_every_best_by_item_gets_five_tiles() {
    for day in 1..=28u8 {
        let best_by = time::Date::from_calendar_date(2024, time::Month::February, day).unwrap();
        let item = PerishableItem::new("x", "X").best_by(best_by);

        let events = generate_events(&item);

        assert_eq!(events.len(), 5);
        assert_eq!(
            events.iter().map(|e| e.zone).collect::<Vec<_>>(),
            vec![
                Zone::Soon,
                Zone::Soon,
                Zone::Freeze,
                Zone::Freeze,
                Zone::Expired
            ]
        );
        assert_eq!(events[4].date, best_by);
        assert!(events.windows(2).all(|w| w[0].date < w[1].date));
    }
}

#[test]
fn test_rows_are_contiguous_and_sorted() {
    let items = pantry();
    let today = date!(2024 - 06 - 10);

    let rows = assign_rows(&items, today);

    // bread (-2), milk (0), cream (0, after milk), chicken (5), cheese (10)
    assert_eq!(rows.len(), 5);
    assert_eq!(rows.row_of(&items, "bread"), Some(0));
    assert_eq!(rows.row_of(&items, "milk"), Some(1));
    assert_eq!(rows.row_of(&items, "cream"), Some(2));
    assert_eq!(rows.row_of(&items, "chicken"), Some(3));
    assert_eq!(rows.row_of(&items, "cheese"), Some(4));
    assert_eq!(rows.row_of(&items, "jam"), None);

    let mut assigned = (0..items.len())
        .filter_map(|position| rows.row_at(position))
        .collect::<Vec<_>>();
    assigned.sort_unstable();
    assert_eq!(assigned, (0..5).collect::<Vec<_>>());
}

#[test]
fn test_row_index_is_shared_across_views() {
    let items = pantry();
    let today = date!(2024 - 06 - 10);
    let options = RenderOptions::default();

    let month = build(&items, ViewWindow::month(today), today, &options);
    let week = build(&items, ViewWindow::week(today), today, &options);
    let day = build(&items, ViewWindow::day(today), today, &options);

    for model in [&week, &day] {
        for positioned in &model.events {
            let in_month = month
                .events
                .iter()
                .find(|m| m.event.item_id == positioned.event.item_id)
                .unwrap();
            assert_eq!(in_month.event.row_index, positioned.event.row_index);
        }
    }
}

#[test]
fn test_every_event_of_an_item_shares_its_row() {
    let items = pantry();
    let today = date!(2024 - 06 - 10);

    let model = build(&items, ViewWindow::month(today), today, &RenderOptions::default());

    // 4 best-by items with 5 tiles + 1 thaw tile
    assert_eq!(model.events.len(), 21);
    for positioned in &model.events {
        assert!(
            model
                .events
                .iter()
                .filter(|other| other.event.item_id == positioned.event.item_id)
                .all(|other| other.event.row_index == positioned.event.row_index)
        );
    }
}

#[test]
fn test_month_day_union_keeps_every_zone() {
    let today = date!(2024 - 06 - 01);
    let items = vec![
        PerishableItem::new("milk", "Milk").best_by(date!(2024 - 06 - 10)),
        PerishableItem::new("cream", "Cream").best_by(date!(2024 - 06 - 08)),
        PerishableItem::new("fish", "Fish").frozen(date!(2024 - 06 - 08)),
    ];

    let model = build(&items, ViewWindow::month(today), today, &RenderOptions::default());

    let zones = model.zones_on(date!(2024 - 06 - 08)).unwrap();
    assert_eq!(
        zones.iter().copied().collect::<Vec<_>>(),
        vec![Zone::Freeze, Zone::Expired, Zone::Thaw]
    );

    let zones = model.zones_on(date!(2024 - 06 - 06)).unwrap();
    assert_eq!(
        zones.iter().copied().collect::<Vec<_>>(),
        vec![Zone::Soon, Zone::Freeze]
    );

    assert!(model.zones_on(date!(2024 - 06 - 20)).is_none());
}

#[test]
fn test_build_is_idempotent() {
    let items = pantry();
    let today = date!(2024 - 06 - 10);
    let options = RenderOptions::default();

    for view in [
        ViewWindow::month(today),
        ViewWindow::week(today),
        ViewWindow::day(today),
    ] {
        assert_eq!(
            build(&items, view, today, &options),
            build(&items, view, today, &options)
        );
    }
}

#[test]
fn test_badges_use_reminder_window() {
    let items = pantry();
    let today = date!(2024 - 06 - 10);
    let options = RenderOptions {
        reminder_window_days: 7,
        ..Default::default()
    };

    let model = build(&items, ViewWindow::month(today), today, &options);

    let zones = model
        .badges
        .iter()
        .map(|badge| (badge.item_id.as_str(), badge.zone))
        .collect::<Vec<_>>();

    assert_eq!(
        zones,
        vec![
            ("bread", Zone::Expired),
            ("milk", Zone::Soon),
            ("cream", Zone::Soon),
            ("chicken", Zone::Soon),
            ("cheese", Zone::Fresh),
        ]
    );
}

#[test]
fn test_classify_examples() {
    let today = date!(2024 - 06 - 10);

    assert_eq!(classify(date!(2024 - 06 - 12), today, 7), Zone::Soon);
    assert_eq!(classify(date!(2024 - 06 - 12), today, 1), Zone::Fresh);
}
