use imfridge_shared::{PerishableItem, Zone, days_between};
use serde::Serialize;
use time::Date;

use crate::assign_rows;

/// Point-in-time freshness of a terminal date, used for list badges.
///
/// Unlike the calendar tiles this honours the user's reminder window.
pub fn classify(terminal_date: Date, today: Date, reminder_window_days: u32) -> Zone {
    let days_remaining = days_between(today, terminal_date);

    if days_remaining < 0 {
        Zone::Expired
    } else if days_remaining <= i64::from(reminder_window_days) {
        Zone::Soon
    } else {
        Zone::Fresh
    }
}

/// Badge shown next to an item on list screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStatus {
    pub item_id: String,
    pub label: String,
    pub terminal_date: Date,
    pub days_remaining: i64,
    pub zone: Zone,
}

pub fn item_status(
    item: &PerishableItem,
    today: Date,
    reminder_window_days: u32,
) -> Option<ItemStatus> {
    let terminal_date = item.effective_terminal_date()?;

    Some(ItemStatus {
        item_id: item.id.to_owned(),
        label: item.name.to_owned(),
        terminal_date,
        days_remaining: days_between(today, terminal_date),
        zone: classify(terminal_date, today, reminder_window_days),
    })
}

/// Badges for every trackable item, in calendar row order
pub fn status_list(
    items: &[PerishableItem],
    today: Date,
    reminder_window_days: u32,
) -> Vec<ItemStatus> {
    assign_rows(items, today)
        .order()
        .iter()
        .filter_map(|&position| item_status(&items[position], today, reminder_window_days))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_classify_within_reminder_window() {
        let today = date!(2024 - 06 - 10);

        assert_eq!(classify(date!(2024 - 06 - 12), today, 7), Zone::Soon);
        assert_eq!(classify(date!(2024 - 06 - 12), today, 1), Zone::Fresh);
        assert_eq!(classify(date!(2024 - 06 - 12), today, 2), Zone::Soon);
    }

    #[test]
    fn test_classify_today_and_past() {
        let today = date!(2024 - 06 - 10);

        assert_eq!(classify(today, today, 0), Zone::Soon);
        assert_eq!(classify(date!(2024 - 06 - 09), today, 7), Zone::Expired);
    }

    #[test]
    fn test_status_list_order() {
        let today = date!(2024 - 06 - 10);
        let items = vec![
            PerishableItem::new("a", "Cheese").best_by(date!(2024 - 06 - 30)),
            PerishableItem::new("b", "Jam"),
            PerishableItem::new("c", "Chicken").frozen(date!(2024 - 06 - 11)),
        ];

        let statuses = status_list(&items, today, 3);

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].item_id, "c");
        assert_eq!(statuses[0].days_remaining, 1);
        assert_eq!(statuses[0].zone, Zone::Soon);
        assert_eq!(statuses[1].item_id, "a");
        assert_eq!(statuses[1].zone, Zone::Fresh);
    }
}
