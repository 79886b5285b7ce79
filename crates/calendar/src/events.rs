use imfridge_shared::{PerishableItem, Zone, shift_day};
use serde::Serialize;
use time::Date;

/// Lifecycle tiles relative to the best-by date: two days to eat it, two days
/// to freeze it, then the day it expires. Independent of user settings.
pub const LIFECYCLE: [(i64, Zone); 5] = [
    (-4, Zone::Soon),
    (-3, Zone::Soon),
    (-2, Zone::Freeze),
    (-1, Zone::Freeze),
    (0, Zone::Expired),
];

/// One zoned day of an item, before it is given a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEvent {
    pub item_id: String,
    pub label: String,
    pub date: Date,
    pub zone: Zone,
}

impl DayEvent {
    fn new(item: &PerishableItem, date: Date, zone: Zone) -> Self {
        Self {
            item_id: item.id.to_owned(),
            label: item.name.to_owned(),
            date,
            zone,
        }
    }

    pub fn with_row(self, row_index: usize) -> CalendarEvent {
        CalendarEvent {
            item_id: self.item_id,
            label: self.label,
            date: self.date,
            zone: self.zone,
            row_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub item_id: String,
    pub label: String,
    pub date: Date,
    pub zone: Zone,
    pub row_index: usize,
}

/// Zoned days making up the visible lifecycle of `item`, in date order.
///
/// Frozen items with a thaw date get a single `Thaw` day and nothing else.
/// Items with no usable date get nothing.
pub fn generate_events(item: &PerishableItem) -> Vec<DayEvent> {
    if let (true, Some(thaw_date)) = (item.is_frozen, item.thaw_date) {
        return vec![DayEvent::new(item, thaw_date, Zone::Thaw)];
    }

    let Some(best_by) = item.terminal_date else {
        return Vec::new();
    };

    LIFECYCLE
        .iter()
        .filter_map(|&(offset, zone)| {
            shift_day(best_by, offset).map(|date| DayEvent::new(item, date, zone))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_lifecycle_days() {
        let milk = PerishableItem::new("milk", "Milk").best_by(date!(2024 - 06 - 10));

        let events = generate_events(&milk)
            .into_iter()
            .map(|e| (e.date, e.zone))
            .collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                (date!(2024 - 06 - 06), Zone::Soon),
                (date!(2024 - 06 - 07), Zone::Soon),
                (date!(2024 - 06 - 08), Zone::Freeze),
                (date!(2024 - 06 - 09), Zone::Freeze),
                (date!(2024 - 06 - 10), Zone::Expired),
            ]
        );
    }

    #[test]
    fn test_lifecycle_crosses_month_boundary() {
        let yogurt = PerishableItem::new("yogurt", "Yogurt").best_by(date!(2024 - 03 - 02));

        let dates = generate_events(&yogurt)
            .into_iter()
            .map(|e| e.date)
            .collect::<Vec<_>>();

        assert_eq!(dates[0], date!(2024 - 02 - 27));
        assert_eq!(dates[2], date!(2024 - 02 - 29));
        assert_eq!(dates[4], date!(2024 - 03 - 02));
    }

    #[test]
    fn test_frozen_item_only_thaws() {
        let chicken = PerishableItem::new("chicken", "Frozen Chicken")
            .best_by(date!(2024 - 06 - 01))
            .frozen(date!(2024 - 06 - 15));

        let events = generate_events(&chicken);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date!(2024 - 06 - 15));
        assert_eq!(events[0].zone, Zone::Thaw);
        assert_eq!(events[0].label, "Frozen Chicken");
    }

    #[test]
    fn test_untracked_item_has_no_events() {
        assert!(generate_events(&PerishableItem::new("jar", "Jam")).is_empty());
        assert!(generate_events(&PerishableItem::new("peas", "Peas").frozen(None)).is_empty());
    }
}
