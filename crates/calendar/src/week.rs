use imfridge_shared::{PerishableItem, Week, Zone};
use serde::Serialize;
use time::Date;

use crate::{CalendarEvent, assign_rows, generate_events};

/// An event that intersects the visible week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnEvent {
    pub event: CalendarEvent,
    pub column: u8,
}

/// One Gantt row: an item and its coloured day cells for the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub row_index: usize,
    pub item_id: String,
    pub label: String,
    pub cells: [Option<Zone>; Week::DAYS],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGrid {
    pub week: Week,
    pub rows: Vec<WeekRow>,
    pub events: Vec<ColumnEvent>,
}

impl WeekGrid {
    /// Item behind a clicked cell, `None` for empty cells
    pub fn item_at(&self, row_index: usize, column: u8) -> Option<&str> {
        let row = self.rows.iter().find(|row| row.row_index == row_index)?;

        row.cells
            .get(usize::from(column))
            .copied()
            .flatten()
            .map(|_| row.item_id.as_str())
    }
}

/// Lay items out on a 7-day Gantt grid.
///
/// Items whose terminal date is before `today` are left out of the week view
/// entirely. Events outside the week are dropped, and an item only gets a
/// row when at least one of its days is visible. Row indices come from the
/// full collection, so an item keeps its slot across weeks.
pub fn map_to_week(items: &[PerishableItem], today: Date, week: Week) -> WeekGrid {
    let assignment = assign_rows(items, today);
    let mut rows = Vec::new();
    let mut events = Vec::new();

    for &position in assignment.order() {
        let item = &items[position];

        let (Some(row_index), Some(terminal_date)) =
            (assignment.row_at(position), item.effective_terminal_date())
        else {
            continue;
        };

        if terminal_date < today {
            tracing::trace!(item = %item.id, %terminal_date, "Past terminal date, hidden from week");
            continue;
        }

        let mut cells = [None; Week::DAYS];
        let mut visible = Vec::new();

        for day in generate_events(item) {
            let Some(column) = week.column_of(day.date) else {
                continue;
            };

            cells[usize::from(column)] = Some(day.zone);
            visible.push(ColumnEvent {
                event: day.with_row(row_index),
                column,
            });
        }

        if visible.is_empty() {
            tracing::trace!(item = %item.id, %terminal_date, "No day inside the week");
            continue;
        }

        rows.push(WeekRow {
            row_index,
            item_id: item.id.to_owned(),
            label: item.name.to_owned(),
            cells,
        });
        events.extend(visible);
    }

    WeekGrid { week, rows, events }
}
