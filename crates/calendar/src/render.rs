use std::collections::{BTreeMap, BTreeSet};

use imfridge_shared::{PerishableItem, Week, Zone};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Weekday};

use crate::{
    CalendarEvent, ItemStatus, WeekGrid, assign_rows, generate_events, map_to_week, status_list,
};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Month,
    Week,
    Day,
}

/// What the calendar is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewWindow {
    pub kind: ViewKind,
    pub reference_date: Date,
}

impl ViewWindow {
    pub fn new(kind: ViewKind, reference_date: Date) -> Self {
        Self {
            kind,
            reference_date,
        }
    }

    pub fn month(reference_date: Date) -> Self {
        Self::new(ViewKind::Month, reference_date)
    }

    pub fn week(reference_date: Date) -> Self {
        Self::new(ViewKind::Week, reference_date)
    }

    pub fn day(reference_date: Date) -> Self {
        Self::new(ViewKind::Day, reference_date)
    }
}

/// User and layout settings consumed by a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Only feeds list badges, never the calendar tiles
    pub reminder_window_days: u32,
    pub week_start: Weekday,
    pub row_height_px: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reminder_window_days: 3,
            week_start: Weekday::Monday,
            row_height_px: 28,
        }
    }
}

/// A calendar event plus the positioning hints for the grid widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionedEvent {
    #[serde(flatten)]
    pub event: CalendarEvent,
    pub column: Option<u8>,
    pub offset_px: Option<u32>,
}

/// Every zone present on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayZones {
    pub date: Date,
    pub zones: BTreeSet<Zone>,
}

/// Legend colour of a zone shown in this pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub zone: Zone,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    pub view: ViewWindow,
    pub events: Vec<PositionedEvent>,
    pub day_zones: Vec<DayZones>,
    pub legend: Vec<LegendEntry>,
    pub badges: Vec<ItemStatus>,
    pub week: Option<WeekGrid>,
}

impl RenderModel {
    pub fn zones_on(&self, date: Date) -> Option<&BTreeSet<Zone>> {
        self.day_zones
            .iter()
            .find(|day| day.date == date)
            .map(|day| &day.zones)
    }
}

/// Build the view-specific render model for one pass.
///
/// Month and Day views carry every event un-clipped, the grid widget does its
/// own date-range filtering there. Day view pins each event at
/// `row_index * row_height_px`. Week view is the Gantt grid from
/// [`map_to_week`], positioned the same way as Day view.
#[tracing::instrument(skip_all, fields(view = %view.kind, date = %view.reference_date, items = items.len()))]
pub fn build(
    items: &[PerishableItem],
    view: ViewWindow,
    today: Date,
    options: &RenderOptions,
) -> RenderModel {
    let offset = |row_index: usize| {
        u32::try_from(row_index)
            .unwrap_or(u32::MAX)
            .saturating_mul(options.row_height_px)
    };

    let (events, week) = match view.kind {
        ViewKind::Month | ViewKind::Day => {
            let assignment = assign_rows(items, today);
            let pin = view.kind == ViewKind::Day;

            let events = assignment
                .order()
                .iter()
                .filter_map(|&position| {
                    assignment
                        .row_at(position)
                        .map(|row_index| (&items[position], row_index))
                })
                .flat_map(|(item, row_index)| {
                    generate_events(item)
                        .into_iter()
                        .map(move |day| day.with_row(row_index))
                })
                .map(|event| PositionedEvent {
                    offset_px: pin.then(|| offset(event.row_index)),
                    column: None,
                    event,
                })
                .collect::<Vec<_>>();

            (events, None)
        }
        ViewKind::Week => {
            let grid = map_to_week(
                items,
                today,
                Week::containing(view.reference_date, options.week_start),
            );

            let events = grid
                .events
                .iter()
                .map(|placed| PositionedEvent {
                    event: placed.event.clone(),
                    column: Some(placed.column),
                    offset_px: Some(offset(placed.event.row_index)),
                })
                .collect::<Vec<_>>();

            (events, Some(grid))
        }
    };

    let day_zones = union_by_day(&events);
    let legend = legend_for(&day_zones);

    tracing::debug!(
        events = events.len(),
        days = day_zones.len(),
        "Calendar render model built"
    );

    RenderModel {
        view,
        events,
        day_zones,
        legend,
        badges: status_list(items, today, options.reminder_window_days),
        week,
    }
}

fn union_by_day(events: &[PositionedEvent]) -> Vec<DayZones> {
    let mut days = BTreeMap::<Date, BTreeSet<Zone>>::new();

    for positioned in events {
        days.entry(positioned.event.date)
            .or_default()
            .insert(positioned.event.zone);
    }

    days.into_iter()
        .map(|(date, zones)| DayZones { date, zones })
        .collect()
}

fn legend_for(day_zones: &[DayZones]) -> Vec<LegendEntry> {
    Zone::VARIANTS
        .iter()
        .copied()
        .filter(|zone| zone.is_calendar_zone())
        .filter(|zone| day_zones.iter().any(|day| day.zones.contains(zone)))
        .map(|zone| LegendEntry {
            zone,
            color: zone.color(),
        })
        .collect()
}
