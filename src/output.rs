use std::fmt::Write;

use imfridge_calendar::{ItemStatus, RenderModel, WeekGrid};
use imfridge_shared::Zone;

fn zone_cell(zone: Option<Zone>) -> &'static str {
    match zone {
        Some(Zone::Soon) => "S",
        Some(Zone::Freeze) => "F",
        Some(Zone::Expired) => "X",
        Some(Zone::Thaw) => "T",
        Some(Zone::Fresh) | None => ".",
    }
}

/// Plain-text rendering of a render model, one line per event, or the Gantt
/// grid in week view
pub fn render_text(model: &RenderModel) -> String {
    let mut out = match &model.week {
        Some(grid) => week_text(grid),
        None => events_text(model),
    };

    if !model.legend.is_empty() {
        let legend = model
            .legend
            .iter()
            .map(|entry| {
                format!(
                    "{}={} {}",
                    zone_cell(Some(entry.zone)),
                    entry.zone.as_ref(),
                    entry.color
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "legend  {legend}");
    }

    out
}

fn events_text(model: &RenderModel) -> String {
    let mut out = String::new();

    for positioned in &model.events {
        let event = &positioned.event;
        let _ = write!(
            out,
            "{}  row {:>2}  {:<8} {}",
            event.date,
            event.row_index,
            event.zone.as_ref(),
            event.label
        );
        if let Some(offset) = positioned.offset_px {
            let _ = write!(out, "  @{offset}px");
        }
        out.push('\n');
    }

    for day in &model.day_zones {
        if day.zones.len() > 1 {
            let zones = day
                .zones
                .iter()
                .map(|zone| zone.as_ref())
                .collect::<Vec<_>>()
                .join("+");
            let _ = writeln!(out, "{}  mixed    {zones}", day.date);
        }
    }

    out
}

fn week_text(grid: &WeekGrid) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<20}", format!("{}..{}", grid.week.start, grid.week.end));
    for day in grid.week.days() {
        let _ = write!(out, " {:>2}", day.day());
    }
    out.push('\n');

    for row in &grid.rows {
        let _ = write!(out, "{:<20}", format!("{:>2} {}", row.row_index, row.label));
        for cell in row.cells {
            let _ = write!(out, "  {}", zone_cell(cell));
        }
        out.push('\n');
    }

    out
}

/// List badges, one line per item
pub fn status_text(statuses: &[ItemStatus]) -> String {
    let mut out = String::new();

    for status in statuses {
        let _ = writeln!(
            out,
            "{:<8} {:>4}d  {}  {}",
            status.zone.as_ref(),
            status.days_remaining,
            status.terminal_date,
            status.label
        );
    }

    out
}
