use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Freshness category of an item on a given day.
///
/// `Fresh` only comes out of point-in-time status queries (list badges).
/// Calendar events are always one of `Soon`, `Freeze`, `Expired` or `Thaw`:
/// days before the visible lifecycle window are not shown at all.
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
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Soon,
    Freeze,
    Expired,
    Thaw,
    Fresh,
}

impl Zone {
    /// Legend colour handed to the rendering side
    pub fn color(self) -> &'static str {
        match self {
            Zone::Soon => "#facc15",
            Zone::Freeze => "#38bdf8",
            Zone::Expired => "#ef4444",
            Zone::Thaw => "#a78bfa",
            Zone::Fresh => "#22c55e",
        }
    }

    pub fn is_calendar_zone(self) -> bool {
        !matches!(self, Zone::Fresh)
    }
}
