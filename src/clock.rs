use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{ToTimezone, timezones};

use crate::error::AppError;

/// Today's date in `tz`, as seen from the instant `now`
pub fn today_at(tz: &str, now: OffsetDateTime) -> Result<Date, AppError> {
    if tz.eq_ignore_ascii_case("UTC") {
        return Ok(now.to_offset(UtcOffset::UTC).date());
    }

    let Some(tz) = timezones::get_by_name(tz) else {
        return Err(AppError::UnknownTimezone(tz.to_owned()));
    };

    Ok(now.to_timezone(tz).date())
}

pub fn today(tz: &str) -> Result<Date, AppError> {
    today_at(tz, OffsetDateTime::now_utc())
}
