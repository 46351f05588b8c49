use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// The single instant every body longitude is computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedInstant {
    pub utc: DateTime<Utc>,
    /// Local civil date and time actually used, in the resolved zone
    pub local: NaiveDateTime,
    pub used_time: NaiveTime,
    /// Birth time was not known and `used_time` is a substitute.
    /// House and ascendant interpretation must be skipped when set.
    pub time_unknown: bool,
}

/// Interpret a birth date and optional time as local civil time in `tz`.
///
/// A missing time, or `time_unknown`, substitutes `default_time`. Ambiguous
/// local times take the earlier instant; times inside a DST gap are moved
/// one hour forward.
pub fn resolve_instant(
    date: NaiveDate,
    time: Option<NaiveTime>,
    time_unknown: bool,
    tz: Tz,
    default_time: NaiveTime,
) -> ResolvedInstant {
    let time_unknown = time_unknown || time.is_none();
    let used_time = match time {
        Some(t) if !time_unknown => t,
        _ => default_time,
    };
    let local = date.and_time(used_time);
    let utc = local_to_utc(&local, tz);

    ResolvedInstant {
        utc,
        local,
        used_time,
        time_unknown,
    }
}

fn local_to_utc(local: &NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    if let Some(dt) = tz.from_local_datetime(local).earliest() {
        return dt.with_timezone(&Utc);
    }
    let shifted = *local + Duration::hours(1);
    match tz.from_local_datetime(&shifted).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        // No zone has a gap longer than an hour in practice
        None => Utc.from_utc_datetime(local),
    }
}
