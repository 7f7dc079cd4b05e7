use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for observance dates.
/// This is the canonical timezone used to convert UTC instants to domain dates
/// when the caller has not configured one.
pub const DEFAULT_OBSERVANCE_TZ: Tz = chrono_tz::Asia::Riyadh;

/// Converts a UTC instant to an observance date in the given timezone.
///
/// This is the single source of truth for deriving "today" from a timestamp.
/// A generation pass reads the clock once through this function and threads
/// the resulting date everywhere, so the pass stays internally consistent
/// even if real time advances mid-call.
pub fn observance_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's observance date in the default observance timezone.
pub fn observance_date_today() -> NaiveDate {
    observance_date_from_utc(Utc::now(), DEFAULT_OBSERVANCE_TZ)
}
