pub mod time_utils;

pub use time_utils::{observance_date_from_utc, observance_date_today, DEFAULT_OBSERVANCE_TZ};
