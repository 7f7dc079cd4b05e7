/// Length of the observance period in days.
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

/// Days per week, used by the weekly recurrence rule.
pub const DAYS_PER_WEEK: u32 = 7;

/// Weeks assumed per period when estimating a weekly goal's full scope.
/// The period is treated as exactly 4 weeks; this is an approximation and
/// is kept as-is because changing it changes user-visible percentages.
pub const WEEKS_PER_PERIOD: i64 = 4;

/// Default quantity for goals created without an explicit amount.
pub const DEFAULT_AMOUNT: i64 = 1;
