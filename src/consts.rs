/// Smallest year a nonzero year field is clamped to by default
pub const MIN_YEAR: u32 = 1;

/// Largest year a year field is clamped to by default (inclusive)
pub const MAX_YEAR: u32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First valid month (January), used when a typed month evaluates to zero
pub const MIN_MONTH: u32 = 1;

/// First day of month, used when a typed day evaluates to zero
pub const MIN_DAY: u32 = 1;

/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Days assumed for a month that is unset or out of range
pub const FALLBACK_DAYS: u32 = 31;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;

/// Mask character for one digit of the day field
pub const DAY_CHAR: char = 'd';
/// Mask character for one digit of the month field
pub const MONTH_CHAR: char = 'M';
/// Mask character for one digit of the year field
pub const YEAR_CHAR: char = 'y';

/// Placeholder rendered for each digit of an unset field
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Mask used by `MaskConfig::default()`
pub const DEFAULT_MASK: &str = "dd/MM/yyyy";
