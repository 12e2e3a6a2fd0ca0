pub mod day_of_week;
pub mod month;

pub use day_of_week::DayOfWeek;
pub use month::Month;

/// Formats a 24 hour clock hour as a 12 hour value with an AM/PM suffix.
///
/// Midnight renders as "0 AM" and noon as "0 PM"; the hour is reduced modulo 12
/// rather than mapped onto a 1-12 clock face.
pub fn hour_to_time(hour: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    format!("{} {}", hour % 12, suffix)
}
