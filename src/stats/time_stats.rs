use std::fmt;

use crate::calendar::{hour_to_time, DayOfWeek, Month};
use crate::data::Dataset;
use crate::dimensional_data::NOT_AVAILABLE;
use crate::tools::analysis::mode;

/// The most frequent times of travel
#[derive(Clone, Debug, PartialEq)]
pub struct TimeStats {
    pub popular_month: Option<Month>,
    pub popular_day: Option<DayOfWeek>,
    pub popular_hour: Option<u32>,
}

impl TimeStats {
    pub fn compute(dataset: &Dataset) -> TimeStats {
        let records = dataset.records();
        TimeStats {
            popular_month: mode(records.iter().filter_map(|r| r.month)),
            popular_day: popular_day(records.iter().filter_map(|r| r.day_of_week)),
            popular_hour: mode(records.iter().filter_map(|r| r.hour)),
        }
    }
}

/// Ties between days go to the alphabetically first day name
fn popular_day<I>(days: I) -> Option<DayOfWeek>
where
    I: IntoIterator<Item = DayOfWeek>,
{
    mode(days.into_iter().map(|d| d.name())).and_then(|name| name.parse().ok())
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let month = self.popular_month.map(|m| m.name().to_string());
        let day = self.popular_day.map(|d| d.name().to_string());
        let hour = self.popular_hour.map(hour_to_time);

        writeln!(f, "Most popular month is {}", month.as_deref().unwrap_or(NOT_AVAILABLE))?;
        writeln!(f, "Most popular day is {}", day.as_deref().unwrap_or(NOT_AVAILABLE))?;
        write!(f, "Most popular hour is {}", hour.as_deref().unwrap_or(NOT_AVAILABLE))
    }
}
