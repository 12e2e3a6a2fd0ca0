pub mod duration_stats;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;

pub use duration_stats::DurationStats;
pub use station_stats::StationStats;
pub use time_stats::TimeStats;
pub use user_stats::{BirthYearStats, UserStats};

use std::fmt;

use crate::data::Dataset;

/// All four statistic groups for one (already filtered) dataset
#[derive(Clone, Debug, PartialEq)]
pub struct TripStatistics {
    pub time: TimeStats,
    pub station: StationStats,
    pub duration: DurationStats,
    pub user: UserStats,
}

impl TripStatistics {
    pub fn compute(dataset: &Dataset) -> TripStatistics {
        TripStatistics {
            time: TimeStats::compute(dataset),
            station: StationStats::compute(dataset),
            duration: DurationStats::compute(dataset),
            user: UserStats::compute(dataset),
        }
    }
}

impl fmt::Display for TripStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}\n", self.time)?;
        writeln!(f, "{}\n", self.station)?;
        writeln!(f, "{}\n", self.duration)?;
        write!(f, "{}", self.user)
    }
}
