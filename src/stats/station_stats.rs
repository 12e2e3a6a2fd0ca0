use std::fmt;

use crate::data::Dataset;
use crate::dimensional_data::NOT_AVAILABLE;
use crate::tools::analysis::mode;

/// The most popular stations and trip
#[derive(Clone, Debug, PartialEq)]
pub struct StationStats {
    pub popular_start_station: Option<String>,
    pub popular_end_station: Option<String>,
    /// Most frequent "Start -> End" pair, each trip paired with its own stations
    pub popular_route: Option<String>,
}

impl StationStats {
    pub fn compute(dataset: &Dataset) -> StationStats {
        let records = dataset.records();
        StationStats {
            popular_start_station: mode(records.iter().filter_map(|r| r.start_station.clone())),
            popular_end_station: mode(records.iter().filter_map(|r| r.end_station.clone())),
            popular_route: mode(records.iter().filter_map(|r| r.route())),
        }
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Most popular start station is {}",
            self.popular_start_station.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        writeln!(
            f,
            "Most popular end station is {}",
            self.popular_end_station.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        write!(
            f,
            "Most popular combination of start and end station is {}",
            self.popular_route.as_deref().unwrap_or(NOT_AVAILABLE)
        )
    }
}
