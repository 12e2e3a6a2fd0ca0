use std::fmt;

use crate::data::Dataset;
use crate::dimensional_data::DimensionalData;
use crate::tools::math::sum_and_mean;
use crate::units::{Unit, UnitConvertible};

/// Total and average trip duration. Trips without a duration are skipped in
/// both; an empty dataset totals 0 and has no average.
#[derive(Clone, Debug, PartialEq)]
pub struct DurationStats {
    pub total: DimensionalData<f64>,
    pub mean: DimensionalData<f64>,
}

impl DurationStats {
    pub fn compute(dataset: &Dataset) -> DurationStats {
        let (sum, mean) = sum_and_mean(dataset.records().iter().map(|r| r.trip_duration));
        DurationStats {
            total: DimensionalData::new(Some(sum), "total travel time", Unit::Seconds),
            mean: DimensionalData::new(mean, "average travel time", Unit::Seconds),
        }
    }
}

impl UnitConvertible<DurationStats> for DurationStats {
    fn to_units(&mut self, new_units: &Unit) {
        self.total.to_units(new_units);
        self.mean.to_units(new_units);
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total travel time is {}", self.total)?;
        write!(f, "Average travel time is {}", self.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;

    #[test]
    fn test_duration_skips_missing() {
        let raw = "Start Time,Trip Duration\n\
                   2017-01-01 08:00:00,100\n\
                   2017-01-01 09:00:00,\n\
                   2017-01-01 10:00:00,300\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();
        let stats = DurationStats::compute(&dataset);

        assert_eq!(stats.total.value, Some(400.0));
        assert_eq!(stats.mean.value, Some(200.0));
        assert_eq!(
            stats.to_string(),
            "Total travel time is 400 seconds\nAverage travel time is 200 seconds"
        );
    }

    #[test]
    fn test_duration_empty() {
        let raw = "Start Time,Trip Duration\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();
        let stats = DurationStats::compute(&dataset);
        assert_eq!(
            stats.to_string(),
            "Total travel time is 0 seconds\nAverage travel time is not available"
        );
    }

    #[test]
    fn test_duration_in_minutes() {
        let raw = "Start Time,Trip Duration\n2017-01-01 08:00:00,90\n2017-01-01 09:00:00,150\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();
        let mut stats = DurationStats::compute(&dataset);
        stats.to_units(&Unit::Minutes);

        assert_eq!(
            stats.to_string(),
            "Total travel time is 4 minutes\nAverage travel time is 2 minutes"
        );
    }
}
