use std::fs::File;
use std::io::{BufReader, Read};

use log::{debug, info};

use super::column::{Column, ColumnLayout};
use super::trip_data_record::{TripDataRecord, TripDataRecordCollection};
use crate::city::{City, CityRegistry};
use crate::error::Result;

/// All trips for one city in file order, normalized to the eight named
/// columns with the time fields already derived.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    city: City,
    layout: ColumnLayout,
    records: Vec<TripDataRecord>,
}

impl Dataset {
    pub fn new(city: City, layout: ColumnLayout, records: Vec<TripDataRecord>) -> Dataset {
        Dataset { city, layout, records }
    }

    /// Reads the city's file from the registry. A missing file or a
    /// structurally broken CSV is an error; bad cell values are not.
    pub fn load(registry: &CityRegistry, city: City) -> Result<Dataset> {
        let path = registry.source(city);
        info!("Loading {} trips from {}", city, path.display());

        let file = File::open(&path)?;
        Dataset::from_reader(city, BufReader::new(file))
    }

    pub fn from_reader<R: Read>(city: City, source: R) -> Result<Dataset> {
        let mut collection = TripDataRecordCollection::from_reader(source)?;
        let layout = collection.layout().clone();

        let missing = layout.missing();
        if !missing.is_empty() {
            debug!("{} data has no {:?} columns, filling them as missing", city, missing);
        }

        let records = collection.records().collect::<std::result::Result<Vec<_>, _>>()?;

        let dataset = Dataset::new(city, layout, records);
        debug!(
            "Loaded {} {} trips ({} without a usable start time)",
            dataset.len(),
            city,
            dataset.missing_start_times()
        );

        Ok(dataset)
    }

    pub fn city(&self) -> City {
        self.city
    }

    /// The named columns every dataset exposes, whatever its source provided
    pub fn columns(&self) -> &'static [Column] {
        &Column::ALL
    }

    /// Layout of the source file, useful for telling which columns were filled in
    pub fn source_layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn records(&self) -> &[TripDataRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn missing_start_times(&self) -> usize {
        self.records.iter().filter(|r| r.start_time.is_none()).count()
    }

    /// A new dataset holding only the records accepted by `predicate`, order preserved
    pub fn retain_view<F>(&self, predicate: F) -> Dataset
    where
        F: Fn(&TripDataRecord) -> bool,
    {
        Dataset {
            city: self.city,
            layout: self.layout.clone(),
            records: self.records.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;

    #[test]
    fn test_from_reader_fills_missing_columns() {
        let raw = "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
                   2017-01-01 08:00:00,2017-01-01 08:05:00,300,A,B,Subscriber\n";
        let dataset = Dataset::from_reader(City::Washington, raw.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.columns(), &Column::ALL);
        assert_eq!(dataset.source_layout().missing(), vec![Column::Gender, Column::BirthYear]);
        assert!(dataset.records()[0].gender.is_none());
        assert!(dataset.records()[0].birth_year.is_none());
    }

    #[test]
    fn test_retain_view_leaves_source_untouched() {
        let raw = "Start Time\n2017-01-01 08:00:00\n2017-02-01 08:00:00\n2017-01-09 08:00:00\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();

        let january = dataset.retain_view(|r| r.month == Some(Month::January));
        assert_eq!(january.len(), 2);
        assert_eq!(dataset.len(), 3);
        assert_eq!(january.records()[1].start_time, dataset.records()[2].start_time);
    }

    #[test]
    fn test_bad_timestamps_are_counted() {
        let raw = "Start Time,Trip Duration\nsoon,10\n2017-01-01 08:00:00,20\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.missing_start_times(), 1);
    }
}
