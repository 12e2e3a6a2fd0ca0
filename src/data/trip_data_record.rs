use std::fmt;
use std::io::Read;

use chrono::{Datelike, NaiveDateTime, Timelike};
use csv::Reader;
use log::warn;

use super::column::{Column, ColumnLayout};
use super::parseable_data_record::{DataRecordParsingError, ParseableDataRecord};
use crate::calendar::{DayOfWeek, Month};
use crate::tools::date::parse_timestamp;

/// One trip. Every column is optional because the city files carry different
/// subsets; the month, day and hour are derived from the start time once at
/// parse time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripDataRecord {
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: Option<Month>,
    pub day_of_week: Option<DayOfWeek>,
    pub hour: Option<u32>,
}

impl TripDataRecord {
    /// Builds a record from its raw columns and derives the time fields
    pub fn new(
        start_time: Option<NaiveDateTime>,
        end_time: Option<NaiveDateTime>,
        trip_duration: Option<f64>,
        start_station: Option<String>,
        end_station: Option<String>,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> TripDataRecord {
        TripDataRecord {
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month: start_time.and_then(|t| Month::from_number(t.month())),
            day_of_week: start_time.map(|t| DayOfWeek::from(t.weekday())),
            hour: start_time.map(|t| t.hour()),
        }
    }

    /// The "Start -> End" route label, present only when both stations are
    pub fn route(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{} -> {}", start, end)),
            _ => None,
        }
    }
}

fn parse_time_cell(column: Column, raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        warn!("Unparseable {} value '{}', treating it as missing", column, raw);
    }
    parsed
}

fn parse_year_cell(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i32)
}

impl ParseableDataRecord for TripDataRecord {
    type Metadata = ColumnLayout;

    fn from_data_row(
        metadata: Option<&Self::Metadata>,
        row: &[&str],
    ) -> Result<TripDataRecord, DataRecordParsingError> {
        let canonical;
        let layout = match metadata {
            Some(layout) => layout,
            None => {
                canonical = ColumnLayout::canonical();
                &canonical
            }
        };

        if row.iter().all(|cell| cell.trim().is_empty()) {
            return Err(DataRecordParsingError::InvalidData);
        }

        let text = |column: Column| layout.cell(column, row).map(String::from);

        Ok(TripDataRecord::new(
            parse_time_cell(Column::StartTime, layout.cell(Column::StartTime, row)),
            parse_time_cell(Column::EndTime, layout.cell(Column::EndTime, row)),
            layout
                .cell(Column::TripDuration, row)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| !v.is_nan()),
            text(Column::StartStation),
            text(Column::EndStation),
            text(Column::UserType),
            text(Column::Gender),
            parse_year_cell(layout.cell(Column::BirthYear, row)),
        ))
    }
}

fn or_missing<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".into(),
    }
}

impl fmt::Display for TripDataRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {}",
            or_missing(&self.start_time),
            or_missing(&self.end_time),
            or_missing(&self.trip_duration),
            or_missing(&self.start_station),
            or_missing(&self.end_station),
            or_missing(&self.user_type),
            or_missing(&self.gender),
            or_missing(&self.birth_year),
            or_missing(&self.month),
            or_missing(&self.day_of_week),
            or_missing(&self.hour),
        )
    }
}

/// Streams trip records out of a CSV source with a header row
pub struct TripDataRecordCollection<R: Read> {
    reader: Reader<R>,
    layout: ColumnLayout,
}

impl<R: Read> TripDataRecordCollection<R> {
    pub fn from_reader(source: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(source);

        let layout = ColumnLayout::from_headers(reader.headers()?.iter());

        Ok(TripDataRecordCollection { reader, layout })
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Yields records in file order. Structural CSV errors are returned as
    /// they occur. A row whose cells are all blank is kept as an empty trip so
    /// row numbers keep matching the file.
    pub fn records(&mut self) -> impl Iterator<Item = Result<TripDataRecord, csv::Error>> + '_ {
        let layout = &self.layout;
        self.reader.records().map(move |result| {
            let record = result?;
            let row: Vec<&str> = record.iter().collect();
            Ok(TripDataRecord::from_data_row(Some(layout), &row).unwrap_or_else(|e| {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                warn!("{} on line {}, keeping it as an empty trip", e, line);
                TripDataRecord::default()
            }))
        })
    }
}
