pub mod column;
pub mod dataset;
pub mod parseable_data_record;
pub mod trip_data_record;

pub use column::{Column, ColumnLayout};
pub use dataset::Dataset;
pub use parseable_data_record::{DataRecordParsingError, ParseableDataRecord};
pub use trip_data_record::{TripDataRecord, TripDataRecordCollection};
