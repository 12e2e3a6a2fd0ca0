#[derive(Clone, Debug, PartialEq)]
pub enum DataRecordParsingError {
    InvalidData,
}

impl std::fmt::Display for DataRecordParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataRecordParsingError::InvalidData => write!(f, "Row holds no values"),
        }
    }
}

impl std::error::Error for DataRecordParsingError {}

pub trait ParseableDataRecord {
    type Metadata;

    fn from_data_row(
        metadata: Option<&Self::Metadata>,
        row: &[&str],
    ) -> Result<Self, DataRecordParsingError>
    where
        Self: Sized;
}
