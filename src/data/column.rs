use std::fmt;

/// The fixed set of trip columns every loaded dataset exposes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    StartTime,
    EndTime,
    TripDuration,
    StartStation,
    EndStation,
    UserType,
    Gender,
    BirthYear,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::StartTime,
        Column::EndTime,
        Column::TripDuration,
        Column::StartStation,
        Column::EndStation,
        Column::UserType,
        Column::Gender,
        Column::BirthYear,
    ];

    /// Header text as it appears in the trip files
    pub fn header(&self) -> &'static str {
        match self {
            Column::StartTime => "Start Time",
            Column::EndTime => "End Time",
            Column::TripDuration => "Trip Duration",
            Column::StartStation => "Start Station",
            Column::EndStation => "End Station",
            Column::UserType => "User Type",
            Column::Gender => "Gender",
            Column::BirthYear => "Birth Year",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// Where each named column sits in a source row. Columns the source lacks map
/// to `None` and read as missing on every row; unrecognized source columns are
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    positions: [Option<usize>; 8],
}

impl ColumnLayout {
    pub fn from_headers<'a, I>(headers: I) -> ColumnLayout
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions = [None; 8];
        for (i, header) in headers.into_iter().enumerate() {
            let header = header.trim();
            if let Some(column) = Column::ALL.iter().find(|c| c.header() == header) {
                // First occurrence wins on duplicated headers
                if positions[column.index()].is_none() {
                    positions[column.index()] = Some(i);
                }
            }
        }

        ColumnLayout { positions }
    }

    /// The layout of a headerless row holding the eight columns in `Column::ALL` order
    pub fn canonical() -> ColumnLayout {
        let mut positions = [None; 8];
        for (i, column) in Column::ALL.iter().enumerate() {
            positions[column.index()] = Some(i);
        }
        ColumnLayout { positions }
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions[column.index()]
    }

    pub fn contains(&self, column: Column) -> bool {
        self.position(column).is_some()
    }

    /// Named columns the source did not provide
    pub fn missing(&self) -> Vec<Column> {
        Column::ALL
            .iter()
            .filter(|c| !self.contains(**c))
            .copied()
            .collect()
    }

    /// The trimmed cell for `column`, or `None` when the column is absent or the cell is blank
    pub fn cell<'a>(&self, column: Column, row: &[&'a str]) -> Option<&'a str> {
        self.position(column)
            .and_then(|i| row.get(i))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}
