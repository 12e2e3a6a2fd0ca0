use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::calendar::{DayOfWeek, Month};
use crate::data::{Dataset, TripDataRecord};
use crate::error::{Error, Result};

/// Which derived fields the user wants to narrow by
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [
        FilterMode::Month,
        FilterMode::Day,
        FilterMode::Both,
        FilterMode::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Month => "month",
            FilterMode::Day => "day",
            FilterMode::Both => "both",
            FilterMode::None => "none",
        }
    }

    pub fn wants_month(&self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn wants_day(&self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        FilterMode::ALL
            .iter()
            .find(|m| m.as_str() == key)
            .copied()
            .ok_or(Error::InvalidFilter {
                kind: "filter",
                input: s.trim().into(),
            })
    }
}

/// Equality filters on the derived month and day of week. An unset field matches everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub month: Option<Month>,
    pub day: Option<DayOfWeek>,
}

impl FilterSelection {
    pub fn none() -> FilterSelection {
        FilterSelection::default()
    }

    pub fn month(month: Month) -> FilterSelection {
        FilterSelection { month: Some(month), day: None }
    }

    pub fn day(day: DayOfWeek) -> FilterSelection {
        FilterSelection { month: None, day: Some(day) }
    }

    pub fn both(month: Month, day: DayOfWeek) -> FilterSelection {
        FilterSelection { month: Some(month), day: Some(day) }
    }

    pub fn is_none(&self) -> bool {
        self.month.is_none() && self.day.is_none()
    }

    pub fn mode(&self) -> FilterMode {
        match (self.month, self.day) {
            (Some(_), Some(_)) => FilterMode::Both,
            (Some(_), None) => FilterMode::Month,
            (None, Some(_)) => FilterMode::Day,
            (None, None) => FilterMode::None,
        }
    }

    /// Records with a missing derived field never match a filter on that field
    pub fn matches(&self, record: &TripDataRecord) -> bool {
        let month_ok = match self.month {
            Some(month) => record.month == Some(month),
            None => true,
        };
        let day_ok = match self.day {
            Some(day) => record.day_of_week == Some(day),
            None => true,
        };
        month_ok && day_ok
    }

    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        if self.is_none() {
            return dataset.clone();
        }

        let filtered = dataset.retain_view(|r| self.matches(r));
        debug!("Filter ({}) kept {} of {} trips", self, filtered.len(), dataset.len());
        filtered
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let month = self.month.map(|m| m.name()).unwrap_or("all");
        let day = self.day.map(|d| d.name()).unwrap_or("all");
        write!(f, "month: {}, day: {}", month, day)
    }
}
