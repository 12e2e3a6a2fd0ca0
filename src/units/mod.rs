use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
        }
    }

    fn seconds_per_unit(&self) -> f64 {
        match self {
            Unit::Seconds => 1.0,
            Unit::Minutes => 60.0,
            Unit::Hours => 3600.0,
        }
    }

    pub fn convert(&self, destination: &Unit, value: f64) -> f64 {
        if self == destination {
            return value;
        }
        value * self.seconds_per_unit() / destination.seconds_per_unit()
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Seconds
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "seconds" => Ok(Unit::Seconds),
            "min" | "minutes" => Ok(Unit::Minutes),
            "h" | "hours" => Ok(Unit::Hours),
            _ => Err(DataParseError::InvalidString),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DataParseError {
    InvalidString,
}

impl fmt::Display for DataParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataParseError::InvalidString => write!(f, "Invalid string"),
        }
    }
}

impl std::error::Error for DataParseError {}

pub trait UnitConvertible<T> {
    fn to_units(&mut self, new_units: &Unit);
}
