use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// The normalized lookup key
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase();

        City::ALL
            .iter()
            .find(|c| c.as_str() == key)
            .copied()
            .ok_or(Error::UnknownCity(key))
    }
}

/// Maps each supported city onto the CSV file that holds its trips.
#[derive(Clone, Debug)]
pub struct CityRegistry {
    sources: HashMap<City, PathBuf>,
}

impl CityRegistry {
    pub fn new(config: &Config) -> Result<CityRegistry> {
        let mut sources: HashMap<City, PathBuf> = City::ALL
            .iter()
            .map(|c| (*c, config.data_dir.join(c.file_name())))
            .collect();

        for (key, file) in config.files.iter() {
            let city: City = key.parse()?;
            sources.insert(city, config.data_dir.join(file));
        }

        Ok(CityRegistry { sources })
    }

    pub fn source(&self, city: City) -> PathBuf {
        self.sources
            .get(&city)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(city.file_name()))
    }

    /// Parses a user supplied city key and returns the city with its data file
    pub fn resolve(&self, key: &str) -> Result<(City, PathBuf)> {
        let city: City = key.parse()?;
        Ok((city, self.source(city)))
    }
}
