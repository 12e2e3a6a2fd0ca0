use std::fmt;

use crate::data::Dataset;
use crate::tools::analysis::{min_max, mode, value_counts};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Breakdown of riders. Gender and birth year are `None` when no trip in the
/// dataset carries them, which is always the case for Washington.
#[derive(Clone, Debug, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(dataset: &Dataset) -> UserStats {
        let records = dataset.records();

        let user_types = value_counts(records.iter().filter_map(|r| r.user_type.clone()));

        let genders = value_counts(records.iter().filter_map(|r| r.gender.clone()));
        let genders = match genders.is_empty() {
            true => None,
            false => Some(genders),
        };

        let years = || records.iter().filter_map(|r| r.birth_year);
        let birth_years = match (min_max(years()), mode(years())) {
            (Some((earliest, most_recent)), Some(most_common)) => Some(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            }),
            _ => None,
        };

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.user_types.is_empty() {
            writeln!(f, "User type statistics not available")?;
        } else {
            writeln!(f, "Count of each user type")?;
            for (user_type, count) in self.user_types.iter() {
                writeln!(f, "    {}: {}", user_type, count)?;
            }
        }

        match self.genders {
            Some(ref genders) => {
                writeln!(f, "\nCount of each gender")?;
                for (gender, count) in genders.iter() {
                    writeln!(f, "    {}: {}", gender, count)?;
                }
            }
            None => writeln!(f, "\nGender statistics not available")?,
        }

        match self.birth_years {
            Some(ref years) => {
                writeln!(f, "\nEarliest year of birth is {}", years.earliest)?;
                writeln!(f, "Most recent year of birth is {}", years.most_recent)?;
                write!(f, "Most common year of birth is {}", years.most_common)
            }
            None => write!(f, "\nBirth Year statistics not available"),
        }
    }
}
