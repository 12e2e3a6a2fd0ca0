//! The interactive front end: prompts for a city and filters, prints the four
//! statistic groups, pages through raw rows and offers to start over.
//!
//! Input is validated by the `parse_*` functions, which return a `Result`; the
//! prompt loop asks again for as long as they return `Err`. Reaching the end of
//! input ends the session instead of prompting forever.

use std::fmt;
use std::io::{BufRead, Write};
use std::time::Instant;

use log::debug;

use crate::calendar::{DayOfWeek, Month};
use crate::city::{City, CityRegistry};
use crate::config::Config;
use crate::data::{Column, Dataset};
use crate::error::{Error, Result};
use crate::filter::{FilterMode, FilterSelection};
use crate::stats::{DurationStats, StationStats, TimeStats, TripStatistics, UserStats};
use crate::units::UnitConvertible;

const CITY_PROMPT: &str =
    "Choose out of the available cities\n\t(Chicago, New York City, Washington):\t";
const CITY_ERROR: &str =
    "\nPlease type ONLY the city from the THREE options (Chicago, New York City, Washington).";
const FILTER_PROMPT: &str = "Choose your filter\n\t(Month, Day, Both, None):\n\t\t";
const FILTER_ERROR: &str =
    "\nPlease type ONLY the filter from the FOUR options (Month, Day, Both, None).\n";
const MONTH_PROMPT: &str = "Choose out of the available months\n\t\
                            (January, February, March, April, May, June):\n\t\t";
const MONTH_ERROR: &str = "\nPlease type ONLY the month from the SIX options \
                           (January, February, March, April, May, June).";
const DAY_PROMPT: &str = "Choose a day\n\t\
                          (Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday):\n\t\t";
const DAY_ERROR: &str = "\nPlease type ONLY the day from the SEVEN options \
                         (Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday).";
const ROWS_PROMPT: &str = "\nWould you like to see more data? (yes or no)";
const ROWS_ERROR: &str = "Please type yes or no:";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";
const EMPTY_SELECTION_NOTICE: &str = "No trips match these filters. \
    Most popular values, averages and birth years are reported as not available and totals as 0.";

pub fn parse_city(input: &str) -> Result<City> {
    input.parse()
}

pub fn parse_filter_mode(input: &str) -> Result<FilterMode> {
    input.parse()
}

/// Only January through June are accepted since the trip files stop at June
pub fn parse_month(input: &str) -> Result<Month> {
    match input.parse::<Month>() {
        Ok(month) if month.is_filterable() => Ok(month),
        _ => Err(Error::InvalidFilter {
            kind: "month",
            input: input.trim().into(),
        }),
    }
}

pub fn parse_day(input: &str) -> Result<DayOfWeek> {
    input.parse::<DayOfWeek>().map_err(|_| Error::InvalidFilter {
        kind: "day",
        input: input.trim().into(),
    })
}

pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(Error::InvalidFilter {
            kind: "answer",
            input: other.into(),
        }),
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    registry: CityRegistry,
    config: Config,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Result<Self> {
        let registry = CityRegistry::new(&config)?;
        Ok(Shell {
            input,
            output,
            registry,
            config,
        })
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Asks `question` until `validate` accepts the answer. `None` means input ran out.
    fn prompt<T, F>(
        &mut self,
        question: &str,
        error_message: &str,
        validate: F,
    ) -> Result<Option<T>>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            match validate(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!("Rejected input: {}", e);
                    writeln!(self.output, "{}", error_message)?;
                }
            }
        }
    }

    /// Collects the city and the optional month and day filters
    pub fn get_filters(&mut self) -> Result<Option<(City, FilterSelection)>> {
        writeln!(self.output, "{}", "~".repeat(100))?;
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city = match self.prompt(CITY_PROMPT, CITY_ERROR, parse_city)? {
            Some(city) => city,
            None => return Ok(None),
        };

        let mode = match self.prompt(FILTER_PROMPT, FILTER_ERROR, parse_filter_mode)? {
            Some(mode) => mode,
            None => return Ok(None),
        };

        let mut selection = FilterSelection::none();
        if mode.wants_month() {
            match self.prompt(MONTH_PROMPT, MONTH_ERROR, parse_month)? {
                Some(month) => selection.month = Some(month),
                None => return Ok(None),
            }
        }
        if mode.wants_day() {
            match self.prompt(DAY_PROMPT, DAY_ERROR, parse_day)? {
                Some(day) => selection.day = Some(day),
                None => return Ok(None),
            }
        }

        writeln!(self.output, "{}", "~".repeat(100))?;
        Ok(Some((city, selection)))
    }

    fn section<T, F>(&mut self, title: &str, compute: F) -> Result<T>
    where
        T: fmt::Display,
        F: FnOnce() -> T,
    {
        writeln!(self.output, "\n{}\n", title)?;
        let start = Instant::now();
        let stats = compute();
        writeln!(self.output, "{}", stats)?;
        writeln!(self.output, "\nThis took {:.6} seconds.", start.elapsed().as_secs_f64())?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        Ok(stats)
    }

    /// Prints the four statistic groups for an already filtered dataset and
    /// returns them, durations in the configured unit
    pub fn report(&mut self, dataset: &Dataset) -> Result<TripStatistics> {
        if dataset.is_empty() {
            writeln!(self.output, "\n{}", EMPTY_SELECTION_NOTICE)?;
        }

        let duration_unit = self.config.duration_unit;

        let time = self.section("Calculating The Most Frequent Times of Travel...", || {
            TimeStats::compute(dataset)
        })?;
        let station = self.section("Calculating The Most Popular Stations and Trip...", || {
            StationStats::compute(dataset)
        })?;
        let duration = self.section("Calculating Trip Duration...", || {
            let mut stats = DurationStats::compute(dataset);
            stats.to_units(&duration_unit);
            stats
        })?;
        let user = self.section("Calculating User Stats...", || UserStats::compute(dataset))?;

        Ok(TripStatistics {
            time,
            station,
            duration,
            user,
        })
    }

    /// Shows raw rows a page at a time for as long as the user answers yes
    pub fn see_rows(&mut self, dataset: &Dataset) -> Result<()> {
        let page_size = self.config.page_size.max(1);
        let header = Column::ALL
            .iter()
            .map(|c| c.header())
            .chain(["Month", "Day", "Hour"])
            .collect::<Vec<&str>>()
            .join(" | ");

        for (page, rows) in dataset.records().chunks(page_size).enumerate() {
            match self.prompt(ROWS_PROMPT, ROWS_ERROR, parse_yes_no)? {
                Some(true) => {}
                Some(false) | None => return Ok(()),
            }

            writeln!(self.output, "{}", header)?;
            for (i, row) in rows.iter().enumerate() {
                writeln!(self.output, "{}: {}", page * page_size + i, row)?;
            }
        }

        writeln!(self.output, "\nNo more rows to display.")?;
        Ok(())
    }

    /// Runs analyses until the user declines to restart or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let (city, selection) = match self.get_filters()? {
                Some(choice) => choice,
                None => break,
            };

            writeln!(self.output, "Exploring {} trips ({})", city, selection)?;

            let dataset = Dataset::load(&self.registry, city)?;
            let filtered = selection.apply(&dataset);

            let stats = self.report(&filtered)?;
            debug!("Reported {} trips, total duration {}", filtered.len(), stats.duration.total);
            self.see_rows(&filtered)?;

            write!(self.output, "{}", RESTART_PROMPT)?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => continue,
                _ => break,
            }
        }

        writeln!(self.output, "\nThanks for your time!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;
    use std::io::Cursor;

    #[test]
    fn test_validators() {
        assert_eq!(parse_city(" New  York City ").unwrap(), City::NewYorkCity);
        assert!(parse_city("Paris").is_err());
        assert_eq!(parse_month("March").unwrap(), Month::March);
        assert!(matches!(
            parse_month("july"),
            Err(Error::InvalidFilter { kind: "month", .. })
        ));
        assert_eq!(parse_day("friday").unwrap(), DayOfWeek::Friday);
        assert!(parse_day("someday").is_err());
        assert!(parse_yes_no("YES").unwrap());
        assert!(!parse_yes_no(" no\n").unwrap());
        assert!(parse_yes_no("maybe").is_err());
    }

    #[test]
    fn test_prompts_until_valid() {
        let input = Cursor::new("Boston\nchicago\nweekly\nboth\njuly\njune\nfunday\nmonday\n");
        let mut shell = Shell::new(input, Vec::new(), Config::default()).unwrap();

        let (city, selection) = shell.get_filters().unwrap().unwrap();
        assert_eq!(city, City::Chicago);
        assert_eq!(selection, FilterSelection::both(Month::June, DayOfWeek::Monday));

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(output.matches(CITY_ERROR).count(), 1);
        assert_eq!(output.matches(FILTER_ERROR).count(), 1);
        assert_eq!(output.matches(MONTH_ERROR).count(), 1);
        assert_eq!(output.matches(DAY_ERROR).count(), 1);
    }

    #[test]
    fn test_end_of_input_stops_prompting() {
        let input = Cursor::new("atlantis\n");
        let mut shell = Shell::new(input, Vec::new(), Config::default()).unwrap();
        assert!(shell.get_filters().unwrap().is_none());
    }

    #[test]
    fn test_pager() {
        let raw = "Start Time,User Type\n\
                   2017-01-01 08:00:00,A\n2017-01-01 09:00:00,B\n2017-01-01 10:00:00,C\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();

        let mut config = Config::default();
        config.page_size = 2;
        let mut shell = Shell::new(Cursor::new("yes\nperhaps\nyes\n"), Vec::new(), config).unwrap();
        shell.see_rows(&dataset).unwrap();

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("0: 2017-01-01 08:00:00"));
        assert!(output.contains("2: 2017-01-01 10:00:00"));
        assert_eq!(output.matches(ROWS_ERROR).count(), 1);
        assert!(output.contains("No more rows to display."));
    }

    #[test]
    fn test_report_returns_converted_statistics() {
        let raw = "Start Time,Trip Duration,User Type\n\
                   2017-01-02 08:00:00,1800,Subscriber\n\
                   2017-01-06 09:00:00,5400,Customer\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();

        let mut config = Config::default();
        config.duration_unit = Unit::Hours;
        let mut shell = Shell::new(Cursor::new(""), Vec::new(), config).unwrap();
        let stats = shell.report(&dataset).unwrap();

        assert_eq!(stats.time.popular_day, Some(DayOfWeek::Friday));
        assert_eq!(stats.duration.total.value, Some(2.0));
        assert_eq!(stats.duration.total.unit, Unit::Hours);

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("Most popular day is Friday"));
        assert!(output.contains("Total travel time is 2 hours"));
        assert_eq!(output.matches("This took").count(), 4);
        assert!(!output.contains(EMPTY_SELECTION_NOTICE));
    }

    #[test]
    fn test_report_on_empty_selection() {
        let dataset = Dataset::from_reader(City::Chicago, "Start Time\n".as_bytes()).unwrap();
        let mut shell = Shell::new(Cursor::new(""), Vec::new(), Config::default()).unwrap();
        let stats = shell.report(&dataset).unwrap();

        assert!(stats.time.popular_month.is_none());
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains(EMPTY_SELECTION_NOTICE));
    }

    #[test]
    fn test_pager_stops_on_no() {
        let raw = "Start Time\n2017-01-01 08:00:00\n2017-01-01 09:00:00\n";
        let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();

        let mut config = Config::default();
        config.page_size = 1;
        let mut shell = Shell::new(Cursor::new("yes\nno\n"), Vec::new(), config).unwrap();
        shell.see_rows(&dataset).unwrap();

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("0: 2017-01-01 08:00:00"));
        assert!(!output.contains("1: 2017-01-01 09:00:00"));
        assert!(!output.contains("No more rows"));
    }
}
