//! Descriptive statistics over bikeshare trip records for Chicago, New York City
//! and Washington.
//!
//! The pipeline is `CityRegistry` -> `Dataset::load` (column normalization and
//! time derivation) -> `FilterSelection::apply` -> `TripStatistics::compute`.
//! The interactive prompts live in `shell` and drive the same calls.

pub mod calendar;
pub mod city;
pub mod config;
pub mod data;
pub mod dimensional_data;
pub mod error;
pub mod filter;
pub mod shell;
pub mod stats;
pub mod tools;
pub mod units;

pub use city::{City, CityRegistry};
pub use config::Config;
pub use data::Dataset;
pub use error::{Error, Result};
pub use filter::{FilterMode, FilterSelection};
pub use stats::TripStatistics;
