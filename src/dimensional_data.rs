use crate::units::{Unit, UnitConvertible};
use std::fmt;
use std::option::Option;
use std::str::FromStr;

pub const NOT_AVAILABLE: &str = "not available";

#[derive(Clone, Debug, PartialEq)]
pub struct DimensionalData<T> {
    pub value: Option<T>,
    pub variable_name: String,
    pub unit: Unit,
}

impl<T> DimensionalData<T> {
    pub fn new(value: Option<T>, variable_name: &str, unit: Unit) -> DimensionalData<T> {
        DimensionalData {
            value,
            variable_name: variable_name.into(),
            unit,
        }
    }
}

impl<T> DimensionalData<T>
where
    T: FromStr,
{
    pub fn from_raw_data(raw_data: &str, variable_name: &str, unit: Unit) -> DimensionalData<T> {
        DimensionalData::new(raw_data.trim().parse().ok(), variable_name, unit)
    }
}

impl UnitConvertible<DimensionalData<f64>> for DimensionalData<f64> {
    fn to_units(&mut self, new_units: &Unit) {
        self.value = self.value.map(|val| self.unit.convert(new_units, val));
        self.unit = *new_units;
    }
}

impl<T> fmt::Display for DimensionalData<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value {
            Some(ref val) => write!(f, "{} {}", val, self.unit),
            None => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}
