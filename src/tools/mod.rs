pub mod analysis;
pub mod date;
pub mod math;
