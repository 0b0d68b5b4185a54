pub mod appointment;
pub mod center;
pub mod dataset;
pub mod validation;
