pub mod appointments;
pub mod centers;
