//! Command implementations.

mod doctor;
mod setup;

pub use doctor::DoctorCommand;
pub use setup::SetupCommand;
