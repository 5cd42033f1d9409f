pub mod calendar;
pub mod chicken;
pub mod config;
pub mod currency;
pub mod error;
pub mod flock;
pub mod report;
pub mod rng;

pub use chicken::{Chicken, ChickenId, DayOutcome};
pub use config::{RunSettings, SettingsLoader};
pub use error::FlockError;
pub use flock::Flock;
pub use report::FlockReport;
