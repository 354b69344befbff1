#[macro_use]
extern crate log;

pub mod config;

mod dashboard;
pub use dashboard::DashboardInput;

pub mod grants;

mod report;
pub use report::Report;
