pub mod io;
pub mod ranking;
pub mod report;
