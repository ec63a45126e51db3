pub mod ico;
pub mod png;
pub mod report;
