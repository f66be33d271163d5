pub mod ranking;
pub mod recipes;
pub mod report;
