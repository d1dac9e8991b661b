pub mod charts;
pub mod demand;
pub mod page;
pub mod reporting;
pub mod tables;
