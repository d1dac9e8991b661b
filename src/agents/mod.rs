pub mod planner;
pub mod pricing;
pub mod store;
pub mod traits;
pub mod warehouse;
