pub mod product;
pub mod records;
pub mod forecast;
