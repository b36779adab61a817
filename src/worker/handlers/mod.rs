pub mod buy;
pub mod customer;
pub mod product;
pub mod report;
