pub mod catalog;
pub mod customer;
pub mod ids;
pub mod ledger;
pub mod product;
