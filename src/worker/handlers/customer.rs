use crate::{
    common::{error::AppError, money::Money},
    domain::{catalog::Catalog, ids::CustomerId, ledger::PurchaseStore},
    io::terminal::Terminal,
};

pub fn add<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &mut Catalog<L>,
    terminal: &mut T,
    first_name: String,
    last_name: String,
    balance: Money,
) -> Result<(), AppError> {
    let customer = catalog.add_customer(first_name, last_name, balance)?;
    terminal.display(&format!("Customer {customer} added successfully"))
}

/// Succeeds even when no such customer exists.
pub fn remove<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &mut Catalog<L>,
    terminal: &mut T,
    customer: CustomerId,
) -> Result<(), AppError> {
    catalog.remove_customer(customer);
    terminal.display("Removal successful")
}
