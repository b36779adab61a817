use tracing::debug;

use crate::{
    common::{command::MenuCommand, error::AppError},
    domain::{catalog::Catalog, ledger::PurchaseStore},
    io::terminal::Terminal,
    worker::handlers::{buy, customer, product, report},
};

/// What the session loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process<L, T>(
        &mut self,
        catalog: &mut Catalog<L>,
        terminal: &mut T,
        command: MenuCommand,
    ) -> Result<Flow, AppError>
    where
        L: PurchaseStore,
        T: Terminal + ?Sized,
    {
        debug!(?command, "processing menu command");
        match command {
            MenuCommand::AddCustomer {
                first_name,
                last_name,
                balance,
            } => {
                customer::add(catalog, terminal, first_name, last_name, balance)?;
            }
            MenuCommand::AddProduct { name, price } => {
                product::add(catalog, terminal, name, price)?;
            }
            MenuCommand::Buy {
                customer: customer_id,
                product: product_id,
            } => {
                buy::handle(catalog, terminal, customer_id, product_id)?;
            }
            MenuCommand::ListCustomers => {
                report::list_customers(catalog, terminal)?;
            }
            MenuCommand::ListProducts => {
                report::list_products(catalog, terminal)?;
            }
            MenuCommand::CustomerPurchases {
                customer: customer_id,
            } => {
                report::customer_purchases(catalog, terminal, customer_id)?;
            }
            MenuCommand::ProductBuyers {
                product: product_id,
            } => {
                report::product_buyers(catalog, terminal, product_id)?;
            }
            MenuCommand::RemoveCustomer {
                customer: customer_id,
            } => {
                customer::remove(catalog, terminal, customer_id)?;
            }
            MenuCommand::RemoveProduct {
                product: product_id,
            } => {
                product::remove(catalog, terminal, product_id)?;
            }
            MenuCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}
