use crate::{
    common::error::AppError,
    domain::{
        catalog::Catalog,
        ids::{CustomerId, ProductId},
        ledger::PurchaseStore,
    },
    io::{terminal::Terminal, writer::write_lines},
};

pub fn list_customers<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &Catalog<L>,
    terminal: &mut T,
) -> Result<(), AppError> {
    write_lines(terminal, catalog.customers())
}

pub fn list_products<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &Catalog<L>,
    terminal: &mut T,
) -> Result<(), AppError> {
    write_lines(terminal, catalog.products())
}

pub fn customer_purchases<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &Catalog<L>,
    terminal: &mut T,
    customer: CustomerId,
) -> Result<(), AppError> {
    let (customer, products) = catalog.products_bought_by_customer(customer)?;
    terminal.display(&format!("Customer: {customer} has bought such products:"))?;
    write_lines(terminal, products)
}

pub fn product_buyers<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &Catalog<L>,
    terminal: &mut T,
    product: ProductId,
) -> Result<(), AppError> {
    let (product, customers) = catalog.customers_who_bought_product(product)?;
    terminal.display(&format!("Customers that bought the product {product}:"))?;
    write_lines(terminal, customers)
}
