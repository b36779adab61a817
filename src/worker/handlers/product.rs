use crate::{
    common::{error::AppError, money::Money},
    domain::{catalog::Catalog, ids::ProductId, ledger::PurchaseStore},
    io::terminal::Terminal,
};

pub fn add<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &mut Catalog<L>,
    terminal: &mut T,
    name: String,
    price: Money,
) -> Result<(), AppError> {
    let product = catalog.add_product(name, price)?;
    terminal.display(&format!("Product {product} was added successfully"))
}

/// Also scrubs the product from every customer's purchases.
pub fn remove<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &mut Catalog<L>,
    terminal: &mut T,
    product: ProductId,
) -> Result<(), AppError> {
    catalog.remove_product(product);
    terminal.display("Removal successful")
}
