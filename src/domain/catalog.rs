use tracing::{debug, info, warn};

use crate::{
    common::{error::MarketError, money::Money},
    domain::{
        customer::Customer,
        ids::{CustomerId, IdSequence, ProductId},
        ledger::{PurchaseLedger, PurchaseStore},
        product::Product,
    },
};

/// Outcome of a successful `buy`: the customer after the debit and the product.
#[derive(Debug, Clone)]
pub struct Purchase {
    pub customer: Customer,
    pub product: Product,
}

/// Owner of the live customers, the live products and the purchase ledger.
///
/// All mutation goes through here, so a removed customer or product is always
/// forgotten by the ledger as well.
#[derive(Debug)]
pub struct Catalog<L = PurchaseLedger> {
    customers: Vec<Customer>,
    products: Vec<Product>,
    ledger: L,
    customer_ids: IdSequence,
    product_ids: IdSequence,
}

impl Catalog<PurchaseLedger> {
    pub fn new() -> Self {
        Self::with_ledger(PurchaseLedger::new())
    }

    /// Empty catalog whose generators continue from the given sequences.
    pub fn with_sequences(customer_ids: IdSequence, product_ids: IdSequence) -> Self {
        Self {
            customers: Vec::new(),
            products: Vec::new(),
            ledger: PurchaseLedger::new(),
            customer_ids,
            product_ids,
        }
    }

    /// Demo data the menu starts with when no seed file is given.
    pub fn with_defaults() -> Self {
        let customers: Vec<Customer> = [
            ("Hulda", "Serafini"),
            ("Calixta", "Vilario"),
            ("Maryanne", "Storstrand"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((first, last), id)| Customer::new(id, first, last, Money::new(1000)))
        .collect();
        let products: Vec<Product> = [("Milk", 15), ("Eggs", 10), ("Pasta", 11)]
            .into_iter()
            .zip(1..)
            .map(|((name, price), id)| Product::new(id, name, Money::new(price)))
            .collect();

        Self {
            customer_ids: IdSequence::starting_at(customers.len() as u64 + 1),
            product_ids: IdSequence::starting_at(products.len() as u64 + 1),
            customers,
            products,
            ledger: PurchaseLedger::new(),
        }
    }
}

impl Default for Catalog<PurchaseLedger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: PurchaseStore> Catalog<L> {
    pub fn with_ledger(ledger: L) -> Self {
        Self {
            customers: Vec::new(),
            products: Vec::new(),
            ledger,
            customer_ids: IdSequence::new(),
            product_ids: IdSequence::new(),
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn add_customer(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        balance: Money,
    ) -> Result<&Customer, MarketError> {
        let id = self
            .customer_ids
            .next_id()
            .ok_or(MarketError::IdsExhausted("customer"))?;
        let customer = Customer::new(id, first_name, last_name, balance);
        info!(customer = id, %balance, "customer added");
        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        price: Money,
    ) -> Result<&Product, MarketError> {
        let id = self
            .product_ids
            .next_id()
            .ok_or(MarketError::IdsExhausted("product"))?;
        let product = Product::new(id, name, price);
        info!(product = id, %price, "product added");
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Debits the customer and records the purchase as one unit.
    ///
    /// Existence is checked customer first, then product, then funds; every
    /// failure happens before mutation. If the ledger refuses the record the
    /// debit is restored.
    pub fn buy(
        &mut self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<Purchase, MarketError> {
        let customer_idx = self
            .customers
            .iter()
            .position(|c| c.id() == customer_id)
            .ok_or(MarketError::CustomerNotFound(customer_id))?;
        let product = self
            .product(product_id)
            .cloned()
            .ok_or(MarketError::ProductNotFound(product_id))?;

        let customer = &mut self.customers[customer_idx];
        let previous = customer.balance;
        let Some(remaining) = previous.checked_sub(product.price()) else {
            warn!(
                customer = customer_id,
                product = product_id,
                balance = %previous,
                price = %product.price(),
                "purchase rejected: insufficient funds"
            );
            return Err(MarketError::InsufficientFunds {
                customer: customer_id,
                balance: previous,
                price: product.price(),
            });
        };

        customer.balance = remaining;
        if let Err(err) = self.ledger.record_purchase(customer_id, product_id) {
            customer.balance = previous;
            warn!(customer = customer_id, product = product_id, error = %err, "purchase rolled back");
            return Err(err);
        }

        info!(customer = customer_id, product = product_id, balance = %remaining, "purchase recorded");
        Ok(Purchase {
            customer: customer.clone(),
            product,
        })
    }

    /// Unknown ids are not an error; `None` is returned.
    pub fn remove_customer(&mut self, id: CustomerId) -> Option<Customer> {
        let removed = self
            .customers
            .iter()
            .position(|c| c.id() == id)
            .map(|idx| self.customers.remove(idx));
        self.ledger.forget_customer(id);
        info!(customer = id, existed = removed.is_some(), "customer removed");
        removed
    }

    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        let removed = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .map(|idx| self.products.remove(idx));
        self.ledger.forget_product(id);
        info!(product = id, existed = removed.is_some(), "product removed");
        removed
    }

    /// The customer and the still-existing products they bought, in catalog
    /// order.
    pub fn products_bought_by_customer(
        &self,
        id: CustomerId,
    ) -> Result<(&Customer, Vec<&Product>), MarketError> {
        let customer = self.customer(id).ok_or(MarketError::CustomerNotFound(id))?;
        let bought = self.ledger.products_bought_by(id);
        let products: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| bought.contains(&p.id()))
            .collect();
        debug!(customer = id, count = products.len(), "products bought by customer");
        Ok((customer, products))
    }

    /// The product and the still-existing customers who bought it, in catalog
    /// order.
    pub fn customers_who_bought_product(
        &self,
        id: ProductId,
    ) -> Result<(&Product, Vec<&Customer>), MarketError> {
        let product = self.product(id).ok_or(MarketError::ProductNotFound(id))?;
        let buyers = self.ledger.customers_who_bought(id);
        let customers: Vec<&Customer> = self
            .customers
            .iter()
            .filter(|c| buyers.contains(&c.id()))
            .collect();
        debug!(product = id, count = customers.len(), "customers who bought product");
        Ok((product, customers))
    }
}
