use std::collections::BTreeMap;

use crate::{
    common::error::MarketError,
    domain::ids::{CustomerId, ProductId},
};

/// Storage for the "customer bought product" relation, by identifier only.
///
/// The catalog owns exactly one store and is the only caller, so removals
/// always cascade here. `record_purchase` is fallible so a storage-backed store
/// can refuse a write; the catalog rolls the balance back when it does.
pub trait PurchaseStore {
    fn record_purchase(
        &mut self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<(), MarketError>;

    fn products_bought_by(&self, customer: CustomerId) -> Vec<ProductId>;

    fn customers_who_bought(&self, product: ProductId) -> Vec<CustomerId>;

    fn forget_customer(&mut self, customer: CustomerId);

    fn forget_product(&mut self, product: ProductId);
}

/// In-memory purchase ledger. Entries are created on first purchase and
/// keep products in the order they were first bought.
#[derive(Debug, Default)]
pub struct PurchaseLedger {
    purchases: BTreeMap<CustomerId, Vec<ProductId>>,
}

impl PurchaseLedger {
    pub fn new() -> Self {
        Self {
            purchases: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn has_entry(&self, customer: CustomerId) -> bool {
        self.purchases.contains_key(&customer)
    }
}

impl PurchaseStore for PurchaseLedger {
    fn record_purchase(
        &mut self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<(), MarketError> {
        let bought = self.purchases.entry(customer).or_default();
        if !bought.contains(&product) {
            bought.push(product);
        }
        Ok(())
    }

    fn products_bought_by(&self, customer: CustomerId) -> Vec<ProductId> {
        self.purchases.get(&customer).cloned().unwrap_or_default()
    }

    fn customers_who_bought(&self, product: ProductId) -> Vec<CustomerId> {
        self.purchases
            .iter()
            .filter(|(_, bought)| bought.contains(&product))
            .map(|(customer, _)| *customer)
            .collect()
    }

    fn forget_customer(&mut self, customer: CustomerId) {
        self.purchases.remove(&customer);
    }

    fn forget_product(&mut self, product: ProductId) {
        // empty entries stay; only the customer removal drops an entry
        for bought in self.purchases.values_mut() {
            bought.retain(|p| *p != product);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_creates_entry_lazily() {
        let mut ledger = PurchaseLedger::new();
        assert!(!ledger.has_entry(1));

        ledger.record_purchase(1, 5).unwrap();

        assert!(ledger.has_entry(1));
        assert_eq!(ledger.products_bought_by(1), vec![5]);
    }

    #[test]
    fn record_is_idempotent_per_product() {
        let mut ledger = PurchaseLedger::new();
        ledger.record_purchase(1, 5).unwrap();
        ledger.record_purchase(1, 6).unwrap();
        ledger.record_purchase(1, 5).unwrap(); // duplicate

        assert_eq!(ledger.products_bought_by(1), vec![5, 6]);
    }

    #[test]
    fn unknown_customer_has_no_products() {
        let ledger = PurchaseLedger::new();
        assert!(ledger.products_bought_by(42).is_empty());
        assert!(ledger.customers_who_bought(42).is_empty());
    }

    #[test]
    fn customers_who_bought_scans_every_entry() {
        let mut ledger = PurchaseLedger::new();
        ledger.record_purchase(3, 1).unwrap();
        ledger.record_purchase(1, 1).unwrap();
        ledger.record_purchase(2, 2).unwrap();

        assert_eq!(ledger.customers_who_bought(1), vec![1, 3]);
        assert_eq!(ledger.customers_who_bought(2), vec![2]);
    }

    #[test]
    fn forget_customer_drops_the_whole_entry() {
        let mut ledger = PurchaseLedger::new();
        ledger.record_purchase(1, 1).unwrap();
        ledger.record_purchase(1, 2).unwrap();
        ledger.record_purchase(2, 1).unwrap();

        ledger.forget_customer(1);

        assert!(!ledger.has_entry(1));
        assert_eq!(ledger.customers_who_bought(1), vec![2]);
        assert!(ledger.customers_who_bought(2).is_empty());

        // no-op for unknown customers
        ledger.forget_customer(99);
        assert!(ledger.has_entry(2));
    }

    #[test]
    fn forget_product_scrubs_but_keeps_entries() {
        let mut ledger = PurchaseLedger::new();
        ledger.record_purchase(1, 1).unwrap();
        ledger.record_purchase(2, 1).unwrap();
        ledger.record_purchase(2, 2).unwrap();

        ledger.forget_product(1);

        assert!(ledger.products_bought_by(1).is_empty());
        assert!(ledger.has_entry(1), "entry survives with an empty set");
        assert_eq!(ledger.products_bought_by(2), vec![2]);
        assert!(ledger.customers_who_bought(1).is_empty());
    }
}
