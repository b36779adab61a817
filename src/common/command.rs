use crate::{
    common::money::Money,
    domain::ids::{CustomerId, ProductId},
};

/// A menu selection together with the arguments gathered for it. Produced by
/// the reader and consumed by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    AddCustomer {
        first_name: String,
        last_name: String,
        balance: Money,
    },
    AddProduct {
        name: String,
        price: Money,
    },
    Buy {
        customer: CustomerId,
        product: ProductId,
    },
    ListCustomers,
    ListProducts,
    CustomerPurchases { customer: CustomerId },
    ProductBuyers { product: ProductId },
    RemoveCustomer { customer: CustomerId },
    RemoveProduct { product: ProductId },
    Exit,
}
