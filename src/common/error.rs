use crate::common::money::Money;
use crate::domain::ids::{CustomerId, ProductId};

/// Business rule violations raised by the catalog before any state changes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("Customer with ID: {0} was not found")]
    CustomerNotFound(CustomerId),
    #[error("Product with ID: {0} was not found")]
    ProductNotFound(ProductId),
    #[error("not enough money to buy product (customer {customer} has {balance}, price is {price})")]
    InsufficientFunds {
        customer: CustomerId,
        balance: Money,
        price: Money,
    },
    #[error("purchase ledger unavailable: {0}")]
    LedgerUnavailable(String),
    #[error("no {0} identifiers left")]
    IdsExhausted(&'static str),
}

impl MarketError {
    /// Short name shown in the `Error (<kind>): ...` report line.
    pub fn kind(&self) -> &'static str {
        match self {
            MarketError::CustomerNotFound(_) => "CustomerNotFound",
            MarketError::ProductNotFound(_) => "ProductNotFound",
            MarketError::InsufficientFunds { .. } => "InsufficientFunds",
            MarketError::LedgerUnavailable(_) => "LedgerUnavailable",
            MarketError::IdsExhausted(_) => "IdsExhausted",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("seed error: {0}")]
    Seed(String),
    #[error("input stream closed")]
    InputClosed,
    #[error(transparent)]
    Market(#[from] MarketError),
}
