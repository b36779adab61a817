use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{common::money::Money, domain::ids::ProductId};

#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    pub name: String,
    price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn same_record(&self, other: &Product) -> bool {
        self.id == other.id && self.name == other.name && self.price == other.price
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} (Price: {})", self.id, self.name, self.price)
    }
}
