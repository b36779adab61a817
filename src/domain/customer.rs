use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{common::money::Money, domain::ids::CustomerId};

#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    /// Only the buy transaction changes this.
    pub(crate) balance: Money,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance,
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Field-by-field comparison, unlike `==` which only looks at the id.
    pub fn same_record(&self, other: &Customer) -> bool {
        self.id == other.id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.balance == other.balance
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} (Balance: {})",
            self.id, self.first_name, self.last_name, self.balance
        )
    }
}
