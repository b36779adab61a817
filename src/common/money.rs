use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, Clone, Copy, Default)]
/// A non-negative amount of whole currency units.
///
/// Balances and prices are both `Money`, so they can only be compared and
/// subtracted with each other and never mixed up with identifiers.
/// Subtraction is only offered as `checked_sub`, so a balance cannot go
/// below zero.
///
/// # Examples
/// ```
/// use marketplace::common::money::Money;
///
/// let balance = Money::new(1000);
/// let price = Money::new(15);
/// assert_eq!(balance.checked_sub(price).map(|m| m.as_u64()), Some(985));
/// assert_eq!(price.checked_sub(balance), None);
/// assert_eq!(price.to_string(), "15");
/// ```
pub struct Money(u64);

impl Money {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// `None` when `rhs` is larger than `self`.
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
