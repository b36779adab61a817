pub type CustomerId = u64;
pub type ProductId = u64;

/// Sequential identifier generator, one per entity type.
///
/// The last id handed out is `u64::MAX`; after that the sequence is empty
/// instead of wrapping back to ids already in use.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: Option<u64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Hands out the current value and advances the sequence.
    pub fn next_id(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    #[cfg(test)]
    pub(crate) fn peek(&self) -> Option<u64> {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
