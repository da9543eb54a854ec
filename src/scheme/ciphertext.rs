#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    /// slot values, kept in the clear
    pub(crate) slots: Vec<u64>,
    /// identity of the key set that encrypted it
    pub(crate) key_id: u64,
}

impl Ciphertext {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
