/// A single write against the persistent key-value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Set { key: &'static str, value: String },
    Remove { key: &'static str },
    /// Wipes the whole store, not just the ledger keys.
    Clear,
}

impl StoreOp {
    pub fn set(key: &'static str, value: impl ToString) -> Self {
        StoreOp::Set {
            key,
            value: value.to_string(),
        }
    }
}
