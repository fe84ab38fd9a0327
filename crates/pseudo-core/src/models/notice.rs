use serde::{Deserialize, Serialize};

/// Raised when a document needed more distinct tokens than the pool holds.
///
/// Not an error: allocation wraps around and keeps going, but past
/// `pool_size` allocations two different identities may share a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolExhaustionNotice {
    pub pool_size: usize,
    /// Total tokens handed out for the document.
    pub allocated: usize,
}

impl PoolExhaustionNotice {
    /// How many allocations reused an earlier token.
    pub fn reused(&self) -> usize {
        self.allocated.saturating_sub(self.pool_size)
    }
}
