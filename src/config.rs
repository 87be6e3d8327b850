//! Hasher configuration.

use std::sync::Arc;

use crate::table::{TransitionTable, DEFAULT_SEED};

/// Configuration for a [`Nilsimsa`](crate::Nilsimsa) hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasherConfig {
    /// Transition-table seed. Digests are only comparable within one seed.
    pub seed: u8,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl HasherConfig {
    /// Config with a custom table seed.
    pub fn seed(mut self, seed: u8) -> Self {
        self.seed = seed;
        self
    }

    /// True if this config uses the canonical seed-53 table.
    pub fn is_canonical(&self) -> bool {
        self.seed == DEFAULT_SEED
    }

    /// Build the transition table for this config.
    ///
    /// The canonical seed reuses the shared table instead of regenerating it.
    pub fn table(&self) -> Arc<TransitionTable> {
        if self.is_canonical() {
            TransitionTable::canonical()
        } else {
            Arc::new(TransitionTable::generate(self.seed))
        }
    }
}
