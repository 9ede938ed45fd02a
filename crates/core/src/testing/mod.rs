//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use lotto_core::testing::{fixtures, MockTicketStore};
//!
//! let store = Arc::new(MockTicketStore::new());
//! store.collide_next(9);
//! let mut rng = fixtures::seeded_rng(42);
//! ```

mod mock_ticket_store;

pub use mock_ticket_store::MockTicketStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{Config, DatabaseConfig, LotteryConfig, ServerConfig};

    /// Deterministic RNG for reproducible draws.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Config pointing at the given database path, everything else default.
    pub fn config_with_db(path: impl Into<std::path::PathBuf>) -> Config {
        Config {
            server: ServerConfig::default(),
            database: DatabaseConfig { path: path.into() },
            lottery: LotteryConfig::default(),
        }
    }
}
