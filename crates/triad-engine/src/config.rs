//! Configuration for a game driver.

/// Configuration for a [`crate::game::Game`].
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible dice.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
