//! Engine configuration.

use crate::engine::IndexEngine;
use vortex_durability::SaveMode;

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// How `save` promotes the index file
    pub save_mode: SaveMode,
}

impl EngineConfig {
    /// Configuration that fsyncs every save
    pub fn strict() -> Self {
        Self {
            save_mode: SaveMode::Strict,
        }
    }
}

/// Builder for [`IndexEngine`].
///
/// # Example
///
/// ```
/// use vortex_engine::{IndexEngine, SaveMode};
///
/// let engine = IndexEngine::builder().strict().build();
/// assert_eq!(engine.config().save_mode, SaveMode::Strict);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the save mode
    pub fn save_mode(mut self, mode: SaveMode) -> Self {
        self.config.save_mode = mode;
        self
    }

    /// fsync on every save
    pub fn strict(self) -> Self {
        self.save_mode(SaveMode::Strict)
    }

    /// Rename without fsync (default)
    pub fn buffered(self) -> Self {
        self.save_mode(SaveMode::Buffered)
    }

    /// Build an engine with an empty index
    pub fn build(self) -> IndexEngine {
        IndexEngine::with_config(self.config)
    }
}
