// Triplex constants configuration types

use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

/// Upper limit of `max_shared_key_positions`, the capacity of the runtime's shared key position list
pub const SHARED_KEY_POSITIONS_LIMIT: usize = 64;
/// Upper limit of `max_shared_layers`, the capacity of the runtime's shared layer list
pub const SHARED_LAYERS_LIMIT: usize = 32;

/// Capacities of the triplex runtime
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriplexConstantsConfig {
    /// Maximum number of triplexes which are active at the same time
    #[serde_inline_default(10)]
    pub max_active: usize,
    /// Maximum number of shared key positions of a triplex
    #[serde_inline_default(64)]
    pub max_shared_key_positions: usize,
    /// Maximum number of shared layers of a triplex
    #[serde_inline_default(32)]
    pub max_shared_layers: usize,
}

/// This separate Default impl is needed when `[constants]` section is not set in the toml file
impl Default for TriplexConstantsConfig {
    fn default() -> Self {
        Self {
            max_active: 10,
            max_shared_key_positions: 64,
            max_shared_layers: 32,
        }
    }
}
