// Layout configuration types

use serde_derive::Deserialize;

/// Size of the keymap, used to check the shared key positions and layers
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Number of layers
    pub layers: u8,
    /// Number of key positions
    pub keys: u32,
}
