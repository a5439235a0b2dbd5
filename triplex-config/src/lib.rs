//! Config crate of triplex.
//!
//! Loads `[[triplex]]` declarations from a toml file, validates them against the runtime
//! capacities and the keymap size, and parses their binding strings into [`ActionSpec`]s.
//!
//! ```toml
//! [constants]
//! max_active = 10
//!
//! [layout]
//! layers = 4
//! keys = 42
//!
//! [[triplex]]
//! name = "nav"
//! bindings = ["Escape", "MO(1)", "LT(2, Space)"]
//! shared_key_positions = [5, 6]
//! shared_layers = [1]
//! ```

use serde_derive::Deserialize;

pub mod action;
pub mod config;
pub mod error;
pub mod types;

pub use action::ActionSpec;
pub use config::{TriplexConfigLoader, Validator};
pub use error::{ConfigError, ConfigResult};
pub use types::*;

/// The whole toml file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriplexTomlConfig {
    /// Runtime capacities
    #[serde(default)]
    pub constants: TriplexConstantsConfig,
    /// Keymap size, optional
    pub layout: Option<LayoutConfig>,
    /// Triplex declarations, in declaration order
    #[serde(default)]
    pub triplex: Vec<TriplexDefinition>,
}
