// Triplex declaration types

use serde_derive::Deserialize;

use crate::action::ActionSpec;

/// A `[[triplex]]` table, as written in the toml file
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriplexDefinition {
    pub name: String,
    /// First-press, hold and interrupt actions
    pub bindings: Vec<String>,
    /// Key positions whose events don't end the triplex
    #[serde(default)]
    pub shared_key_positions: Vec<u32>,
    /// Layers whose activation doesn't end the triplex
    #[serde(default)]
    pub shared_layers: Vec<u8>,
}

/// A validated triplex declaration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriplexDeclaration {
    pub name: String,
    pub first_press: ActionSpec,
    pub hold: ActionSpec,
    pub interrupt: ActionSpec,
    pub shared_key_positions: Vec<u32>,
    pub shared_layers: Vec<u8>,
}

impl TriplexDeclaration {
    /// The actions in first-press, hold, interrupt order
    pub fn bindings(&self) -> [ActionSpec; 3] {
        [self.first_press.clone(), self.hold.clone(), self.interrupt.clone()]
    }
}

/// Validated content of a triplex toml file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriplexSettings {
    /// Number of triplexes which can be active at the same time, the pool size of the runtime
    pub max_active: usize,
    /// Triplex declarations, in declaration order
    pub declarations: Vec<TriplexDeclaration>,
}
