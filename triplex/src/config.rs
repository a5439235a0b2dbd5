//! Static configuration of a triplex declaration

use heapless::Vec;

use crate::error::TriplexError;
use crate::{KeyPosition, LayerId, TRIPLEX_MAX_SHARED_KEY_POSITIONS, TRIPLEX_MAX_SHARED_LAYERS};

/// The three sub-behaviors of a triplex, the discriminant is the index in [`TriplexConfig::bindings`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SubBehavior {
    /// Tapped once, on the first press of an activation
    FirstPress = 0,
    /// Pressed on every press of the triplex key, released on its release or on termination
    Hold = 1,
    /// Tapped when the triplex is terminated by another key or a layer activation
    Interrupt = 2,
}

/// Configuration of one triplex declaration.
///
/// The config is created once at startup and never mutated. Every active triplex keeps a reference
/// to the config it was created from, so the config must outlive the runtime.
///
/// `B` is the binding type of the host keyboard, it's never inspected by the triplex,
/// only passed back to the [`crate::BehaviorInvoker`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriplexConfig<B> {
    /// Key positions whose events don't terminate an active triplex
    pub(crate) shared_key_positions: Vec<KeyPosition, TRIPLEX_MAX_SHARED_KEY_POSITIONS>,
    /// Layers whose activation doesn't terminate an active triplex
    pub(crate) shared_layers: Vec<LayerId, TRIPLEX_MAX_SHARED_LAYERS>,
    /// First-press, hold and interrupt bindings
    pub(crate) bindings: [B; 3],
}

impl<B> TriplexConfig<B> {
    pub fn new(
        bindings: [B; 3],
        shared_key_positions: &[KeyPosition],
        shared_layers: &[LayerId],
    ) -> Result<Self, TriplexError> {
        Ok(Self {
            shared_key_positions: Vec::from_slice(shared_key_positions)
                .map_err(|_| TriplexError::TooManySharedKeyPositions)?,
            shared_layers: Vec::from_slice(shared_layers).map_err(|_| TriplexError::TooManySharedLayers)?,
            bindings,
        })
    }

    /// Create a triplex config without any shared key position or layer.
    ///
    /// Such a triplex is terminated by any other key event and any layer activation.
    pub fn exclusive(bindings: [B; 3]) -> Self {
        Self {
            shared_key_positions: Vec::new(),
            shared_layers: Vec::new(),
            bindings,
        }
    }

    /// Get the binding of the given sub-behavior
    pub fn binding(&self, sub_behavior: SubBehavior) -> &B {
        &self.bindings[sub_behavior as usize]
    }

    pub fn bindings(&self) -> &[B; 3] {
        &self.bindings
    }

    pub fn shared_key_positions(&self) -> &[KeyPosition] {
        &self.shared_key_positions
    }

    pub fn shared_layers(&self) -> &[LayerId] {
        &self.shared_layers
    }

    /// Whether the events of `position` keep the triplex alive
    pub fn is_key_position_shared(&self, position: KeyPosition) -> bool {
        self.shared_key_positions.contains(&position)
    }

    /// Whether the activation of `layer` keeps the triplex alive
    pub fn is_layer_shared(&self, layer: LayerId) -> bool {
        self.shared_layers.contains(&layer)
    }
}
