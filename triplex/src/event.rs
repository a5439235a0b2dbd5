//! Events consumed by the triplex runtime, and the verdicts it returns to the host

use embassy_time::Instant;

use crate::{KeyPosition, LayerId};

/// The event passed to a behavior binding when its key is pressed or released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BindingEvent {
    /// The position of the key which triggers the binding
    pub position: KeyPosition,
    /// When the binding was triggered
    pub timestamp: Instant,
}

impl BindingEvent {
    pub fn new(position: KeyPosition, timestamp: Instant) -> Self {
        Self { position, timestamp }
    }

    /// Create a binding event at `position`, timestamped now
    pub fn now(position: KeyPosition) -> Self {
        Self::new(position, Instant::now())
    }
}

/// A key position was pressed or released, anywhere on the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionStateChanged {
    pub position: KeyPosition,
    pub pressed: bool,
    pub timestamp: Instant,
}

impl PositionStateChanged {
    pub fn new(position: KeyPosition, pressed: bool) -> Self {
        Self {
            position,
            pressed,
            timestamp: Instant::now(),
        }
    }

    /// The binding event for the key which changed
    pub fn binding_event(&self) -> BindingEvent {
        BindingEvent::new(self.position, self.timestamp)
    }
}

/// A layer was activated (`state == true`) or deactivated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerStateChanged {
    pub layer: LayerId,
    pub state: bool,
    pub timestamp: Instant,
}

impl LayerStateChanged {
    pub fn new(layer: LayerId, state: bool) -> Self {
        Self {
            layer,
            state,
            timestamp: Instant::now(),
        }
    }
}

/// Result of a behavior binding handler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BehaviorVerdict {
    /// The behavior fully handled the key event, don't forward it
    Opaque,
    /// The behavior didn't handle the key event, the host should try the next binding
    Transparent,
}

/// Result of an event listener
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventVerdict {
    /// The listener observed the event, keep delivering it to other listeners
    Bubble,
    /// The listener consumed the event
    Stop,
}
