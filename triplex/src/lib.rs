//! # Triplex
//!
//! A triplex is a key behavior that sequences three sub-behaviors on a single key:
//!
//! - a **first-press** action, tapped once when the triplex becomes active,
//! - a **hold** action, pressed while the key is held,
//! - an **interrupt** action, tapped when the triplex is ended by another key or a layer switch.
//!
//! Once activated, a triplex stays alive across releases of its own key, and across presses of
//! other keys or activations of layers which are declared as "shared" in its [`TriplexConfig`].
//! Any other key event or layer activation terminates it.
//!
//! The runtime lives in [`Triplex`]. The host keyboard calls its press/release handlers for the
//! triplex key itself, and delivers every position change and layer change to the
//! [`EventListener`] implementation. Sub-behaviors are executed through a [`BehaviorInvoker`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod behavior;
pub mod channel;
pub mod config;
pub mod error;
pub mod event;
pub mod invoker;
pub mod listener;
pub mod pool;
pub mod processor;

pub use behavior::Triplex;
pub use config::{SubBehavior, TriplexConfig};
pub use error::TriplexError;
pub use event::{BehaviorVerdict, BindingEvent, EventVerdict, LayerStateChanged, PositionStateChanged};
pub use invoker::BehaviorInvoker;
pub use listener::EventListener;
pub use pool::{ActiveTriplex, TriplexPool};

/// Raw mutex type used by the channels in this crate
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// The identifier of a physical key on the keyboard matrix
pub type KeyPosition = u32;

/// The identifier of a keymap layer
pub type LayerId = u8;

/// Default number of triplexes which can be active at the same time
pub const TRIPLEX_MAX_ACTIVE: usize = 10;
/// Max number of shared key positions in a single triplex declaration
pub const TRIPLEX_MAX_SHARED_KEY_POSITIONS: usize = 64;
/// Max number of shared layers in a single triplex declaration
pub const TRIPLEX_MAX_SHARED_LAYERS: usize = 32;
/// Size of the triplex event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
