//! Event processor which drives the triplex runtime from the keyboard event stream.
//!
//! The processor is the glue between the keyboard and the [`Triplex`] runtime: it receives key
//! position and layer events, delivers them to the triplex listeners, then dispatches the binding
//! of the key which changed.

use crate::behavior::Triplex;
use crate::channel::TRIPLEX_EVENT_CHANNEL;
use crate::config::TriplexConfig;
use crate::event::{LayerStateChanged, PositionStateChanged};
use crate::invoker::BehaviorInvoker;
use crate::listener::EventListener;
use crate::{KeyPosition, LayerId, TRIPLEX_MAX_ACTIVE};

/// Events consumed by [`TriplexProcessor`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriplexEvent {
    Position(PositionStateChanged),
    Layer(LayerStateChanged),
}

impl TriplexEvent {
    /// A key position change, timestamped now
    pub fn key(position: KeyPosition, pressed: bool) -> Self {
        Self::Position(PositionStateChanged::new(position, pressed))
    }

    /// A layer change, timestamped now
    pub fn layer(layer: LayerId, state: bool) -> Self {
        Self::Layer(LayerStateChanged::new(layer, state))
    }
}

/// What a key position is bound to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyBinding<B> {
    /// The key does nothing
    #[default]
    No,
    /// The key is a triplex, the value is the index of its declaration
    Triplex(usize),
    /// The key is an ordinary behavior, pressed and released with the key
    Behavior(B),
}

pub struct TriplexProcessor<'a, B, I: BehaviorInvoker<B>, const N: usize = TRIPLEX_MAX_ACTIVE> {
    triplex: &'a Triplex<'a, B, N>,
    /// Triplex declarations, indexed by [`KeyBinding::Triplex`]
    configs: &'a [TriplexConfig<B>],
    /// Binding of every key position, indexed by the position
    bindings: &'a [KeyBinding<B>],
    invoker: I,
}

impl<'a, B, I: BehaviorInvoker<B>, const N: usize> TriplexProcessor<'a, B, I, N> {
    pub fn new(
        triplex: &'a Triplex<'a, B, N>,
        configs: &'a [TriplexConfig<B>],
        bindings: &'a [KeyBinding<B>],
        invoker: I,
    ) -> Self {
        Self {
            triplex,
            configs,
            bindings,
            invoker,
        }
    }

    /// Receive events from [`TRIPLEX_EVENT_CHANNEL`] and process them
    pub async fn run(&mut self) -> ! {
        loop {
            let event = TRIPLEX_EVENT_CHANNEL.receive().await;
            self.process(event);
        }
    }

    pub fn process(&mut self, event: TriplexEvent) {
        match event {
            TriplexEvent::Position(e) => {
                // Active triplexes see the event before the key's own binding runs
                self.triplex.on_position_state_changed(e, &mut self.invoker);
                self.dispatch_binding(e);
            }
            TriplexEvent::Layer(e) => {
                self.triplex.on_layer_state_changed(e, &mut self.invoker);
            }
        }
    }

    fn dispatch_binding(&mut self, e: PositionStateChanged) {
        let (configs, bindings) = (self.configs, self.bindings);
        let Some(binding) = bindings.get(e.position as usize) else {
            warn!("No binding at key position {}", e.position);
            return;
        };
        let event = e.binding_event();
        match binding {
            KeyBinding::No => (),
            KeyBinding::Triplex(idx) => {
                let Some(config) = configs.get(*idx) else {
                    error!("Triplex declaration #{} at position {} doesn't exist", idx, e.position);
                    return;
                };
                if e.pressed {
                    self.triplex.on_binding_pressed(config, event, &mut self.invoker);
                } else {
                    self.triplex.on_binding_released(config, event, &mut self.invoker);
                }
            }
            KeyBinding::Behavior(b) => {
                if e.pressed {
                    self.invoker.press(b, event);
                } else {
                    self.invoker.release(b, event);
                }
            }
        }
    }
}
