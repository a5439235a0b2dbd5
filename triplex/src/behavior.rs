//! Triplex runtime: handlers of the triplex key itself, and termination of active triplexes.

use core::cell::RefCell;

use crate::config::{SubBehavior, TriplexConfig};
use crate::event::{BehaviorVerdict, BindingEvent, EventVerdict, LayerStateChanged, PositionStateChanged};
use crate::invoker::BehaviorInvoker;
use crate::listener::EventListener;
use crate::pool::{ActiveTriplex, TriplexPool};
use crate::{KeyPosition, TRIPLEX_MAX_ACTIVE};

/// The triplex runtime, shared by all triplex declarations of a keyboard.
///
/// All entry points take `&self` and never hold the pool borrowed while a sub-behavior is invoked,
/// so an invoker may synchronously deliver new events back to the runtime.
/// The runtime is `!Sync`, it must be driven from a single executor.
pub struct Triplex<'a, B, const N: usize = TRIPLEX_MAX_ACTIVE> {
    pool: RefCell<TriplexPool<'a, B, N>>,
}

impl<B, const N: usize> Default for Triplex<'_, B, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B, const N: usize> Triplex<'a, B, N> {
    pub fn new() -> Self {
        Self {
            pool: RefCell::new(TriplexPool::new()),
        }
    }

    /// The triplex key at `event.position` is pressed.
    ///
    /// Activates a triplex at the position if there's none, fires the first-press action once per
    /// activation, then presses the hold action.
    pub fn on_binding_pressed<I: BehaviorInvoker<B>>(
        &self,
        config: &'a TriplexConfig<B>,
        event: BindingEvent,
        invoker: &mut I,
    ) -> BehaviorVerdict {
        let first_press = {
            let mut pool = self.pool.borrow_mut();
            let slot = match pool.find_active(event.position) {
                Some(slot) => slot,
                None => match pool.allocate(event.position, config) {
                    Ok(slot) => {
                        debug!("{} created new triplex", event.position);
                        slot
                    }
                    Err(e) => {
                        error!("Unable to create new triplex at {}: {:?}", event.position, e);
                        return BehaviorVerdict::Opaque;
                    }
                },
            };
            debug!("{} triplex pressed", event.position);
            let Some(triplex) = pool.get_mut(slot) else {
                return BehaviorVerdict::Opaque;
            };
            core::mem::replace(&mut triplex.first_press, false)
        };

        if first_press {
            invoker.tap(config.binding(SubBehavior::FirstPress), event);
        }

        {
            // The first-press action might have ended the triplex, look it up again
            let mut pool = self.pool.borrow_mut();
            let Some(triplex) = pool.find_active(event.position).and_then(|slot| pool.get_mut(slot)) else {
                debug!("{} triplex ended before its hold action", event.position);
                return BehaviorVerdict::Opaque;
            };
            triplex.pressed = true;
        }

        invoker.press(config.binding(SubBehavior::Hold), event);
        BehaviorVerdict::Opaque
    }

    /// The triplex key at `event.position` is released.
    ///
    /// Releases the hold action. The triplex stays active until it's terminated by another key or a
    /// layer activation.
    pub fn on_binding_released<I: BehaviorInvoker<B>>(
        &self,
        config: &'a TriplexConfig<B>,
        event: BindingEvent,
        invoker: &mut I,
    ) -> BehaviorVerdict {
        debug!("{} triplex keybind released", event.position);
        {
            let mut pool = self.pool.borrow_mut();
            let Some(triplex) = pool.find_active(event.position).and_then(|slot| pool.get_mut(slot)) else {
                // Already terminated
                return BehaviorVerdict::Opaque;
            };
            triplex.pressed = false;
        }

        invoker.release(config.binding(SubBehavior::Hold), event);
        BehaviorVerdict::Opaque
    }

    /// Whether there's an active triplex at `position`
    pub fn is_active(&self, position: KeyPosition) -> bool {
        self.pool.borrow().find_active(position).is_some()
    }

    /// Snapshot of the active triplex at `position`
    pub fn active_triplex(&self, position: KeyPosition) -> Option<ActiveTriplex<'a, B>> {
        let pool = self.pool.borrow();
        pool.find_active(position).and_then(|slot| pool.get(slot).copied())
    }

    pub fn active_count(&self) -> usize {
        self.pool.borrow().active_count()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free the first active triplex matching `should_terminate`, then fire its interrupt action.
    ///
    /// At most one triplex is terminated per call. Returns whether one was terminated.
    fn terminate_first<I, F>(&self, invoker: &mut I, mut should_terminate: F) -> bool
    where
        I: BehaviorInvoker<B>,
        F: FnMut(&ActiveTriplex<'a, B>) -> bool,
    {
        let terminated = {
            let mut pool = self.pool.borrow_mut();
            let slot = pool
                .iter_active()
                .find(|(_, t)| should_terminate(t))
                .map(|(slot, _)| slot);
            // The slot is freed before the interrupt action fires, so re-entrant events see it free
            slot.and_then(|slot| pool.release(slot))
        };

        match terminated {
            Some(triplex) => {
                self.fire_interrupt(triplex, invoker);
                true
            }
            None => false,
        }
    }

    fn fire_interrupt<I: BehaviorInvoker<B>>(&self, triplex: ActiveTriplex<'a, B>, invoker: &mut I) {
        let Some(config) = triplex.config else {
            return;
        };
        let event = BindingEvent::now(triplex.position);
        if triplex.pressed {
            invoker.release(config.binding(SubBehavior::Hold), event);
        }
        invoker.tap(config.binding(SubBehavior::Interrupt), event);
    }
}

impl<'a, B, const N: usize> EventListener<B> for Triplex<'a, B, N> {
    fn on_position_state_changed<I: BehaviorInvoker<B>>(
        &self,
        event: PositionStateChanged,
        invoker: &mut I,
    ) -> EventVerdict {
        self.terminate_first(invoker, |t| {
            if t.position == event.position || t.is_key_position_shared(event.position) {
                return false;
            }
            debug!("Triplex interrupted, ending at {} {}", t.position, event.position);
            true
        });
        EventVerdict::Bubble
    }

    fn on_layer_state_changed<I: BehaviorInvoker<B>>(&self, event: LayerStateChanged, invoker: &mut I) -> EventVerdict {
        if !event.state {
            return EventVerdict::Bubble;
        }
        self.terminate_first(invoker, |t| {
            if t.is_layer_shared(event.layer) {
                return false;
            }
            debug!("Triplex layer changed, ending at {} {}", t.position, event.layer);
            true
        });
        EventVerdict::Bubble
    }
}
