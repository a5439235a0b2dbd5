//! Sub-behaviors which synchronously generate new events while they're invoked

pub mod common;

use std::cell::RefCell;

use triplex::{
    BehaviorInvoker, BindingEvent, EventListener, LayerStateChanged, PositionStateChanged, Triplex, TriplexConfig,
};

use crate::common::{Call, at};

/// Invoker whose `MO(n)` bindings activate layer `n` on press and deactivate it on release,
/// delivering the layer event to the triplex runtime before returning.
struct LayerInvoker<'t, 'a> {
    triplex: &'t Triplex<'a, &'static str>,
    calls: &'t RefCell<Vec<Call>>,
}

impl LayerInvoker<'_, '_> {
    fn layer_of(binding: &str) -> Option<u8> {
        binding.strip_prefix("MO(")?.strip_suffix(')')?.parse().ok()
    }
}

impl BehaviorInvoker<&'static str> for LayerInvoker<'_, '_> {
    fn press(&mut self, binding: &&'static str, event: BindingEvent) {
        self.calls.borrow_mut().push(Call::Press(*binding, event.position));
        if let Some(layer) = Self::layer_of(binding) {
            let triplex = self.triplex;
            triplex.on_layer_state_changed(LayerStateChanged::new(layer, true), self);
        }
    }

    fn release(&mut self, binding: &&'static str, event: BindingEvent) {
        self.calls.borrow_mut().push(Call::Release(*binding, event.position));
        if let Some(layer) = Self::layer_of(binding) {
            let triplex = self.triplex;
            triplex.on_layer_state_changed(LayerStateChanged::new(layer, false), self);
        }
    }
}

#[test]
fn test_hold_layer_shared_with_itself() {
    // The hold action activates layer 1, which is shared
    let config = TriplexConfig::new(["A", "MO(1)", "C"], &[], &[1]).unwrap();
    let triplex: Triplex<&str> = Triplex::new();
    let calls = RefCell::new(Vec::new());
    let mut invoker = LayerInvoker {
        triplex: &triplex,
        calls: &calls,
    };

    triplex.on_binding_pressed(&config, at(10), &mut invoker);
    triplex.on_binding_released(&config, at(10), &mut invoker);
    assert_eq!(
        calls.take(),
        vec![
            Call::Press("A", 10),
            Call::Release("A", 10),
            Call::Press("MO(1)", 10),
            Call::Release("MO(1)", 10),
        ]
    );
    assert!(triplex.is_active(10));
}

#[test]
fn test_hold_layer_not_shared_ends_triplex() {
    // The hold action activates layer 2, which terminates the triplex from inside the press handler
    let config = TriplexConfig::new(["A", "MO(2)", "C"], &[], &[1]).unwrap();
    let triplex: Triplex<&str> = Triplex::new();
    let calls = RefCell::new(Vec::new());
    let mut invoker = LayerInvoker {
        triplex: &triplex,
        calls: &calls,
    };

    triplex.on_binding_pressed(&config, at(10), &mut invoker);
    assert_eq!(
        calls.take(),
        vec![
            Call::Press("A", 10),
            Call::Release("A", 10),
            Call::Press("MO(2)", 10),
            // The layer event arrives while the hold press is still being invoked
            Call::Release("MO(2)", 10),
            Call::Press("C", 10),
            Call::Release("C", 10),
        ]
    );
    assert!(!triplex.is_active(10));

    // The key release finds nothing to release
    triplex.on_binding_released(&config, at(10), &mut invoker);
    assert!(calls.take().is_empty());
}

#[test]
fn test_first_press_layer_ends_triplex() {
    // The first-press tap activates layer 3, ending the triplex before the hold starts
    let config = TriplexConfig::new(["MO(3)", "B", "C"], &[], &[]).unwrap();
    let triplex: Triplex<&str> = Triplex::new();
    let calls = RefCell::new(Vec::new());
    let mut invoker = LayerInvoker {
        triplex: &triplex,
        calls: &calls,
    };

    triplex.on_binding_pressed(&config, at(10), &mut invoker);
    assert_eq!(
        calls.take(),
        vec![
            Call::Press("MO(3)", 10),
            // Not pressed yet, so no hold release
            Call::Press("C", 10),
            Call::Release("C", 10),
            Call::Release("MO(3)", 10),
        ]
    );
    // The hold action is never pressed for a terminated triplex
    assert!(!triplex.is_active(10));
}

#[test]
fn test_interrupt_layer_reenters_pool() {
    // The interrupt action of the first triplex activates a layer, which ends the second triplex
    let first = TriplexConfig::new(["A", "B", "MO(2)"], &[], &[]).unwrap();
    let second = TriplexConfig::new(["X", "Y", "Z"], &[], &[]).unwrap();
    let triplex: Triplex<&str> = Triplex::new();
    let calls = RefCell::new(Vec::new());
    let mut invoker = LayerInvoker {
        triplex: &triplex,
        calls: &calls,
    };

    triplex.on_binding_pressed(&first, at(10), &mut invoker);
    triplex.on_binding_pressed(&second, at(11), &mut invoker);
    calls.take();

    // Only the first triplex is ended by the key event itself
    triplex.on_position_state_changed(PositionStateChanged::new(7, true), &mut invoker);
    assert_eq!(
        calls.take(),
        vec![
            Call::Release("B", 10),
            Call::Press("MO(2)", 10),
            Call::Release("Y", 11),
            Call::Press("Z", 11),
            Call::Release("Z", 11),
            Call::Release("MO(2)", 10),
        ]
    );
    assert_eq!(triplex.active_count(), 0);
}
