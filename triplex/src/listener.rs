use crate::event::{EventVerdict, LayerStateChanged, PositionStateChanged};
use crate::invoker::BehaviorInvoker;

/// Observer of keyboard-wide events.
///
/// The host delivers every key position change and every layer change to the listener, including
/// the changes of the listener's own keys. The listener may invoke sub-behaviors through `invoker`.
pub trait EventListener<B> {
    /// A key position was pressed or released
    fn on_position_state_changed<I: BehaviorInvoker<B>>(
        &self,
        event: PositionStateChanged,
        invoker: &mut I,
    ) -> EventVerdict;

    /// A layer was activated or deactivated
    fn on_layer_state_changed<I: BehaviorInvoker<B>>(&self, event: LayerStateChanged, invoker: &mut I) -> EventVerdict;
}
