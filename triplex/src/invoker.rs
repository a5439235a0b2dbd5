use crate::event::BindingEvent;

/// Executes the sub-behaviors of a triplex.
///
/// The triplex runtime doesn't know what its sub-behaviors do, it only decides when they're
/// pressed and released. Every press is eventually followed by a release of the same binding.
///
/// Invocations are synchronous. An implementation may deliver events generated by a sub-behavior
/// (for example a layer activation) back to the [`crate::Triplex`] before returning.
pub trait BehaviorInvoker<B> {
    /// Press `binding`
    fn press(&mut self, binding: &B, event: BindingEvent);

    /// Release `binding`
    fn release(&mut self, binding: &B, event: BindingEvent);

    /// Press and immediately release `binding`
    fn tap(&mut self, binding: &B, event: BindingEvent) {
        self.press(binding, event);
        self.release(binding, event);
    }
}

impl<B, T: BehaviorInvoker<B> + ?Sized> BehaviorInvoker<B> for &mut T {
    fn press(&mut self, binding: &B, event: BindingEvent) {
        (**self).press(binding, event)
    }

    fn release(&mut self, binding: &B, event: BindingEvent) {
        (**self).release(binding, event)
    }

    fn tap(&mut self, binding: &B, event: BindingEvent) {
        (**self).tap(binding, event)
    }
}
