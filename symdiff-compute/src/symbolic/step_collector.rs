use std::fmt::Debug;
use tracing::trace;

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. This
/// is useful when you don't want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// A collector that emits every step as a `trace` level [`tracing`] event instead of storing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceSteps;

impl<S: Debug> StepCollector<S> for TraceSteps {
    fn push(&mut self, step: S) {
        trace!(?step, "step");
    }
}
