//! Lifecycle events and callback fan-out

use crate::tween::Tween;

/// Lifecycle points a tween reports to its callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenEvent {
    /// The unit was started and its timestamps computed
    Ready,
    /// The delay elapsed and interpolation began
    EndOfDelay,
    /// One iteration reached its end instant
    IterationComplete,
    /// The final iteration finished; the unit is done
    Complete,
    /// The unit was killed before finishing
    Kill,
}

/// A registered lifecycle callback.
///
/// Callbacks run synchronously on the tick that triggers them, in
/// registration order.
pub type TweenCallback = Box<dyn FnMut(TweenEvent, &Tween)>;

/// Callbacks grouped by the event that fires them.
///
/// Registration happens on the builder; once the unit is built the set is
/// never mutated, so callbacks cannot unregister each other mid-fan-out.
#[derive(Default)]
pub(crate) struct CallbackSet {
    ready: Vec<TweenCallback>,
    end_of_delay: Vec<TweenCallback>,
    iteration_complete: Vec<TweenCallback>,
    complete: Vec<TweenCallback>,
    kill: Vec<TweenCallback>,
}

impl CallbackSet {
    pub(crate) fn register(&mut self, event: TweenEvent, callback: TweenCallback) {
        self.for_event(event).push(callback);
    }

    pub(crate) fn has_callbacks(&self, event: TweenEvent) -> bool {
        let registered = match event {
            TweenEvent::Ready => &self.ready,
            TweenEvent::EndOfDelay => &self.end_of_delay,
            TweenEvent::IterationComplete => &self.iteration_complete,
            TweenEvent::Complete => &self.complete,
            TweenEvent::Kill => &self.kill,
        };
        !registered.is_empty()
    }

    pub(crate) fn fire(&mut self, event: TweenEvent, tween: &Tween) {
        for callback in self.for_event(event) {
            callback(event, tween);
        }
    }

    fn for_event(&mut self, event: TweenEvent) -> &mut Vec<TweenCallback> {
        match event {
            TweenEvent::Ready => &mut self.ready,
            TweenEvent::EndOfDelay => &mut self.end_of_delay,
            TweenEvent::IterationComplete => &mut self.iteration_complete,
            TweenEvent::Complete => &mut self.complete,
            TweenEvent::Kill => &mut self.kill,
        }
    }
}
