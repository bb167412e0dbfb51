//! The tween state machine
//!
//! A [`Tween`] owns the full timing state of one attribute vector on one
//! target: delay, run, end, optional repeats. It is configured through
//! [`TweenBuilder`], which freezes the configuration at build time; a
//! running unit cannot be reconfigured, it can only be advanced or killed.
//!
//! Time never comes from a wall clock. [`Tween::start`] and
//! [`Tween::advance`] take explicit `now` timestamps in milliseconds,
//! normally supplied once per tick by a
//! [`TweenManager`](crate::manager::TweenManager).

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use kinet_core::{AttrVec, Attribute, SharedTweenable};

use crate::easing::Easing;
use crate::error::{Result, TweenError};
use crate::event::{CallbackSet, TweenEvent};

/// How the end values of a tween are resolved when it starts.
#[derive(Clone, Debug)]
enum EndSpec {
    /// Animate to absolute values.
    Absolute(AttrVec),
    /// Animate by per-component offsets from the values sampled at start.
    Relative(AttrVec),
}

/// One attribute vector under time-based interpolation.
///
/// Start values are sampled from the target when the delay elapses, not at
/// configuration time, so a tween configured early still animates from
/// wherever the target actually is when it begins. On repeat iterations the
/// original start values are reused; repeats do not drift.
///
/// Two tweens registered against the same target and attribute overwrite
/// each other in registration order. That is a caller hazard, not a
/// supported pattern.
pub struct Tween {
    target: Option<SharedTweenable>,
    attribute: Attribute,
    easing: Easing,
    duration: f64,
    delay: f64,
    reversed: bool,
    end: EndSpec,

    start_values: AttrVec,
    end_values: AttrVec,
    delta_values: AttrVec,

    ready_at: f64,
    start_at: f64,
    end_at: f64,
    next_iteration_at: f64,

    ready: bool,
    started: bool,
    ended: bool,
    completed: bool,

    repeat_count: i32,
    iteration: u32,
    repeat_interval: f64,

    callbacks: CallbackSet,
    user_data: Option<Box<dyn Any>>,
}

impl Tween {
    /// Start configuring a tween over `attribute` lasting `duration_ms`.
    pub fn builder(attribute: Attribute, duration_ms: f64) -> TweenBuilder {
        TweenBuilder {
            target: None,
            attribute,
            easing: Easing::default(),
            duration: duration_ms,
            delay: 0.0,
            reversed: false,
            end: None,
            repeat_count: 0,
            repeat_interval: 0.0,
            callbacks: CallbackSet::default(),
            user_data: None,
            error: None,
        }
    }

    /// Arm the unit against `now`: compute its timestamps, mark it ready,
    /// and fire the ready callbacks.
    ///
    /// Calling again resets the timing while keeping the iteration count,
    /// which is how repeats restart.
    pub fn start(&mut self, now: f64) {
        self.begin(now, false);
    }

    fn begin(&mut self, now: f64, repeat_restart: bool) {
        self.ready_at = now;
        self.start_at = if repeat_restart { now } else { now + self.delay };
        if self.iteration > 0 && self.repeat_interval < 0.0 {
            // Overlapping repeat: pull the start earlier, never past ready.
            self.start_at = (self.start_at + self.repeat_interval).max(self.ready_at);
        }
        self.end_at = self.start_at + self.duration;
        self.next_iteration_at = self.end_at.max(self.end_at + self.repeat_interval);

        self.started = false;
        self.ended = false;
        self.completed = false;
        self.ready = true;

        tracing::trace!(
            attribute = ?self.attribute,
            start_at = self.start_at,
            end_at = self.end_at,
            iteration = self.iteration,
            "tween armed"
        );
        self.fire(TweenEvent::Ready);
    }

    /// Advance the state machine to `now`, writing into the target as
    /// needed. Called by the manager once per tick.
    pub fn advance(&mut self, now: f64) {
        if !self.ready || self.completed {
            return;
        }
        // A unit with no target idles at ready forever.
        if self.target.is_none() {
            return;
        }

        // The ended gate keeps the restart one tick behind the end
        // transition, so every iteration reports its completion even when
        // the repeat interval is zero or negative.
        if self.ended && self.is_repeat() && now >= self.next_iteration_at {
            self.iteration += 1;
            self.begin(now, true);
            return;
        }

        if self.ended {
            // Holding between iterations: keep the target parked on the end
            // value until the next iteration fires.
            self.apply_end_values();
            return;
        }

        if !self.started {
            if now < self.start_at {
                return;
            }
            self.started = true;
            if self.iteration == 0 {
                self.resolve_values();
            }
            self.fire(TweenEvent::EndOfDelay);
        }

        if now >= self.end_at {
            self.ended = true;
            self.apply_end_values();
            if let Some(target) = &self.target {
                target.borrow_mut().finalize(self.attribute);
            }
            self.fire(TweenEvent::IterationComplete);
            if !self.is_repeat() {
                self.completed = true;
                tracing::debug!(attribute = ?self.attribute, iteration = self.iteration, "tween complete");
                self.fire(TweenEvent::Complete);
            }
            return;
        }

        self.apply_interpolated(now);
    }

    /// Cancel the unit from any state.
    ///
    /// Fires only the kill callbacks; the iteration-complete and complete
    /// callbacks never run for a killed unit. No further writes happen once
    /// the manager sweeps it.
    pub fn kill(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.ended = true;
        tracing::debug!(attribute = ?self.attribute, "tween killed");
        self.fire(TweenEvent::Kill);
    }

    /// Push the start later by `millis`. Accumulates across calls.
    ///
    /// Only valid before the unit is started; serial groups use this to
    /// shift children into their slots.
    pub fn add_delay(&mut self, millis: f64) -> Result<()> {
        if self.ready {
            return Err(TweenError::Frozen);
        }
        self.delay += millis;
        Ok(())
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Accumulated start delay in milliseconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Completed repeat restarts so far (0 during the first run).
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The terminal, externally observable done signal. The manager sweeps
    /// completed units after each pass.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the current iteration starts interpolating.
    pub fn start_at(&self) -> f64 {
        self.start_at
    }

    /// When the current iteration reaches its end values.
    pub fn end_at(&self) -> f64 {
        self.end_at
    }

    /// Host data attached at configuration time.
    pub fn user_data<T: Any>(&self) -> Option<&T> {
        self.user_data.as_ref().and_then(|data| data.downcast_ref())
    }

    pub(crate) fn shares_target(&self, other: &SharedTweenable) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| Rc::ptr_eq(target, other))
    }

    /// Still scheduled to run another iteration after the current one.
    fn is_repeat(&self) -> bool {
        self.repeat_count < 0 || (self.iteration as i64) < self.repeat_count as i64
    }

    /// Sample the target and fix the start/end/delta vectors for this run.
    /// Only happens on the first iteration; repeats reuse these values.
    fn resolve_values(&mut self) {
        let Some(target) = &self.target else { return };
        self.start_values = target.borrow().read(self.attribute);
        self.end_values = match &self.end {
            EndSpec::Absolute(values) => values.clone(),
            EndSpec::Relative(offsets) => self
                .start_values
                .iter()
                .zip(offsets)
                .map(|(start, offset)| start + offset)
                .collect(),
        };
        self.delta_values = self
            .end_values
            .iter()
            .zip(&self.start_values)
            .map(|(end, start)| end - start)
            .collect();
    }

    /// Write the exact end values through, honoring reversal.
    fn apply_end_values(&self) {
        let Some(target) = &self.target else { return };
        let finals: AttrVec = if self.reversed {
            self.end_values
                .iter()
                .zip(&self.delta_values)
                .map(|(end, delta)| end - delta)
                .collect()
        } else {
            self.start_values
                .iter()
                .zip(&self.delta_values)
                .map(|(start, delta)| start + delta)
                .collect()
        };
        target.borrow_mut().write(self.attribute, &finals);
    }

    /// Write the interpolated mid-run vector for `now`.
    fn apply_interpolated(&self, now: f64) {
        let Some(target) = &self.target else { return };
        let elapsed = now - self.start_at;
        let values: AttrVec = (0..self.start_values.len())
            .map(|i| {
                let (begin, delta) = if self.reversed {
                    (self.end_values[i], -self.delta_values[i])
                } else {
                    (self.start_values[i], self.delta_values[i])
                };
                self.easing.compute(elapsed, begin, delta, self.duration)
            })
            .collect();
        target.borrow_mut().write(self.attribute, &values);
    }

    fn fire(&mut self, event: TweenEvent) {
        if !self.callbacks.has_callbacks(event) {
            return;
        }
        // Take the set out so callbacks can borrow the tween immutably.
        let mut callbacks = std::mem::take(&mut self.callbacks);
        callbacks.fire(event, self);
        self.callbacks = callbacks;
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("attribute", &self.attribute)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("iteration", &self.iteration)
            .field("ready", &self.ready)
            .field("started", &self.started)
            .field("ended", &self.ended)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

/// Chainable configuration for a [`Tween`].
///
/// Misconfiguration (non-positive duration, end values whose length does
/// not match the attribute arity, sampling current values with no target)
/// is reported by [`TweenBuilder::build`]; the first error wins.
pub struct TweenBuilder {
    target: Option<SharedTweenable>,
    attribute: Attribute,
    easing: Easing,
    duration: f64,
    delay: f64,
    reversed: bool,
    end: Option<EndSpec>,
    repeat_count: i32,
    repeat_interval: f64,
    callbacks: CallbackSet,
    user_data: Option<Box<dyn Any>>,
    error: Option<TweenError>,
}

impl TweenBuilder {
    /// Bind the target the tween reads from and writes into.
    ///
    /// A tween built without a target never advances past ready, which
    /// allows declarative construction before binding is possible.
    pub fn target(mut self, target: SharedTweenable) -> Self {
        self.target = Some(target);
        self
    }

    /// Animate to absolute end values.
    pub fn to(mut self, values: &[f64]) -> Self {
        if self.check_arity(values) {
            self.end = Some(EndSpec::Absolute(AttrVec::from_slice(values)));
        }
        self
    }

    /// Animate by per-component offsets from the start values, resolved
    /// once at the moment the tween starts.
    pub fn by(mut self, offsets: &[f64]) -> Self {
        if self.check_arity(offsets) {
            self.end = Some(EndSpec::Relative(AttrVec::from_slice(offsets)));
        }
        self
    }

    /// Capture the target's current values, immediately, as the end values.
    ///
    /// Call after [`TweenBuilder::target`]. The snapshot is taken here, not
    /// at start time, so the tween animates back to where the target was
    /// when this was called.
    pub fn to_current(mut self) -> Self {
        match &self.target {
            Some(target) => {
                let snapshot = target.borrow().read(self.attribute);
                self.end = Some(EndSpec::Absolute(snapshot));
            }
            None => self.fail(TweenError::NoTarget),
        }
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Add to the start delay. Repeated calls accumulate.
    pub fn delay(mut self, millis: f64) -> Self {
        self.delay += millis;
        self
    }

    /// Run `count` extra iterations after the first (`-1` repeats forever),
    /// waiting `interval_ms` between the end of one iteration and the start
    /// of the next. A negative interval asks the next iteration to overlap
    /// the end of the previous one.
    pub fn repeat(mut self, count: i32, interval_ms: f64) -> Self {
        self.repeat_count = count;
        self.repeat_interval = interval_ms;
        self
    }

    /// Swap the direction of travel: run from the end values back to the
    /// sampled start values. Calling twice restores forward travel.
    pub fn reverse(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    /// Register a lifecycle callback. Multiple callbacks per event run in
    /// registration order.
    pub fn on(mut self, event: TweenEvent, callback: impl FnMut(TweenEvent, &Tween) + 'static) -> Self {
        self.callbacks.register(event, Box::new(callback));
        self
    }

    /// Attach arbitrary host data, readable from callbacks through
    /// [`Tween::user_data`].
    pub fn user_data(mut self, data: impl Any) -> Self {
        self.user_data = Some(Box::new(data));
        self
    }

    /// Validate the configuration and freeze it into a runnable tween.
    pub fn build(mut self) -> Result<Tween> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        if self.duration <= 0.0 {
            return Err(TweenError::NonPositiveDuration(self.duration));
        }
        let end = self.end.ok_or(TweenError::MissingEndValues)?;

        Ok(Tween {
            target: self.target,
            attribute: self.attribute,
            easing: self.easing,
            duration: self.duration,
            delay: self.delay,
            reversed: self.reversed,
            end,
            start_values: AttrVec::new(),
            end_values: AttrVec::new(),
            delta_values: AttrVec::new(),
            ready_at: 0.0,
            start_at: 0.0,
            end_at: 0.0,
            next_iteration_at: 0.0,
            ready: false,
            started: false,
            ended: false,
            completed: false,
            repeat_count: self.repeat_count,
            iteration: 0,
            repeat_interval: self.repeat_interval,
            callbacks: self.callbacks,
            user_data: self.user_data,
        })
    }

    fn check_arity(&mut self, values: &[f64]) -> bool {
        let expected = self.attribute.arity();
        if values.len() == expected {
            return true;
        }
        self.fail(TweenError::ArityMismatch {
            attribute: self.attribute,
            expected,
            actual: values.len(),
        });
        false
    }

    fn fail(&mut self, error: TweenError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
