//! The per-tick driver
//!
//! A [`TweenManager`] owns every live tween and advances all of them against
//! one shared timestamp per tick. Progress is entirely pull-driven: nothing
//! here spawns threads, registers timers, or reads a clock. The host
//! samples its clock once per frame and passes the result in.

use kinet_core::{Attribute, SharedTweenable};

use crate::group::TweenGroup;
use crate::tween::Tween;

/// Owns the live tweens and advances them once per host tick.
///
/// Units are advanced in registration order. Completed units are removed in
/// a sweep after the pass, never while the pass iterates.
#[derive(Debug, Default)]
pub struct TweenManager {
    tweens: Vec<Tween>,
}

impl TweenManager {
    pub fn new() -> Self {
        Self { tweens: Vec::new() }
    }

    /// Register a tween and start it against `now`.
    pub fn add(&mut self, mut tween: Tween, now: f64) {
        tween.start(now);
        self.tweens.push(tween);
    }

    /// Unpack a group and start every leaf against `now`.
    ///
    /// The group is consumed: a composed schedule runs once.
    pub fn add_group(&mut self, group: TweenGroup, now: f64) {
        let mut leaves = Vec::new();
        group.unpack_into(&mut leaves);
        for tween in leaves {
            self.add(tween, now);
        }
    }

    /// Kill every live tween bound to `target`. Unknown targets are a no-op.
    pub fn remove(&mut self, target: &SharedTweenable) {
        self.remove_where(|tween| tween.shares_target(target));
    }

    /// Kill every live tween bound to `target` that animates `attribute`.
    pub fn remove_attribute(&mut self, target: &SharedTweenable, attribute: Attribute) {
        self.remove_where(|tween| {
            tween.shares_target(target) && tween.attribute() == attribute
        });
    }

    /// Whether any live tween is bound to `target`.
    pub fn contains(&self, target: &SharedTweenable) -> bool {
        self.live().any(|tween| tween.shares_target(target))
    }

    /// Whether any live tween is bound to `target` animating `attribute`.
    pub fn contains_attribute(&self, target: &SharedTweenable, attribute: Attribute) -> bool {
        self.live()
            .any(|tween| tween.shares_target(target) && tween.attribute() == attribute)
    }

    /// Number of registered tweens.
    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }

    /// True when nothing is registered; hosts can stop scheduling frames.
    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Advance every tween against one shared timestamp, then sweep the
    /// completed ones.
    pub fn advance_all(&mut self, now: f64) {
        for tween in &mut self.tweens {
            tween.advance(now);
        }
        // Two-phase: removal never happens while the pass iterates.
        let before = self.tweens.len();
        self.tweens.retain(|tween| !tween.is_completed());
        let swept = before - self.tweens.len();
        if swept > 0 {
            tracing::trace!(swept, live = self.tweens.len(), "swept completed tweens");
        }
    }

    fn remove_where(&mut self, matches: impl Fn(&Tween) -> bool) {
        for tween in &mut self.tweens {
            if !tween.is_completed() && matches(tween) {
                tween.kill();
            }
        }
        self.tweens.retain(|tween| !tween.is_completed());
    }

    fn live(&self) -> impl Iterator<Item = &Tween> {
        self.tweens.iter().filter(|tween| !tween.is_completed())
    }
}
