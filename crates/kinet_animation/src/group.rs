//! Serial and parallel composition of tweens
//!
//! A [`TweenGroup`] is a declarative schedule: it assigns delays to its
//! children but never runs them. Handing the group to
//! [`TweenManager::add_group`](crate::manager::TweenManager::add_group)
//! consumes it and moves its leaves into the driver, so a composed schedule
//! is strictly single-use.

use crate::error::{Result, TweenError};
use crate::tween::Tween;

/// How a group schedules its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Composition {
    /// Children run one after another.
    Serial,
    /// Children run at the same time.
    Parallel,
}

/// A child of a [`TweenGroup`]: a leaf tween or a nested group.
pub enum GroupChild {
    Tween(Tween),
    Group(TweenGroup),
}

impl From<Tween> for GroupChild {
    fn from(tween: Tween) -> Self {
        GroupChild::Tween(tween)
    }
}

impl From<TweenGroup> for GroupChild {
    fn from(group: TweenGroup) -> Self {
        GroupChild::Group(group)
    }
}

impl GroupChild {
    fn delay(&self) -> f64 {
        match self {
            GroupChild::Tween(tween) => tween.delay(),
            GroupChild::Group(group) => group.delay(),
        }
    }

    fn duration(&self) -> f64 {
        match self {
            GroupChild::Tween(tween) => tween.duration(),
            GroupChild::Group(group) => group.duration(),
        }
    }

    fn add_delay(&mut self, millis: f64) -> Result<()> {
        match self {
            GroupChild::Tween(tween) => tween.add_delay(millis),
            GroupChild::Group(group) => group.add_delay(millis),
        }
    }

    fn is_armed(&self) -> bool {
        match self {
            GroupChild::Tween(tween) => tween.is_ready(),
            GroupChild::Group(group) => group.children.iter().any(GroupChild::is_armed),
        }
    }

    fn unpack_into(self, out: &mut Vec<Tween>) {
        match self {
            GroupChild::Tween(tween) => out.push(tween),
            GroupChild::Group(group) => group.unpack_into(out),
        }
    }
}

/// A combined serial or parallel schedule of tweens.
///
/// Appending reshapes the schedule: a serial group pushes each new child
/// after everything appended so far, a parallel group leaves child delays
/// untouched and tracks the longest lane. Groups nest freely.
pub struct TweenGroup {
    composition: Composition,
    children: Vec<GroupChild>,
    total_duration: f64,
    total_delay: f64,
}

impl TweenGroup {
    /// A group whose children run one after another.
    pub fn serial() -> Self {
        Self::new(Composition::Serial)
    }

    /// A group whose children run at the same time.
    pub fn parallel() -> Self {
        Self::new(Composition::Parallel)
    }

    fn new(composition: Composition) -> Self {
        Self {
            composition,
            children: Vec::new(),
            total_duration: 0.0,
            total_delay: 0.0,
        }
    }

    /// Append a child (a tween or a nested group). Chainable.
    ///
    /// Fails only if the child was already started, which would make its
    /// schedule unadjustable.
    pub fn append(mut self, child: impl Into<GroupChild>) -> Result<Self> {
        let mut child = child.into();
        if child.is_armed() {
            return Err(TweenError::Frozen);
        }
        let child_delay = child.delay();
        let child_duration = child.duration();

        match self.composition {
            Composition::Serial => {
                // Shift the child behind everything appended so far; its own
                // configured delay rides on top of the shift.
                child.add_delay(self.total_duration)?;
                self.total_duration += child_delay + child_duration;
            }
            Composition::Parallel => {
                self.total_duration = self.total_duration.max(child_delay + child_duration);
            }
        }

        self.children.push(child);
        Ok(self)
    }

    /// Push every child later by `millis`; the group records the shift so
    /// enclosing groups account for it.
    pub fn add_delay(&mut self, millis: f64) -> Result<()> {
        for child in &mut self.children {
            child.add_delay(millis)?;
        }
        self.total_delay += millis;
        Ok(())
    }

    /// Combined duration of the schedule: the sum of child slots for a
    /// serial group, the longest lane for a parallel one.
    pub fn duration(&self) -> f64 {
        self.total_duration
    }

    /// Delay applied to the whole group through [`TweenGroup::add_delay`].
    pub fn delay(&self) -> f64 {
        self.total_delay
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Flatten into leaf tweens, consuming the group.
    pub(crate) fn unpack_into(self, out: &mut Vec<Tween>) {
        for child in self.children {
            child.unpack_into(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinet_core::{share, Attribute, Tweener};

    fn alpha_tween(duration: f64, delay: f64) -> Tween {
        let target = share(Tweener::new());
        Tween::builder(Attribute::Alpha, duration)
            .target(target)
            .to(&[0.0])
            .delay(delay)
            .build()
            .unwrap()
    }

    #[test]
    fn test_serial_sums_delays_and_durations() {
        let group = TweenGroup::serial()
            .append(alpha_tween(1000.0, 100.0))
            .unwrap()
            .append(alpha_tween(500.0, 50.0))
            .unwrap();

        assert_eq!(group.duration(), 1650.0);
        assert_eq!(group.delay(), 0.0);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_serial_shifts_each_child_behind_the_previous() {
        let a = alpha_tween(1000.0, 100.0);
        let b = alpha_tween(500.0, 50.0);

        let group = TweenGroup::serial().append(a).unwrap().append(b).unwrap();

        let mut leaves = Vec::new();
        group.unpack_into(&mut leaves);
        assert_eq!(leaves[0].delay(), 100.0);
        // b's slot starts after a's delay + duration, plus its own delay.
        assert_eq!(leaves[1].delay(), 1100.0 + 50.0);
    }

    #[test]
    fn test_parallel_takes_longest_lane_and_keeps_delays() {
        let group = TweenGroup::parallel()
            .append(alpha_tween(1000.0, 100.0))
            .unwrap()
            .append(alpha_tween(500.0, 50.0))
            .unwrap();

        assert_eq!(group.duration(), 1100.0);

        let mut leaves = Vec::new();
        group.unpack_into(&mut leaves);
        assert_eq!(leaves[0].delay(), 100.0);
        assert_eq!(leaves[1].delay(), 50.0);
    }

    #[test]
    fn test_add_delay_propagates_to_every_child() {
        let mut group = TweenGroup::parallel()
            .append(alpha_tween(1000.0, 0.0))
            .unwrap()
            .append(alpha_tween(500.0, 25.0))
            .unwrap();

        group.add_delay(200.0).unwrap();
        assert_eq!(group.delay(), 200.0);

        let mut leaves = Vec::new();
        group.unpack_into(&mut leaves);
        assert_eq!(leaves[0].delay(), 200.0);
        assert_eq!(leaves[1].delay(), 225.0);
    }

    #[test]
    fn test_nested_group_occupies_one_serial_slot() {
        let inner = TweenGroup::parallel()
            .append(alpha_tween(800.0, 0.0))
            .unwrap()
            .append(alpha_tween(300.0, 0.0))
            .unwrap();
        assert_eq!(inner.duration(), 800.0);

        let outer = TweenGroup::serial()
            .append(alpha_tween(1000.0, 0.0))
            .unwrap()
            .append(inner)
            .unwrap()
            .append(alpha_tween(100.0, 0.0))
            .unwrap();

        // 1000 + 800 + 100
        assert_eq!(outer.duration(), 1900.0);

        let mut leaves = Vec::new();
        outer.unpack_into(&mut leaves);
        assert_eq!(leaves.len(), 4);
        // Both inner leaves were shifted behind the first tween.
        assert_eq!(leaves[1].delay(), 1000.0);
        assert_eq!(leaves[2].delay(), 1000.0);
        // The trailing tween sits behind the nested group's span.
        assert_eq!(leaves[3].delay(), 1800.0);
    }

    #[test]
    fn test_append_rejects_started_children() {
        let target = share(Tweener::new());
        let mut tween = Tween::builder(Attribute::Alpha, 100.0)
            .target(target)
            .to(&[0.0])
            .build()
            .unwrap();
        tween.start(0.0);

        assert!(TweenGroup::serial().append(tween).is_err());
    }
}
