//! The contract between the animation engine and its targets

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::attribute::Attribute;

/// An attribute vector.
///
/// Selector arity never exceeds three components, so values stay inline.
pub type AttrVec = SmallVec<[f64; 3]>;

/// A value the animation engine can read, write, and settle.
///
/// The engine samples `read` once when a tween actually starts (not when it
/// is configured), calls `write` once per tick while the tween runs, and
/// calls `write` followed by `finalize` at the exact end instant so the
/// target lands on the configured end values rather than on the last
/// interpolated step.
pub trait Tweenable {
    /// Current value of the given attribute vector.
    fn read(&self, attribute: Attribute) -> AttrVec;

    /// Apply a newly computed vector. `values` has exactly
    /// `attribute.arity()` components.
    fn write(&mut self, attribute: Attribute, values: &[f64]);

    /// Called once when a tween over `attribute` reaches its end instant,
    /// after the final write. Targets that cache state derived from the
    /// attribute can resync here.
    fn finalize(&mut self, attribute: Attribute) {
        let _ = attribute;
    }
}

/// Shared handle to a tween target.
///
/// The engine is single-threaded and pull-driven, so targets are shared
/// with the host through `Rc<RefCell<_>>` rather than a lock.
pub type SharedTweenable = Rc<RefCell<dyn Tweenable>>;

/// Wrap a target into a [`SharedTweenable`] handle.
pub fn share<T: Tweenable + 'static>(target: T) -> SharedTweenable {
    Rc::new(RefCell::new(target))
}
