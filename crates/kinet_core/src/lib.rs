//! Kinet Core Contracts
//!
//! The shared surface between the tween engine and the hosts that embed it:
//!
//! - **Attribute selectors**: which numeric vector of a target is animated
//! - **Tweenable**: the read/write/finalize contract animation targets implement
//! - **Tweener**: a ready-made attribute store hosts can embed in scene objects
//!
//! # Example
//!
//! ```rust
//! use kinet_core::{share, Attribute, Tweenable, Tweener};
//!
//! let ball = share(Tweener::new());
//!
//! ball.borrow_mut().write(Attribute::Position2d, &[120.0, 80.0]);
//! let pos = ball.borrow().read(Attribute::Position2d);
//! assert_eq!(&pos[..], &[120.0, 80.0]);
//! ```

pub mod attribute;
pub mod tweenable;
pub mod tweener;

pub use attribute::Attribute;
pub use tweenable::{share, AttrVec, SharedTweenable, Tweenable};
pub use tweener::Tweener;
