//! Kinet Tween Engine
//!
//! Time-driven interpolation of target attribute vectors, independent of
//! frame rate:
//!
//! - **Tween**: one attribute vector under a delay → run → end → repeat
//!   state machine, with lifecycle callbacks
//! - **TweenGroup**: serial / parallel composition of tweens into one schedule
//! - **TweenManager**: the per-tick driver that advances every live tween
//! - **Easing**: the interpolation curve library
//! - **Clocks**: host-side time sources; the engine itself only ever sees
//!   explicit timestamps
//!
//! # Example
//!
//! ```rust
//! use kinet_animation::{Easing, Tween, TweenManager};
//! use kinet_core::{share, Attribute, Tweener};
//!
//! let ball = share(Tweener::new());
//! let tween = Tween::builder(Attribute::Position2d, 1000.0)
//!     .target(ball.clone())
//!     .to(&[100.0, 50.0])
//!     .easing(Easing::OutCubic)
//!     .build()
//!     .unwrap();
//!
//! let mut manager = TweenManager::new();
//! manager.add(tween, 0.0);
//!
//! // Once per frame, with a single shared timestamp:
//! manager.advance_all(500.0);
//! manager.advance_all(1000.0);
//! assert!(manager.is_idle());
//! ```

pub mod clock;
pub mod easing;
pub mod error;
pub mod event;
pub mod group;
pub mod manager;
pub mod tween;

pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Easing;
pub use error::{Result, TweenError};
pub use event::{TweenCallback, TweenEvent};
pub use group::{GroupChild, TweenGroup};
pub use manager::TweenManager;
pub use tween::{Tween, TweenBuilder};
