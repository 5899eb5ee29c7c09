//! Observable state containers.
//!
//! A store owns one state value and a reducer fixed at construction. Every
//! dispatched intent is folded into the state, and subscribers are called
//! afterwards so they can read the new state back out.
//!
//! # Notification order
//!
//! Each dispatch replaces the state, then walks a snapshot of the subscribers
//! taken at that moment, in registration order:
//!
//! - a subscriber removed during the walk still runs in that walk,
//! - a subscriber added during the walk first runs on the next dispatch,
//! - a dispatch made from a subscriber finishes (state and its own walk)
//!   before the outer walk continues with its own snapshot.
//!
//! [`Store`] is single-threaded. [`SharedStore`] adds locking for use across
//! threads.

mod error;
mod local;
mod shared;
mod subscribers;

pub use error::{BoxError, StoreError};
pub use local::{Store, Subscription};
pub use shared::{SharedStore, SharedSubscription};
pub use subscribers::SubscriberId;
