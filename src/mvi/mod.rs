//! Model-View-Intent (MVI) primitives.
//!
//! This module provides the base traits for unidirectional data flow
//! through a [`Store`](crate::store::Store).
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of application data
//! - **Intent**: User actions or system events, tagged by kind
//! - **Reducer**: Pure function that transforms state based on intents

mod action;
mod intent;
mod reducer;
mod state;

pub use action::{Action, INIT_KIND};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
