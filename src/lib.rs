//! A minimal observable state container.
//!
//! Application state lives in a [`store::Store`]. Intents are folded into it by
//! a pure [`mvi::Reducer`], and subscribers are notified after every
//! transition.

pub mod config;
pub mod demo;
pub mod logging;
pub mod mvi;
pub mod script;
pub mod store;
