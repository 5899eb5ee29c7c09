use serde::{Deserialize, Serialize};

use crate::mvi::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
}

impl State for CounterState {}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}
