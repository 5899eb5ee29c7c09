use serde::{Deserialize, Serialize};

use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterIntent {
    Increment,
    Decrement,
    IncrementBy { amount: i64 },
    Reset,
    /// Any other `type` tag.
    #[serde(other)]
    Unknown,
}

impl Intent for CounterIntent {
    fn kind(&self) -> &'static str {
        match self {
            CounterIntent::Increment => "INCREMENT",
            CounterIntent::Decrement => "DECREMENT",
            CounterIntent::IncrementBy { .. } => "INCREMENT_BY",
            CounterIntent::Reset => "RESET",
            CounterIntent::Unknown => "UNKNOWN",
        }
    }
}
