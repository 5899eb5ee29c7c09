//! Ready-made reducers used by the `minidux` binary and in tests.

pub mod counter;
pub mod todos;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which demo reducer to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    #[default]
    Counter,
    Todos,
}
