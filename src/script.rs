//! Intent scripts: a TOML list of intents replayed through a store.
//!
//! ```toml
//! [[intents]]
//! type = "INCREMENT"
//!
//! [[intents]]
//! type = "INCREMENT_BY"
//! amount = 5
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::mvi::{Intent, State};
use crate::store::{Store, StoreError};

/// Errors that can occur when loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script{}: {source}", describe_path(.path.as_deref()))]
    Parse {
        /// `None` when parsed from a string.
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },
}

fn describe_path(path: Option<&Path>) -> String {
    path.map(|path| format!(" '{}'", path.display()))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script<I> {
    #[serde(default = "Vec::new")]
    pub intents: Vec<I>,
}

impl<I: DeserializeOwned> Script<I> {
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content).map_err(|source| ScriptError::Parse { path: None, source })
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ScriptError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }
}

/// Dispatch every intent of `script` in order.
///
/// Stops at the first reducer error. Returns how many intents were applied.
pub fn replay<S: State, I: Intent>(
    store: &Store<S, I>,
    script: Script<I>,
) -> Result<usize, StoreError> {
    let total = script.intents.len();
    for (index, intent) in script.intents.into_iter().enumerate() {
        tracing::debug!(step = index + 1, total, kind = intent.kind(), "Replaying intent");
        store.dispatch(intent)?;
    }
    Ok(total)
}
