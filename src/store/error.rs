use thiserror::Error;

/// Error type a fallible reducer may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The reducer failed while producing the initial state.
    #[error("Reducer failed to produce an initial state: {source}")]
    Bootstrap {
        #[source]
        source: BoxError,
    },

    /// The reducer failed on a dispatched intent. State is unchanged.
    #[error("Reducer failed on intent '{kind}': {source}")]
    Reducer {
        kind: &'static str,
        #[source]
        source: BoxError,
    },

    /// A reducer tried to dispatch into the store that is running it.
    #[error("Cannot dispatch '{kind}' while the reducer is running")]
    DispatchWhileReducing { kind: &'static str },
}
