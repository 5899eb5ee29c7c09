//! Thread-safe store.
//!
//! Same contract as [`Store`](super::Store), for state shared across threads.
//! A reentrant dispatch gate serializes dispatches from different threads
//! end to end (reduce plus the whole notification pass) while still letting a
//! subscriber dispatch again on its own thread.

use std::cell::Cell;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use scopeguard::defer;

use crate::mvi::{Action, Intent, Reducer, State, INIT_KIND};
use crate::store::error::{BoxError, StoreError};
use crate::store::subscribers::{Registry, SubscriberId, SubscriberList};

type SharedTransition<S, I> =
    Box<dyn Fn(Option<S>, Action<I>) -> Result<S, BoxError> + Send + Sync>;
type SharedCallback = Arc<dyn Fn() + Send + Sync>;

/// Thread-safe counterpart of [`Store`](super::Store).
///
/// Readers never wait on each other. A subscriber that blocks on another
/// thread which is itself dispatching into this store will deadlock.
pub struct SharedStore<S, I> {
    inner: Arc<SharedInner<S, I>>,
}

struct SharedInner<S, I> {
    state: RwLock<S>,
    reducer: SharedTransition<S, I>,
    subscribers: Mutex<SubscriberList<SharedCallback>>,
    /// Held for a whole dispatch. The flag is set while the reducer runs.
    gate: ReentrantMutex<Cell<bool>>,
}

impl<S, I> SharedStore<S, I>
where
    S: State + Send + Sync,
    I: Intent + Send,
{
    /// Create a store and bootstrap its state with `reducer(None, Action::Init)`.
    pub fn new<F>(reducer: F) -> Self
    where
        F: Fn(Option<S>, Action<I>) -> S + Send + Sync + 'static,
    {
        let initial = reducer(None, Action::Init);
        Self::with_initial(initial, Box::new(move |state, action| Ok(reducer(state, action))))
    }

    /// Create a store driven by a [`Reducer`] implementation.
    pub fn from_reducer<R>() -> Self
    where
        R: Reducer<State = S, Intent = I> + 'static,
    {
        Self::new(R::reduce)
    }

    /// Create a store with a reducer that can fail.
    ///
    /// # Errors
    /// Returns [`StoreError::Bootstrap`] if the reducer fails on the
    /// bootstrap action.
    pub fn try_new<F, E>(reducer: F) -> Result<Self, StoreError>
    where
        F: Fn(Option<S>, Action<I>) -> Result<S, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let initial = reducer(None, Action::Init)
            .map_err(|e| StoreError::Bootstrap { source: e.into() })?;
        Ok(Self::with_initial(
            initial,
            Box::new(move |state, action| reducer(state, action).map_err(Into::into)),
        ))
    }

    fn with_initial(initial: S, reducer: SharedTransition<S, I>) -> Self {
        tracing::debug!(kind = INIT_KIND, "Shared store initialized");
        Self {
            inner: Arc::new(SharedInner {
                state: RwLock::new(initial),
                reducer,
                subscribers: Mutex::new(SubscriberList::new()),
                gate: ReentrantMutex::new(Cell::new(false)),
            }),
        }
    }

    /// Get a copy of the current state.
    pub fn get_state(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Read a projection of the current state under the read lock.
    ///
    /// The selector must not dispatch.
    pub fn select<T>(&self, selector: impl FnOnce(&S) -> T) -> T {
        selector(&self.inner.state.read())
    }

    /// Apply `intent` and notify every subscriber registered at this point.
    ///
    /// # Errors
    /// - [`StoreError::Reducer`] if the reducer fails. State is unchanged.
    /// - [`StoreError::DispatchWhileReducing`] if called from inside the
    ///   reducer on the dispatching thread.
    pub fn dispatch(&self, intent: I) -> Result<S, StoreError> {
        let kind = intent.kind();
        let gate = self.inner.gate.lock();
        if gate.get() {
            return Err(StoreError::DispatchWhileReducing { kind });
        }

        let current = self.get_state();
        let result = {
            gate.set(true);
            defer! {
                gate.set(false);
            }
            (self.inner.reducer)(Some(current), Action::Intent(intent))
        };

        let next = match result {
            Ok(next) => next,
            Err(source) => {
                tracing::warn!(kind, error = %source, "Reducer failed, state unchanged");
                return Err(StoreError::Reducer { kind, source });
            }
        };

        let changed = {
            let mut state = self.inner.state.write();
            let changed = *state != next;
            *state = next.clone();
            changed
        };
        tracing::debug!(kind, changed, "Intent dispatched");

        let snapshot = self.inner.subscribers.lock().snapshot();
        tracing::trace!(subscribers = snapshot.len(), "Notifying subscribers");
        for subscriber in snapshot {
            subscriber();
        }

        drop(gate);
        Ok(next)
    }

    /// Register a callback invoked after every dispatch.
    pub fn subscribe<F>(&self, subscriber: F) -> SharedSubscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.subscribers.lock().push(Arc::new(subscriber));
        tracing::debug!(?id, "Subscriber registered");

        let registry: Weak<dyn Registry + Send + Sync> =
            Arc::downgrade(&self.inner) as Weak<dyn Registry + Send + Sync>;
        SharedSubscription { id, registry }
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }
}

impl<S, I> Registry for SharedInner<S, I> {
    fn remove(&self, id: SubscriberId) -> bool {
        self.subscribers.lock().remove(id)
    }

    fn contains(&self, id: SubscriberId) -> bool {
        self.subscribers.lock().contains(id)
    }
}

impl<S, I> Clone for SharedStore<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, I> fmt::Debug for SharedStore<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStore")
            .field("state", &*self.inner.state.read())
            .field("subscribers", &self.inner.subscribers.lock().len())
            .finish()
    }
}

/// Handle returned by [`SharedStore::subscribe`].
pub struct SharedSubscription {
    id: SubscriberId,
    registry: Weak<dyn Registry + Send + Sync>,
}

impl SharedSubscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove this registration. Idempotent.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if registry.remove(self.id) {
            tracing::debug!(id = ?self.id, "Subscriber removed");
        }
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }
}

impl fmt::Debug for SharedSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
