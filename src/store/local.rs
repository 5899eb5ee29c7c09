//! Single-threaded store.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use scopeguard::defer;

use crate::mvi::{Action, Intent, Reducer, State, INIT_KIND};
use crate::store::error::{BoxError, StoreError};
use crate::store::subscribers::{Registry, SubscriberId, SubscriberList};

type Transition<S, I> = Box<dyn Fn(Option<S>, Action<I>) -> Result<S, BoxError>>;
type Callback = Rc<dyn Fn()>;

/// Owns one state value, applies the reducer to every dispatched intent and
/// notifies subscribers after each transition.
///
/// `Store` is a handle: cloning it shares the same state and subscribers, so a
/// subscriber can capture a clone and read the new state back. The store is
/// disposed when its last handle is dropped. A subscriber that captures a
/// handle keeps the store alive until it is unsubscribed.
///
/// ```
/// use minidux::mvi::Action;
/// use minidux::store::Store;
///
/// let store = Store::new(|state: Option<i64>, action: Action<&'static str>| {
///     let state = state.unwrap_or(0);
///     match action {
///         Action::Intent("INCREMENT") => state + 1,
///         _ => state,
///     }
/// });
/// store.dispatch("INCREMENT").unwrap();
/// assert_eq!(store.get_state(), 1);
/// ```
pub struct Store<S, I> {
    inner: Rc<Inner<S, I>>,
}

struct Inner<S, I> {
    state: RefCell<S>,
    reducer: Transition<S, I>,
    subscribers: RefCell<SubscriberList<Callback>>,
    /// Set while the reducer runs.
    reducing: Cell<bool>,
}

impl<S: State, I: Intent> Store<S, I> {
    /// Create a store and bootstrap its state with `reducer(None, Action::Init)`.
    pub fn new<F>(reducer: F) -> Self
    where
        F: Fn(Option<S>, Action<I>) -> S + 'static,
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
        F: Fn(Option<S>, Action<I>) -> Result<S, E> + 'static,
        E: Into<BoxError>,
    {
        let initial = reducer(None, Action::Init)
            .map_err(|e| StoreError::Bootstrap { source: e.into() })?;
        Ok(Self::with_initial(
            initial,
            Box::new(move |state, action| reducer(state, action).map_err(Into::into)),
        ))
    }

    fn with_initial(initial: S, reducer: Transition<S, I>) -> Self {
        tracing::debug!(kind = INIT_KIND, "Store initialized");
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial),
                reducer,
                subscribers: RefCell::new(SubscriberList::new()),
                reducing: Cell::new(false),
            }),
        }
    }

    /// Get a copy of the current state.
    pub fn get_state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Read a projection of the current state without cloning all of it.
    ///
    /// The selector must not dispatch.
    pub fn select<T>(&self, selector: impl FnOnce(&S) -> T) -> T {
        selector(&self.inner.state.borrow())
    }

    /// Apply `intent` and notify every subscriber registered at this point.
    ///
    /// The new state is stored before the first subscriber runs. Returns the
    /// state this dispatch produced; [`get_state`](Self::get_state) stays the
    /// canonical read path.
    ///
    /// # Errors
    /// - [`StoreError::Reducer`] if the reducer fails. State is unchanged and
    ///   no subscriber is called.
    /// - [`StoreError::DispatchWhileReducing`] if called from inside the
    ///   reducer.
    ///
    /// A panicking reducer or subscriber unwinds through this call. A reducer
    /// panic leaves the state unchanged.
    pub fn dispatch(&self, intent: I) -> Result<S, StoreError> {
        let kind = intent.kind();
        if self.inner.reducing.get() {
            return Err(StoreError::DispatchWhileReducing { kind });
        }

        let current = self.get_state();
        let result = {
            let reducing = &self.inner.reducing;
            reducing.set(true);
            defer! {
                reducing.set(false);
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

        let changed = *self.inner.state.borrow() != next;
        *self.inner.state.borrow_mut() = next.clone();
        tracing::debug!(kind, changed, "Intent dispatched");

        self.notify();
        Ok(next)
    }

    /// Register a callback invoked after every dispatch.
    ///
    /// The callback is not called now. Registering the same callback twice
    /// makes it run twice per dispatch.
    pub fn subscribe<F>(&self, subscriber: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self
            .inner
            .subscribers
            .borrow_mut()
            .push(Rc::new(subscriber));
        tracing::debug!(?id, "Subscriber registered");

        let registry: Weak<dyn Registry> = Rc::downgrade(&self.inner) as Weak<dyn Registry>;
        Subscription { id, registry }
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot first: subscribers may subscribe, unsubscribe or dispatch.
        let snapshot = self.inner.subscribers.borrow().snapshot();
        tracing::trace!(subscribers = snapshot.len(), "Notifying subscribers");
        for subscriber in snapshot {
            subscriber();
        }
    }
}

impl<S, I> Registry for Inner<S, I> {
    fn remove(&self, id: SubscriberId) -> bool {
        self.subscribers.borrow_mut().remove(id)
    }

    fn contains(&self, id: SubscriberId) -> bool {
        self.subscribers.borrow().contains(id)
    }
}

impl<S, I> Clone for Store<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, I> fmt::Debug for Store<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle does not unsubscribe. Call
/// [`unsubscribe`](Self::unsubscribe).
pub struct Subscription {
    id: SubscriberId,
    registry: Weak<dyn Registry>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove this registration.
    ///
    /// Safe to call any number of times, and after the store is gone.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if registry.remove(self.id) {
            tracing::debug!(id = ?self.id, "Subscriber removed");
        }
    }

    /// Whether this registration is still in the store.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
