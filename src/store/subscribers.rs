/// Removal side of a store, seen by subscription handles.
///
/// Handles hold a `Weak` to this so they never keep a store alive.
pub(crate) trait Registry {
    fn remove(&self, id: SubscriberId) -> bool;
    fn contains(&self, id: SubscriberId) -> bool;
}

/// Identifies one registration in a [`SubscriberList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Ordered subscriber registry.
///
/// Registration order is notification order. The same callback may be
/// registered more than once; every registration gets its own id.
pub(crate) struct SubscriberList<F> {
    entries: Vec<(SubscriberId, F)>,
    next_id: u64,
}

impl<F> SubscriberList<F> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn push(&mut self, callback: F) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Remove one registration. Returns false if it was already gone.
    pub(crate) fn remove(&mut self, id: SubscriberId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: SubscriberId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<F: Clone> SubscriberList<F> {
    /// Callbacks registered right now, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<F> {
        self.entries.iter().map(|(_, callback)| callback.clone()).collect()
    }
}
