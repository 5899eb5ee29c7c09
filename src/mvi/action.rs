use super::intent::Intent;

/// Kind reported for the bootstrap action.
///
/// Namespaced so it cannot collide with an application intent.
pub const INIT_KIND: &str = "@@minidux/INIT";

/// What a reducer receives from the store.
///
/// The store sends `Init` exactly once, with no previous state, while it is
/// being constructed. Everything dispatched afterwards arrives as `Intent`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<I> {
    Init,
    Intent(I),
}

impl<I: Intent> Action<I> {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Init => INIT_KIND,
            Action::Intent(intent) => intent.kind(),
        }
    }
}

impl<I> From<I> for Action<I> {
    fn from(intent: I) -> Self {
        Action::Intent(intent)
    }
}
