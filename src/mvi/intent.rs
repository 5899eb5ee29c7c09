//! Base trait for intents (user/system actions) in MVI architecture.

/// An intent describes a requested state change.
///
/// Intents represent:
/// - User actions (button clicks, key presses)
/// - System events (timers, network callbacks)
///
/// Every intent carries a kind. Reducers route on it and the store logs it.
pub trait Intent: 'static {
    /// Discriminator of this intent, e.g. `"INCREMENT"`.
    fn kind(&self) -> &'static str;
}

/// Bare string intents, for reducers that only route on a name.
impl Intent for &'static str {
    fn kind(&self) -> &'static str {
        *self
    }
}
