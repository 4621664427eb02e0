// Scoped ownership of the global pointer listeners used by a resize session

use crate::card::CardId;
use std::fmt;

/// Teardown handle for a listener set attached to the host's input surface.
///
/// The teardown runs exactly once: on [`Subscription::dispose`] or on drop,
/// whichever comes first.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Subscription with nothing to release
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    pub fn dispose(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Global input surface (document, window, terminal) a session listens on
pub trait InputSurface {
    /// Attach the pointer move / up / cancel / blur listeners for `card`
    fn attach(&self, card: &CardId) -> Subscription;
}

/// Surface for hosts that forward pointer events to the controller themselves
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardedInput;

impl InputSurface for ForwardedInput {
    fn attach(&self, _card: &CardId) -> Subscription {
        Subscription::noop()
    }
}
