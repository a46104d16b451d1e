//! Ready-or-pending handoff between a build and the documentation viewer.
//!
//! A build submits exactly one index. If the viewer has already attached its
//! handler the index is delivered immediately; otherwise it is stashed until
//! [`Registry::attach`] is called.

use crate::error::RegistryError;
use crate::index::ImplementorIndex;
use std::fmt;

/// Viewer callback that receives the finished index.
pub type Handler = Box<dyn FnMut(ImplementorIndex)>;

/// Outcome of [`Registry::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The handler received the index.
    Delivered,
    /// No handler yet; the index waits for `attach`.
    Pending,
}

enum RegistryState {
    Uninitialized { pending: Option<ImplementorIndex> },
    Ready(Handler),
}

/// Owned registry instance, passed to both the build output step and the viewer.
pub struct Registry {
    state: RegistryState,
    submitted: bool,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            state: RegistryState::Uninitialized { pending: None },
            submitted: false,
        }
    }

    pub fn submit(&mut self, index: ImplementorIndex) -> Result<Delivery, RegistryError> {
        if self.submitted {
            return Err(RegistryError::AlreadySubmitted);
        }
        self.submitted = true;

        match &mut self.state {
            RegistryState::Ready(handler) => {
                tracing::debug!(libraries = index.len(), "Delivering index to viewer");
                handler(index);
                Ok(Delivery::Delivered)
            }
            RegistryState::Uninitialized { pending } => {
                tracing::debug!(libraries = index.len(), "Viewer not ready, index pending");
                *pending = Some(index);
                Ok(Delivery::Pending)
            }
        }
    }

    /// Attaches the viewer handler. Returns `true` if a pending index was delivered.
    pub fn attach<F>(&mut self, handler: F) -> Result<bool, RegistryError>
    where
        F: FnMut(ImplementorIndex) + 'static,
    {
        let RegistryState::Uninitialized { pending } = &mut self.state else {
            return Err(RegistryError::AlreadyAttached);
        };

        let pending = pending.take();
        let mut handler: Handler = Box::new(handler);
        let delivered = match pending {
            Some(index) => {
                tracing::debug!(libraries = index.len(), "Delivering pending index to viewer");
                handler(index);
                true
            }
            None => false,
        };

        self.state = RegistryState::Ready(handler);
        Ok(delivered)
    }

    /// Whether this build's single registration has been used.
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self.state, RegistryState::Ready(_))
    }

    pub const fn has_pending(&self) -> bool {
        matches!(
            self.state,
            RegistryState::Uninitialized { pending: Some(_) }
        )
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("ready", &self.is_ready())
            .field("pending", &self.has_pending())
            .field("submitted", &self.submitted)
            .finish()
    }
}
