//! Process-wide session state container.
//!
//! The store holds the one [`Session`] per process and notifies
//! subscribers on every committed change. It performs no network
//! access and holds no business logic; the session controller is its
//! single writer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use gatehouse_domain::Session;

/// Handle returned by [`SessionStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn Fn(&Session) + Send + Sync>;

/// Thread-safe container for the process-wide [`Session`].
///
/// Reads return snapshots; writes go through [`SessionStore::update`],
/// which applies the mutation atomically and then invokes every
/// subscriber, synchronously, in registration order, with the committed
/// state. A subscriber can never observe a partial write.
#[derive(Default)]
pub struct SessionStore {
    session: RwLock<Session>,
    listeners: Mutex<Vec<(SubscriberId, Listener)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    /// Creates a store holding an empty, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current session.
    #[must_use]
    pub fn get(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `mutate` to the session under the write lock, then
    /// notifies subscribers with the committed snapshot.
    ///
    /// The write lock is released before listeners run, so a listener
    /// may read the store (it sees the committed state) but must not
    /// call `update` reentrantly from the notification path of another
    /// thread's update it is racing with; the controller is the only
    /// writer, which makes this moot in practice.
    pub fn update(&self, mutate: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self
                .session
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            mutate(&mut session);
            session.clone()
        };
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in listeners.iter() {
            listener(&snapshot);
        }
    }

    /// Registers a listener invoked once per committed update.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a previously registered listener.
    ///
    /// Unsubscribing an unknown id is a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.get())
            .finish_non_exhaustive()
    }
}
