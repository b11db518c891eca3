//! Publish/subscribe channel for one columns field.
//!
//! Subscribers either watch the whole array or a single index. Slice
//! subscribers see the items at their index (`[]` when the slot is missing) and
//! are only called when that projection changes.
//!
//! Every stored value gets a version. A dispatch stops as soon as a newer
//! version has been stored, so a listener that writes back never causes the
//! remaining subscribers to receive the value it replaced.

use columns_model::{Column, Item};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::debug;

type WholeCallback = Arc<dyn Fn(&Vec<Column>) + Send + Sync>;
type SliceCallback = Arc<dyn Fn(&Vec<Item>) + Send + Sync>;

/// What a subscription observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionScope {
    Whole,
    Slice(usize),
}

enum Subscriber {
    Whole(WholeCallback),
    Slice {
        index: usize,
        callback: SliceCallback,
        /// Last projection delivered (or observed at subscribe time).
        last: Mutex<Vec<Item>>,
    },
}

impl Subscriber {
    fn scope(&self) -> SubscriptionScope {
        match self {
            Self::Whole(_) => SubscriptionScope::Whole,
            Self::Slice { index, .. } => SubscriptionScope::Slice(*index),
        }
    }

    // Callbacks take `&Vec<_>` to match `Listener<Vec<_>>`.
    #[allow(clippy::ptr_arg)]
    fn notify(&self, columns: &Vec<Column>) {
        match self {
            Self::Whole(callback) => callback(columns),
            Self::Slice { index, callback, last } => {
                let projected = project(columns, *index);
                {
                    let mut last = last.lock().unwrap_or_else(PoisonError::into_inner);
                    if *last == projected {
                        return;
                    }
                    *last = projected.clone();
                }
                callback(&projected);
            }
        }
    }
}

/// Items at `index`, or an empty list when the slot does not exist.
pub(crate) fn project(columns: &[Column], index: usize) -> Vec<Item> {
    columns.get(index).map(|c| c.items.clone()).unwrap_or_default()
}

#[derive(Default)]
struct ChannelState {
    next_id: u64,
    /// Version of the most recently stored value.
    version: u64,
    subscribers: Vec<(u64, Arc<Subscriber>)>,
}

/// The change stream of one backing field.
#[derive(Clone, Default)]
pub struct FieldChannel {
    state: Arc<Mutex<ChannelState>>,
}

impl FieldChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_whole(&self, callback: impl Fn(&Vec<Column>) + Send + Sync + 'static) -> Subscription {
        self.attach(Subscriber::Whole(Arc::new(callback)))
    }

    /// Attaches a slice subscriber. `current` is the projection the subscriber
    /// already knows, so an unchanged slot produces no first call.
    pub fn attach_slice(
        &self,
        index: usize,
        current: Vec<Item>,
        callback: impl Fn(&Vec<Item>) + Send + Sync + 'static,
    ) -> Subscription {
        self.attach(Subscriber::Slice {
            index,
            callback: Arc::new(callback),
            last: Mutex::new(current),
        })
    }

    fn attach(&self, subscriber: Subscriber) -> Subscription {
        let scope = subscriber.scope();
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.push((id, Arc::new(subscriber)));
        Subscription {
            id,
            scope,
            state: Arc::downgrade(&self.state),
        }
    }

    /// Claims the version for a value about to be stored. Call it while the
    /// value lock is held so versions follow store order.
    pub fn next_version(&self) -> u64 {
        let mut state = self.lock();
        state.version += 1;
        state.version
    }

    pub fn version(&self) -> u64 {
        self.lock().version
    }

    /// Notifies every subscriber of a new array value.
    ///
    /// Subscribers run after the channel lock is released and may re-enter
    /// the field (read it, write it, attach or detach). Once a newer version
    /// than `version` is stored, the rest of this pass is dropped: the newer
    /// value's own dispatch reaches everyone.
    #[allow(clippy::ptr_arg)]
    pub fn dispatch(&self, version: u64, columns: &Vec<Column>) {
        let snapshot: Vec<Arc<Subscriber>> = self.lock().subscribers.iter().map(|(_, s)| Arc::clone(s)).collect();
        for subscriber in snapshot {
            if self.version() != version {
                debug!("Dispatch of version {} superseded", version);
                return;
            }
            subscriber.notify(columns);
        }
    }

    /// Claims a version and notifies subscribers of `columns`.
    #[allow(clippy::ptr_arg)]
    pub fn publish(&self, columns: &Vec<Column>) {
        let version = self.next_version();
        self.dispatch(version, columns);
    }

    pub fn len(&self) -> usize {
        self.lock().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChannelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Guard for one registration. Detaches on [`Subscription::unsubscribe`] or
/// when dropped; other registrations are unaffected.
#[must_use = "dropping a Subscription detaches it immediately"]
pub struct Subscription {
    id: u64,
    scope: SubscriptionScope,
    state: Weak<Mutex<ChannelState>>,
}

impl Subscription {
    pub fn scope(&self) -> SubscriptionScope {
        self.scope
    }

    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    fn detach(&self) {
        if let Some(state) = self.state.upgrade() {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("scope", &self.scope)
            .finish()
    }
}
