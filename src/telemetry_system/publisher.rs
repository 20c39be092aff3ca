use std::sync::Arc;

use parking_lot::RwLock;

/// Readers always get a complete snapshot, never a half-written one.
#[derive(Debug)]
pub struct SnapshotPublisher<T> {
    latest: Arc<RwLock<Arc<T>>>,
}

impl<T> Clone for SnapshotPublisher<T> {
    fn clone(&self) -> Self {
        SnapshotPublisher {
            latest: Arc::clone(&self.latest),
        }
    }
}

impl<T> SnapshotPublisher<T> {
    pub fn new(initial: T) -> Self {
        SnapshotPublisher {
            latest: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    pub fn publish(&self, snapshot: T) {
        *self.latest.write() = Arc::new(snapshot);
    }

    pub fn latest(&self) -> Arc<T> {
        Arc::clone(&self.latest.read())
    }
}
