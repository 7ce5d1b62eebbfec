//! Registry of floating containers currently on the page
//!
//! Every container gets a handle when it is created. A reset drops all
//! handles at once, so deferred reveal tasks that run afterwards can tell
//! their container is gone and do nothing.

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

lazy_static! {
    static ref REGISTRY: Mutex<FloatingRegistry> = Mutex::new(FloatingRegistry::new());
}

/// Lock the page-wide registry.
///
/// A poisoned lock only means a panic happened mid-update on this single
/// thread; the set of ids is still usable.
pub fn registry() -> MutexGuard<'static, FloatingRegistry> {
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Identifier of one rendered floating container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatingHandle(u32);

impl FloatingHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Set of live floating containers
#[derive(Debug, Default)]
pub struct FloatingRegistry {
    next_id: u32,
    live: HashSet<FloatingHandle>,
}

impl FloatingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new container and return its handle
    pub fn register(&mut self) -> FloatingHandle {
        let handle = FloatingHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.live.insert(handle);
        handle
    }

    pub fn is_live(&self, handle: FloatingHandle) -> bool {
        self.live.contains(&handle)
    }

    /// Forget a single container. Returns false if it was already gone.
    pub fn release(&mut self, handle: FloatingHandle) -> bool {
        self.live.remove(&handle)
    }

    /// Forget every container. Returns how many were live.
    pub fn reset(&mut self) -> usize {
        let count = self.live.len();
        self.live.clear();
        count
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
