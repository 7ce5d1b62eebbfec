//! Trailing-edge debouncing
//!
//! Each call re-arms the timer; `action` runs once the calls stop for
//! `delay_ms`.

use std::cell::Cell;
use std::rc::Rc;

use crate::placement::PlacementError;

use super::scheduler;

pub struct Debouncer {
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
    action: Rc<dyn Fn()>,
}

impl Debouncer {
    pub fn new(delay_ms: i32, action: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(None)),
            action: Rc::new(action),
        }
    }

    /// Record an event and push the action back by the full delay
    pub fn call(&self) -> Result<(), PlacementError> {
        if let Some(timeout_id) = self.pending.take() {
            scheduler::cancel(timeout_id)?;
        }

        let pending = Rc::clone(&self.pending);
        let action = Rc::clone(&self.action);
        let timeout_id = scheduler::schedule_deferred(
            move || {
                pending.set(None);
                action();
            },
            self.delay_ms,
        )?;
        self.pending.set(Some(timeout_id));
        Ok(())
    }
}
