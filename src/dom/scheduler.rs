//! Deferred tasks on the browser event loop

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::placement::PlacementError;

/// Run `task` once after `delay_ms`, after the current synchronous work.
///
/// Returns the timeout id. The closure is handed to the JS side and freed
/// after it runs.
pub fn schedule_deferred<F>(task: F, delay_ms: i32) -> Result<i32, PlacementError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(task);
    super::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            delay_ms.max(0),
        )
        .map_err(|e| PlacementError::dom("setTimeout", e))
}

/// Cancel a timeout scheduled with `schedule_deferred`
pub fn cancel(timeout_id: i32) -> Result<(), PlacementError> {
    super::window()?.clear_timeout_with_handle(timeout_id);
    Ok(())
}
