//! Web platform adapter for Dragkit
//!
//! Binds a [`GestureTracker`](dragkit_core::GestureTracker) to a DOM element:
//! `mousedown`/`touchstart` on the element, `mousemove`/`mouseup`/
//! `touchmove`/`touchend` on `window` while a drag is active, and
//! `requestAnimationFrame` for `drag` notifications. Touch listeners are
//! registered non-passive so the default scroll can be suppressed.
//!
//! Rust callers use [`WebDragTracker`]; JavaScript callers use the
//! `createDragHandler` export from [`bindings`].

pub mod bindings;
mod convert;
mod host;
mod tracker;

pub use bindings::{create_drag_handler, DragHandler};
pub use convert::pointer_input;
pub use host::WebHost;
pub use tracker::WebDragTracker;

/// Routes `log` output to the browser console and installs the panic hook.
#[cfg(feature = "console")]
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(level));
}
