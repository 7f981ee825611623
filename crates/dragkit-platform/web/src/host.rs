//! [`DragHost`] backed by the DOM.
//!
//! Down listeners live on the surface element; move/up listeners live on
//! `window` and are bound only while a drag is active. Frames come from
//! `requestAnimationFrame`.

use crate::convert::{apply_disposition, mouse_input, touch_input};
use dragkit_core::{DragHost, EventDisposition, FrameRequestId, GestureTracker, PointerInput};
use dragkit_geometry::{Rect, Size};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, MouseEvent, TouchEvent, Window};

pub(crate) type TrackerCell = RefCell<GestureTracker<WebHost>>;

/// The outstanding animation frame: our id plus the browser's handle.
pub(crate) type ArmedFrame = Rc<Cell<Option<(FrameRequestId, i32)>>>;

/// Set when teardown was requested while the tracker was busy dispatching.
pub(crate) type DeferredTeardown = Rc<Cell<bool>>;

/// Runs `f` against the shared tracker, honoring a deferred teardown.
///
/// Returns `None` if the tracker is gone or already borrowed (an observer
/// feeding events back into its own tracker).
pub(crate) fn with_tracker<R>(
    tracker: &Weak<TrackerCell>,
    teardown: &DeferredTeardown,
    f: impl FnOnce(&mut GestureTracker<WebHost>) -> R,
) -> Option<R> {
    let shared = tracker.upgrade()?;
    let result = match shared.try_borrow_mut() {
        Ok(mut guard) => {
            let result = f(&mut guard);
            if teardown.take() {
                guard.destroy();
            }
            Some(result)
        }
        Err(_) => {
            log::warn!("drag tracker is busy; nested event dropped");
            None
        }
    };
    result
}

type PointerHandler = fn(&mut GestureTracker<WebHost>, &PointerInput) -> EventDisposition;

fn dispatch(
    tracker: &Weak<TrackerCell>,
    teardown: &DeferredTeardown,
    event: &Event,
    input: Option<PointerInput>,
    handler: PointerHandler,
) {
    let Some(input) = input else {
        return;
    };
    if let Some(disposition) = with_tracker(tracker, teardown, |t| handler(t, &input)) {
        apply_disposition(event, disposition);
    }
}

/// JS closures handed to `addEventListener`. They only hold a weak
/// reference to the tracker, so the tracker owns them without a cycle.
pub(crate) struct Listeners {
    mouse_down: Closure<dyn FnMut(MouseEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    frame: Closure<dyn FnMut(f64)>,
}

impl Listeners {
    pub(crate) fn new(
        tracker: Weak<TrackerCell>,
        armed: ArmedFrame,
        teardown: DeferredTeardown,
    ) -> Self {
        let mouse_handler = |handler: PointerHandler| {
            let tracker = tracker.clone();
            let teardown = teardown.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let input = mouse_input(&event);
                let native: &Event = event.as_ref();
                dispatch(&tracker, &teardown, native, Some(input), handler);
            }) as Box<dyn FnMut(_)>)
        };
        let touch_handler = |handler: PointerHandler| {
            let tracker = tracker.clone();
            let teardown = teardown.clone();
            Closure::wrap(Box::new(move |event: TouchEvent| {
                let input = touch_input(&event);
                let native: &Event = event.as_ref();
                dispatch(&tracker, &teardown, native, input, handler);
            }) as Box<dyn FnMut(_)>)
        };

        let mouse_down = mouse_handler(GestureTracker::<WebHost>::handle_pointer_down);
        let mouse_move = mouse_handler(GestureTracker::<WebHost>::handle_pointer_move);
        let mouse_up = mouse_handler(GestureTracker::<WebHost>::handle_pointer_up);
        let touch_start = touch_handler(GestureTracker::<WebHost>::handle_pointer_down);
        let touch_move = touch_handler(GestureTracker::<WebHost>::handle_pointer_move);
        let touch_end = touch_handler(GestureTracker::<WebHost>::handle_pointer_up);

        let frame = {
            let tracker = tracker.clone();
            let teardown = teardown.clone();
            Closure::wrap(Box::new(move |_time: f64| {
                let Some((id, _)) = armed.take() else {
                    return;
                };
                with_tracker(&tracker, &teardown, |t| t.on_frame(id));
            }) as Box<dyn FnMut(f64)>)
        };

        Self {
            mouse_down,
            touch_start,
            mouse_move,
            mouse_up,
            touch_move,
            touch_end,
            frame,
        }
    }
}

fn non_passive() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_capture(false);
    options.set_passive(false);
    options
}

fn callback<T: ?Sized + WasmClosure>(closure: &Closure<T>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref()
}

pub struct WebHost {
    window: Window,
    element: Element,
    listeners: Listeners,
    armed: ArmedFrame,
    next_frame: u64,
    surface_attached: bool,
    global_attached: bool,
}

impl WebHost {
    pub(crate) fn new(window: Window, element: Element, listeners: Listeners, armed: ArmedFrame) -> Self {
        Self {
            window,
            element,
            listeners,
            armed,
            next_frame: 0,
            surface_attached: false,
            global_attached: false,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn surface_attached(&self) -> bool {
        self.surface_attached
    }

    pub fn global_attached(&self) -> bool {
        self.global_attached
    }

    fn try_attach_surface(&self) -> Result<(), JsValue> {
        self.element.add_event_listener_with_callback_and_bool(
            "mousedown",
            callback(&self.listeners.mouse_down),
            false,
        )?;
        self.element
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                callback(&self.listeners.touch_start),
                &non_passive(),
            )?;
        Ok(())
    }

    fn try_detach_surface(&self) -> Result<(), JsValue> {
        self.element.remove_event_listener_with_callback_and_bool(
            "mousedown",
            callback(&self.listeners.mouse_down),
            false,
        )?;
        self.element.remove_event_listener_with_callback_and_bool(
            "touchstart",
            callback(&self.listeners.touch_start),
            false,
        )?;
        Ok(())
    }

    fn try_attach_global(&self) -> Result<(), JsValue> {
        let options = non_passive();
        let window = &self.window;
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "mousemove",
            callback(&self.listeners.mouse_move),
            &options,
        )?;
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "mouseup",
            callback(&self.listeners.mouse_up),
            &options,
        )?;
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            callback(&self.listeners.touch_move),
            &options,
        )?;
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "touchend",
            callback(&self.listeners.touch_end),
            &options,
        )?;
        Ok(())
    }

    fn try_detach_global(&self) -> Result<(), JsValue> {
        let window = &self.window;
        window.remove_event_listener_with_callback_and_bool(
            "mousemove",
            callback(&self.listeners.mouse_move),
            false,
        )?;
        window.remove_event_listener_with_callback_and_bool(
            "mouseup",
            callback(&self.listeners.mouse_up),
            false,
        )?;
        window.remove_event_listener_with_callback_and_bool(
            "touchmove",
            callback(&self.listeners.touch_move),
            false,
        )?;
        window.remove_event_listener_with_callback_and_bool(
            "touchend",
            callback(&self.listeners.touch_end),
            false,
        )?;
        Ok(())
    }

}

fn window_extent(value: Result<JsValue, JsValue>) -> f32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}

impl DragHost for WebHost {
    fn surface_bounds(&self) -> Rect {
        // getBoundingClientRect is viewport relative; pointers are page relative.
        let rect = self.element.get_bounding_client_rect();
        let scroll_x = self.window.scroll_x().unwrap_or(0.0);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        Rect::new(
            (rect.left() + scroll_x) as f32,
            (rect.top() + scroll_y) as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn viewport_size(&self) -> Size {
        Size::new(
            window_extent(self.window.inner_width()),
            window_extent(self.window.inner_height()),
        )
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_frame);
        self.next_frame += 1;
        match self
            .window
            .request_animation_frame(callback(&self.listeners.frame))
        {
            Ok(handle) => self.armed.set(Some((id, handle))),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let Some((armed, handle)) = self.armed.get() else {
            return;
        };
        if armed != id {
            return;
        }
        self.armed.set(None);
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
    }

    fn attach_surface_listeners(&mut self) {
        if self.surface_attached {
            return;
        }
        match self.try_attach_surface() {
            Ok(()) => self.surface_attached = true,
            Err(err) => log::warn!("failed to bind surface listeners: {err:?}"),
        }
    }

    fn detach_surface_listeners(&mut self) {
        if !self.surface_attached {
            return;
        }
        self.surface_attached = false;
        if let Err(err) = self.try_detach_surface() {
            log::warn!("failed to unbind surface listeners: {err:?}");
        }
    }

    fn attach_global_listeners(&mut self) {
        if self.global_attached {
            return;
        }
        match self.try_attach_global() {
            Ok(()) => self.global_attached = true,
            Err(err) => log::warn!("failed to bind window listeners: {err:?}"),
        }
    }

    fn detach_global_listeners(&mut self) {
        if !self.global_attached {
            return;
        }
        self.global_attached = false;
        if let Err(err) = self.try_detach_global() {
            log::warn!("failed to unbind window listeners: {err:?}");
        }
    }
}
