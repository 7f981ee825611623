use crate::host::{with_tracker, ArmedFrame, DeferredTeardown, Listeners, TrackerCell, WebHost};
use dragkit_core::{DragEventKind, DragGesture, GestureTracker, ObserverId, TrackerConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// A [`GestureTracker`] bound to a DOM element.
///
/// Dropping the last handle removes every listener, same as
/// [`destroy`](Self::destroy).
pub struct WebDragTracker {
    tracker: Rc<TrackerCell>,
    teardown: DeferredTeardown,
}

impl WebDragTracker {
    pub fn attach(element: &Element) -> Result<Self, JsValue> {
        Self::attach_with_config(element, TrackerConfig::default())
    }

    pub fn attach_with_config(element: &Element, config: TrackerConfig) -> Result<Self, JsValue> {
        config
            .validate()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let window = web_sys::window().ok_or("no global window exists")?;

        let armed: ArmedFrame = Rc::new(Cell::new(None));
        let teardown: DeferredTeardown = Rc::new(Cell::new(false));
        let tracker = Rc::new_cyclic(|weak| {
            let listeners = Listeners::new(weak.clone(), armed.clone(), teardown.clone());
            let host = WebHost::new(window, element.clone(), listeners, armed);
            RefCell::new(GestureTracker::with_config(host, config))
        });

        if !tracker.borrow().host().surface_attached() {
            return Err(JsValue::from_str(
                "failed to bind pointer listeners on the drag surface",
            ));
        }
        log::debug!("drag tracker attached");
        Ok(Self { tracker, teardown })
    }

    /// Registers `callback` for `kind`.
    ///
    /// Fails only when called from inside one of this tracker's own
    /// observers.
    pub fn on(
        &self,
        kind: DragEventKind,
        callback: impl FnMut(&DragGesture) + 'static,
    ) -> Result<ObserverId, JsValue> {
        let mut tracker = self
            .tracker
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cannot register observers while dispatching"))?;
        Ok(tracker.on(kind, callback))
    }

    pub fn off(&self, id: ObserverId) -> bool {
        with_tracker(&Rc::downgrade(&self.tracker), &self.teardown, |t| t.off(id)).unwrap_or(false)
    }

    /// Reports `false` while the tracker is busy dispatching.
    pub fn is_dragging(&self) -> bool {
        self.tracker
            .try_borrow()
            .map(|tracker| tracker.is_dragging())
            .unwrap_or(false)
    }

    /// Removes every listener and cancels any pending frame.
    ///
    /// When called from inside an observer the teardown runs as soon as the
    /// current dispatch returns.
    pub fn destroy(&self) {
        match self.tracker.try_borrow_mut() {
            Ok(mut tracker) => tracker.destroy(),
            Err(_) => {
                log::debug!("destroy requested during dispatch; deferring");
                self.teardown.set(true);
            }
        }
    }
}
