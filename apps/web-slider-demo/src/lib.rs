//! Slider thumb dragged along a track.
//!
//! Expects a page with `#track` containing `#thumb`. The thumb follows the
//! horizontal drag distance, clamped to the track.

use dragkit_core::DragEventKind;
use dragkit_platform_web::WebDragTracker;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

thread_local! {
    static SLIDER: RefCell<Option<WebDragTracker>> = const { RefCell::new(None) };
}

#[derive(Default)]
struct Thumb {
    offset: Cell<f32>,
    origin: Cell<f32>,
}

impl Thumb {
    fn place(&self, element: &HtmlElement, offset: f32) {
        self.offset.set(offset);
        let transform = format!("translateX({offset}px)");
        if let Err(err) = element.style().set_property("transform", &transform) {
            log::warn!("failed to move thumb: {err:?}");
        }
    }
}

fn element_by_id(document: &web_sys::Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element with id '{id}' not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("'{id}' is not an HTML element")))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    dragkit_platform_web::init_logging(log::Level::Debug);

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let track = element_by_id(&document, "track")?;
    let thumb_element = element_by_id(&document, "thumb")?;
    let max_offset = (track.client_width() - thumb_element.client_width()).max(0) as f32;

    let tracker = WebDragTracker::attach(&thumb_element)?;
    let thumb = Rc::new(Thumb::default());

    {
        let thumb = thumb.clone();
        tracker.on(DragEventKind::DragStart, move |_| {
            thumb.origin.set(thumb.offset.get());
        })?;
    }
    {
        let thumb = thumb.clone();
        let element = thumb_element.clone();
        tracker.on(DragEventKind::Drag, move |gesture| {
            let offset = (thumb.origin.get() + gesture.distance().x).clamp(0.0, max_offset);
            thumb.place(&element, offset);
        })?;
    }
    tracker.on(DragEventKind::DragEnd, move |gesture| {
        let velocity = gesture.velocity();
        log::info!(
            "released at {:.0}px, velocity {:.3}%/ms",
            thumb.offset.get(),
            velocity.x
        );
    })?;

    SLIDER.with(|slot| slot.replace(Some(tracker)));
    Ok(())
}
