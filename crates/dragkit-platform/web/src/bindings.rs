//! JavaScript-facing API.
//!
//! ```js
//! import { createDragHandler } from "dragkit";
//!
//! const handler = createDragHandler(document.querySelector("#slider"));
//! handler.on("drag", (event) => console.log(event.detail.distance.x));
//! handler.destroy();
//! ```
//!
//! Observers receive a `CustomEvent` whose `detail` is the gesture as a plain
//! object (`elementPoint`, `windowPoint`, `timeStamp`, `direction`,
//! `distance`, `velocity`).

use crate::tracker::WebDragTracker;
use dragkit_core::{
    build_sample, direction, distance, velocity, DragEventKind, DragGesture, PointerInput,
    SampleContext, Vector,
};
use dragkit_geometry::{Rect, Size};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

#[wasm_bindgen]
pub struct DragHandler {
    inner: WebDragTracker,
}

#[wasm_bindgen(js_name = createDragHandler)]
pub fn create_drag_handler(element: &HtmlElement) -> Result<DragHandler, JsValue> {
    Ok(DragHandler {
        inner: WebDragTracker::attach(element)?,
    })
}

#[wasm_bindgen]
impl DragHandler {
    /// Registers `callback` for `"dragstart"`, `"drag"` or `"dragend"`.
    pub fn on(&self, event_type: &str, callback: Function) -> Result<(), JsValue> {
        let kind: DragEventKind = event_type
            .parse()
            .map_err(|err: dragkit_core::DragEventKindError| JsValue::from_str(&err.to_string()))?;
        self.inner.on(kind, move |gesture| {
            let result = gesture_event(kind, gesture)
                .and_then(|event| callback.call1(&JsValue::NULL, &event));
            if let Err(err) = result {
                log::warn!("'{kind}' observer threw: {err:?}");
            }
        })?;
        Ok(())
    }

    pub fn destroy(&self) {
        self.inner.destroy();
    }
}

#[wasm_bindgen(js_name = calculateDragDirection)]
pub fn calculate_drag_direction(start: &JsValue, end: &JsValue) -> Result<JsValue, JsValue> {
    let start = gesture_from_js(start)?;
    let end = gesture_from_js(end)?;
    let dir = direction(&start, &end);

    let object = Object::new();
    set(
        &object,
        "x",
        &dir.x.map_or(JsValue::NULL, |x| JsValue::from_str(x.as_str())),
    )?;
    set(
        &object,
        "y",
        &dir.y.map_or(JsValue::NULL, |y| JsValue::from_str(y.as_str())),
    )?;
    Ok(object.into())
}

#[wasm_bindgen(js_name = calculateDragVelocity)]
pub fn calculate_drag_velocity(start: &JsValue, end: &JsValue) -> Result<JsValue, JsValue> {
    let start = gesture_from_js(start)?;
    let end = gesture_from_js(end)?;
    vector_to_js(velocity(&start, &end, window_viewport()))
}

#[wasm_bindgen(js_name = calculateDragDistance)]
pub fn calculate_drag_distance(start: &JsValue, end: &JsValue) -> Result<JsValue, JsValue> {
    let start = gesture_from_js(start)?;
    let end = gesture_from_js(end)?;
    vector_to_js(distance(&start, &end))
}

fn gesture_event(kind: DragEventKind, gesture: &DragGesture) -> Result<JsValue, JsValue> {
    let init = CustomEventInit::new();
    init.set_detail(&gesture_to_js(gesture)?);
    let event = CustomEvent::new_with_event_init_dict(kind.as_str(), &init)?;
    Ok(event.into())
}

fn set(object: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(object, &JsValue::from_str(key), value)?;
    Ok(())
}

fn vector_to_js(vector: Vector) -> Result<JsValue, JsValue> {
    let object = Object::new();
    set(&object, "x", &JsValue::from_f64(f64::from(vector.x)))?;
    set(&object, "y", &JsValue::from_f64(f64::from(vector.y)))?;
    Ok(object.into())
}

pub(crate) fn gesture_to_js(gesture: &DragGesture) -> Result<JsValue, JsValue> {
    let dir = gesture.direction();
    let direction = Object::new();
    set(
        &direction,
        "x",
        &dir.x.map_or(JsValue::NULL, |x| JsValue::from_str(x.as_str())),
    )?;
    set(
        &direction,
        "y",
        &dir.y.map_or(JsValue::NULL, |y| JsValue::from_str(y.as_str())),
    )?;

    let object = Object::new();
    set(&object, "elementPoint", &vector_to_js(gesture.element_point())?)?;
    set(&object, "windowPoint", &vector_to_js(gesture.window_point())?)?;
    set(&object, "timeStamp", &JsValue::from_f64(gesture.timestamp()))?;
    set(&object, "direction", &direction)?;
    set(&object, "distance", &vector_to_js(gesture.distance())?)?;
    set(&object, "velocity", &vector_to_js(gesture.velocity())?)?;
    Ok(object.into())
}

fn number(object: &JsValue, key: &str) -> Result<f64, JsValue> {
    Reflect::get(object, &JsValue::from_str(key))?
        .as_f64()
        .ok_or_else(|| JsValue::from_str(&format!("gesture field '{key}' is not a number")))
}

/// Rebuilds a gesture from the `windowPoint` and `timeStamp` of a JS object.
///
/// Only those two fields feed the kinematic helpers.
fn gesture_from_js(value: &JsValue) -> Result<DragGesture, JsValue> {
    let point = Reflect::get(value, &JsValue::from_str("windowPoint"))?;
    let x = number(&point, "x")?;
    let y = number(&point, "y")?;
    let timestamp = number(value, "timeStamp")?;
    let input = PointerInput::mouse(x as f32, y as f32, timestamp);
    let context = SampleContext::new(Rect::default(), window_viewport());
    Ok(build_sample(&input, &context, None, None))
}

fn window_viewport() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::ZERO;
    };
    let extent = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Size::new(extent(window.inner_width()), extent(window.inner_height()))
}
