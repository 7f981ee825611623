//! Native event → [`PointerInput`] conversion.

use dragkit_core::{EventDisposition, PointerInput, PointerSource};
use web_sys::{Event, MouseEvent, TouchEvent};

/// Builds a pointer input from raw page coordinates.
///
/// `contacts` is the length of the live touch list. It is zero on
/// `touchend`, where the lifted finger only shows up in `changedTouches`;
/// that still counts as one contact.
pub fn pointer_input(
    source: PointerSource,
    page_x: i32,
    page_y: i32,
    timestamp: f64,
    contacts: u32,
) -> PointerInput {
    let contacts = (contacts as usize).max(1);
    match source {
        PointerSource::Mouse => PointerInput::mouse(page_x as f32, page_y as f32, timestamp),
        PointerSource::Touch => {
            PointerInput::touch(page_x as f32, page_y as f32, timestamp, contacts)
        }
    }
}

pub(crate) fn mouse_input(event: &MouseEvent) -> PointerInput {
    pointer_input(
        PointerSource::Mouse,
        event.page_x(),
        event.page_y(),
        event.time_stamp(),
        1,
    )
}

/// First live touch, or the first changed touch once all fingers lifted.
pub(crate) fn touch_input(event: &TouchEvent) -> Option<PointerInput> {
    let touches = event.touches();
    let contact = touches
        .get(0)
        .or_else(|| event.changed_touches().get(0))?;
    Some(pointer_input(
        PointerSource::Touch,
        contact.page_x(),
        contact.page_y(),
        event.time_stamp(),
        touches.length(),
    ))
}

pub(crate) fn apply_disposition(event: &Event, disposition: EventDisposition) {
    if disposition.prevent_default {
        event.prevent_default();
    }
    if disposition.stop_propagation {
        event.stop_propagation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragkit_core::Vector;

    #[test]
    fn mouse_input_has_one_contact() {
        let input = pointer_input(PointerSource::Mouse, 12, 34, 56.5, 0);
        assert_eq!(input.page_position, Vector::new(12.0, 34.0));
        assert_eq!(input.timestamp, 56.5);
        assert_eq!(input.contacts, 1);
        assert_eq!(input.source, PointerSource::Mouse);
    }

    #[test]
    fn lifted_touch_counts_as_single_contact() {
        let input = pointer_input(PointerSource::Touch, 1, 2, 3.0, 0);
        assert_eq!(input.contacts, 1);
        assert!(!input.is_multi_touch());
    }

    #[test]
    fn two_finger_touch_is_multi_touch() {
        let input = pointer_input(PointerSource::Touch, 1, 2, 3.0, 2);
        assert!(input.is_multi_touch());
    }
}
