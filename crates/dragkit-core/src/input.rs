use dragkit_geometry::Vector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A native mouse or touch event reduced to a single pointer.
///
/// Hosts build one of these per down/move/up event. For touch events the
/// position is the first contact in the touch list and `contacts` is the
/// number of simultaneous touches; mouse events always carry one contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub page_position: Vector,
    /// Event time in milliseconds.
    pub timestamp: f64,
    pub contacts: usize,
    pub source: PointerSource,
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32, timestamp: f64) -> Self {
        Self {
            page_position: Vector::new(x, y),
            timestamp,
            contacts: 1,
            source: PointerSource::Mouse,
        }
    }

    pub fn touch(x: f32, y: f32, timestamp: f64, contacts: usize) -> Self {
        Self {
            page_position: Vector::new(x, y),
            timestamp,
            contacts,
            source: PointerSource::Touch,
        }
    }

    pub fn is_multi_touch(&self) -> bool {
        self.contacts > 1
    }
}

/// What the host should do with the native event after the tracker saw it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventDisposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventDisposition {
    /// The tracker did not act on the event.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };

    pub const CONSUMED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    pub fn is_ignored(&self) -> bool {
        *self == Self::IGNORED
    }
}
