use dragkit_core::{DragEventKind, DragGesture, DragHost, GestureTracker, ObserverId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedEvent {
    pub kind: DragEventKind,
    pub gesture: DragGesture,
}

/// Observes all three event kinds of a tracker and keeps them in order.
#[derive(Clone, Default)]
pub struct GestureRecorder {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl GestureRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one observer per event kind on `tracker`.
    pub fn attach<H: DragHost>(&self, tracker: &mut GestureTracker<H>) -> [ObserverId; 3] {
        DragEventKind::ALL.map(|kind| {
            let events = Rc::clone(&self.events);
            tracker.on(kind, move |gesture| {
                events.borrow_mut().push(RecordedEvent {
                    kind,
                    gesture: *gesture,
                });
            })
        })
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<DragEventKind> {
        self.events.borrow().iter().map(|event| event.kind).collect()
    }

    pub fn gestures_of(&self, kind: DragEventKind) -> Vec<DragGesture> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind == kind)
            .map(|event| event.gesture)
            .collect()
    }

    pub fn last(&self) -> Option<RecordedEvent> {
        self.events.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
