//! Observer registration and fan-out for drag notifications.

use crate::gesture::DragGesture;
use smallvec::SmallVec;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    DragStart,
    Drag,
    DragEnd,
}

impl DragEventKind {
    pub const ALL: [DragEventKind; 3] = [
        DragEventKind::DragStart,
        DragEventKind::Drag,
        DragEventKind::DragEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DragEventKind::DragStart => "dragstart",
            DragEventKind::Drag => "drag",
            DragEventKind::DragEnd => "dragend",
        }
    }

    fn slot(self) -> usize {
        match self {
            DragEventKind::DragStart => 0,
            DragEventKind::Drag => 1,
            DragEventKind::DragEnd => 2,
        }
    }
}

impl std::fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragEventKind {
    type Err = DragEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DragEventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DragEventKindError::Unknown(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEventKindError {
    Unknown(String),
}

impl std::fmt::Display for DragEventKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragEventKindError::Unknown(name) => write!(
                f,
                "unknown drag event '{name}'; expected dragstart, drag or dragend"
            ),
        }
    }
}

impl std::error::Error for DragEventKindError {}

/// Handle returned by registration, used to remove a single observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub type GestureCallback = Box<dyn FnMut(&DragGesture)>;

struct Observer {
    id: ObserverId,
    callback: GestureCallback,
}

/// Callbacks keyed by event kind, invoked in registration order.
#[derive(Default)]
pub struct GestureObservers {
    slots: [SmallVec<[Observer; 2]>; 3],
    next_id: u64,
}

impl GestureObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        kind: DragEventKind,
        callback: impl FnMut(&DragGesture) + 'static,
    ) -> ObserverId {
        let id = self.allocate_id();
        self.slots[kind.slot()].push(Observer {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes one registration. Returns `false` if the id is unknown.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        for slot in &mut self.slots {
            if let Some(index) = slot.iter().position(|observer| observer.id == id) {
                slot.remove(index);
                return true;
            }
        }
        false
    }

    pub fn count(&self, kind: DragEventKind) -> usize {
        self.slots[kind.slot()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_empty())
    }

    /// Invokes every callback registered for `kind`. No-op when none are.
    pub fn notify(&mut self, kind: DragEventKind, gesture: &DragGesture) {
        for observer in self.slots[kind.slot()].iter_mut() {
            (observer.callback)(gesture);
        }
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Id that matches no registration, handed out after teardown.
    pub(crate) fn detached_id(&mut self) -> ObserverId {
        self.allocate_id()
    }

    fn allocate_id(&mut self) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        id
    }
}
