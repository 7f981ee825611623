//! The drag gesture state machine.
//!
//! A [`GestureTracker`] follows one contact point at a time:
//!
//! - pointer-down on the surface starts a drag, freezes the surface bounds,
//!   binds global move/up listeners and emits `dragstart`;
//! - pointer-move advances the stored sample when the throttle interval has
//!   passed and (re)arms a single frame request;
//! - the frame callback emits `drag` with the latest stored sample;
//! - pointer-up cancels the pending frame, emits `dragend` and unbinds the
//!   global listeners.
//!
//! `destroy` tears everything down, including the surface listeners. It is
//! also run when the tracker is dropped.

use crate::config::{ConfigError, TrackerConfig};
use crate::gesture::{build_sample, DragGesture, SampleContext};
use crate::host::{DragHost, FrameRequestId};
use crate::input::{EventDisposition, PointerInput};
use crate::observers::{DragEventKind, GestureObservers, ObserverId};
use dragkit_geometry::Rect;

struct ActiveDrag {
    first: DragGesture,
    last: DragGesture,
    /// Surface bounds at drag start; element points stay in this frame.
    bounds: Rect,
    pending_frame: Option<FrameRequestId>,
}

enum TrackerState {
    Idle,
    Dragging(ActiveDrag),
    Destroyed,
}

pub struct GestureTracker<H: DragHost> {
    host: H,
    config: TrackerConfig,
    state: TrackerState,
    observers: GestureObservers,
}

impl<H: DragHost> GestureTracker<H> {
    /// Creates a tracker with default timing and binds the surface listeners.
    pub fn new(host: H) -> Self {
        Self::with_config(host, TrackerConfig::default())
    }

    pub fn with_config(mut host: H, config: TrackerConfig) -> Self {
        host.attach_surface_listeners();
        Self {
            host,
            config,
            state: TrackerState::Idle,
            observers: GestureObservers::new(),
        }
    }

    /// Like [`with_config`](Self::with_config), rejecting invalid intervals.
    pub fn try_with_config(host: H, config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(host, config))
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackerState::Dragging(_))
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self.state, TrackerState::Destroyed)
    }

    pub fn has_pending_frame(&self) -> bool {
        matches!(
            &self.state,
            TrackerState::Dragging(ActiveDrag {
                pending_frame: Some(_),
                ..
            })
        )
    }

    /// The first sample of the active drag.
    pub fn first_gesture(&self) -> Option<&DragGesture> {
        match &self.state {
            TrackerState::Dragging(drag) => Some(&drag.first),
            _ => None,
        }
    }

    /// The most recently stored sample of the active drag.
    pub fn last_gesture(&self) -> Option<&DragGesture> {
        match &self.state {
            TrackerState::Dragging(drag) => Some(&drag.last),
            _ => None,
        }
    }

    /// Surface bounds frozen at the start of the active drag.
    pub fn drag_bounds(&self) -> Option<Rect> {
        match &self.state {
            TrackerState::Dragging(drag) => Some(drag.bounds),
            _ => None,
        }
    }

    /// Registers `callback` for `kind`.
    ///
    /// Callbacks run synchronously from inside the tracker and must not call
    /// back into it. After [`destroy`](Self::destroy) registration is ignored
    /// and the returned id matches nothing.
    pub fn on(
        &mut self,
        kind: DragEventKind,
        callback: impl FnMut(&DragGesture) + 'static,
    ) -> ObserverId {
        if self.is_destroyed() {
            log::warn!("ignoring '{kind}' observer registered on a destroyed tracker");
            return self.observers.detached_id();
        }
        self.observers.register(kind, callback)
    }

    pub fn off(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self, kind: DragEventKind) -> usize {
        self.observers.count(kind)
    }

    pub fn handle_pointer_down(&mut self, input: &PointerInput) -> EventDisposition {
        match self.state {
            TrackerState::Idle => {}
            TrackerState::Dragging(_) => {
                log::debug!("pointer down ignored: a drag is already active");
                return EventDisposition::IGNORED;
            }
            TrackerState::Destroyed => return EventDisposition::IGNORED,
        }

        if input.is_multi_touch() {
            log::debug!(
                "pointer down ignored: {} simultaneous touches",
                input.contacts
            );
            return EventDisposition::IGNORED;
        }

        let bounds = self.host.surface_bounds();
        let context = self.sample_context(bounds);
        let first = build_sample(input, &context, None, None);
        let last = build_sample(input, &context, None, None);

        self.host.attach_global_listeners();
        self.state = TrackerState::Dragging(ActiveDrag {
            first,
            last,
            bounds,
            pending_frame: None,
        });

        log::trace!(
            "drag started at {:?} (bounds {:?})",
            first.window_point(),
            bounds
        );
        self.observers.notify(DragEventKind::DragStart, &first);
        EventDisposition::PREVENT_DEFAULT
    }

    pub fn handle_pointer_move(&mut self, input: &PointerInput) -> EventDisposition {
        let TrackerState::Dragging(drag) = &mut self.state else {
            return EventDisposition::IGNORED;
        };

        if input.timestamp - drag.last.timestamp() > self.config.throttle_interval_ms {
            let context = SampleContext {
                bounds: drag.bounds,
                viewport: self.host.viewport_size(),
                min_velocity_interval_ms: self.config.min_velocity_interval_ms,
            };
            drag.last = build_sample(input, &context, Some(&drag.first), Some(&drag.last));
            log::trace!("drag sample advanced to {:?}", drag.last.window_point());
        }

        if let Some(pending) = drag.pending_frame.take() {
            self.host.cancel_frame(pending);
        }
        drag.pending_frame = Some(self.host.request_frame());

        EventDisposition::PREVENT_DEFAULT
    }

    /// Runs the frame callback for `id`.
    ///
    /// Ids that are not the currently pending request (cancelled, stale, or
    /// from a finished drag) are ignored.
    pub fn on_frame(&mut self, id: FrameRequestId) {
        let TrackerState::Dragging(drag) = &mut self.state else {
            log::trace!("frame {id:?} fired with no active drag");
            return;
        };
        if drag.pending_frame != Some(id) {
            log::trace!("stale frame {id:?} ignored");
            return;
        }
        drag.pending_frame = None;

        let gesture = drag.last;
        self.observers.notify(DragEventKind::Drag, &gesture);
    }

    pub fn handle_pointer_up(&mut self, _input: &PointerInput) -> EventDisposition {
        let drag = match std::mem::replace(&mut self.state, TrackerState::Idle) {
            TrackerState::Dragging(drag) => drag,
            other => {
                self.state = other;
                return EventDisposition::IGNORED;
            }
        };

        if let Some(pending) = drag.pending_frame {
            self.host.cancel_frame(pending);
        }
        log::trace!("drag ended at {:?}", drag.last.window_point());
        self.observers.notify(DragEventKind::DragEnd, &drag.last);
        self.host.detach_global_listeners();

        EventDisposition::CONSUMED
    }

    /// Removes every listener this tracker added and drops all observers.
    ///
    /// Safe to call any number of times; the tracker is inert afterwards.
    pub fn destroy(&mut self) {
        match std::mem::replace(&mut self.state, TrackerState::Destroyed) {
            TrackerState::Destroyed => return,
            TrackerState::Dragging(drag) => {
                if let Some(pending) = drag.pending_frame {
                    self.host.cancel_frame(pending);
                }
                self.host.detach_global_listeners();
            }
            TrackerState::Idle => {}
        }
        self.host.detach_surface_listeners();
        self.observers.clear();
        log::trace!("tracker destroyed");
    }

    fn sample_context(&self, bounds: Rect) -> SampleContext {
        SampleContext {
            bounds,
            viewport: self.host.viewport_size(),
            min_velocity_interval_ms: self.config.min_velocity_interval_ms,
        }
    }
}

impl<H: DragHost> Drop for GestureTracker<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}
