// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognizer registration.
//!
//! The store only records which handler listens on which view and for which
//! native events; the listeners themselves belong to the presenter.

/// Opaque identifier of a touch handler owned by the presenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(pub u32);

/// Input capabilities the host declares for the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Mouse only: listen for `mousedown`.
    MouseOnly,
    /// Touch only: listen for `touchstart`.
    TouchOnly,
    /// Both mouse and touch.
    #[default]
    Hybrid,
}

/// Options passed along with the `touchstart` listener.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    /// Listen during the capture phase.
    pub capture: bool,
    /// Promise never to call `preventDefault`.
    pub passive: bool,
}

/// Native events a registration listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureEvents {
    /// `mousedown`
    pub mouse_down: bool,
    /// `touchstart`
    pub touch_start: bool,
}

impl GestureEvents {
    /// Events to listen for on a device of the given kind.
    #[must_use]
    pub const fn for_device(device: DeviceKind) -> Self {
        Self {
            mouse_down: !matches!(device, DeviceKind::TouchOnly),
            touch_start: !matches!(device, DeviceKind::MouseOnly),
        }
    }
}

/// A handler registered on a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureRegistration {
    /// The registered handler.
    pub handler: HandlerId,
    /// Native events listened for.
    pub events: GestureEvents,
    /// Options for the `touchstart` listener.
    pub options: ListenerOptions,
}

/// A listener change for the presenter to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureOp {
    /// Attach listeners for `registration` to the host element of `view`.
    Attach {
        /// Raw slot index of the view.
        view: u32,
        /// What to attach.
        registration: GestureRegistration,
    },
    /// Remove every listener `handler` attached to `view`.
    Detach {
        /// Raw slot index of the view.
        view: u32,
        /// The handler to remove.
        handler: HandlerId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_kind_selects_events() {
        let mouse = GestureEvents::for_device(DeviceKind::MouseOnly);
        let touch = GestureEvents::for_device(DeviceKind::TouchOnly);
        let hybrid = GestureEvents::for_device(DeviceKind::Hybrid);
        assert!(mouse.mouse_down && !mouse.touch_start, "mouse only");
        assert!(!touch.mouse_down && touch.touch_start, "touch only");
        assert!(hybrid.mouse_down && hybrid.touch_start, "hybrid listens for both");
    }
}
