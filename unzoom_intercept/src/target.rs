// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::{PointerEvent, PointerKind};

/// The host's root event-dispatch target.
///
/// Implemented by the host. The context object calls these methods during
/// activation and interception; each is a thin binding onto the host's event
/// system:
///
/// - `attach_capture_listener` registers one capturing-phase listener for a
///   kind. The host routes every matching native event through
///   [`Unzoom::intercept`](crate::Unzoom::intercept) and applies the
///   returned [`Propagation`](crate::Propagation) to the original event.
/// - `attach_resize_listener` registers a resize listener that calls
///   [`Unzoom::compensate_resize`](crate::Unzoom::compensate_resize) on
///   each notification.
/// - `suppress_text_selection` disables the host's default text-selection
///   behavior.
/// - `dispatch` delivers a synthetic event to the host's listeners at the
///   event's target, synchronously: all of the synthetic event's listeners
///   run before `dispatch` returns.
pub trait EventTarget {
    /// The host's node key type, identifying an event target.
    type Node: Copy;

    /// Registers one capturing-phase listener for `kind` on the root target.
    fn attach_capture_listener(&self, kind: PointerKind);

    /// Registers a resize listener on the root target.
    fn attach_resize_listener(&self);

    /// Disables the host's default text-selection behavior.
    fn suppress_text_selection(&self);

    /// Synchronously delivers `event` to listeners at `event.target`.
    fn dispatch(&self, event: &PointerEvent<Self::Node>);
}
