// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=unzoom_intercept --heading-base-level=0

//! Unzoom Intercept: pointer-event interception for magnified host surfaces.
//!
//! ## Overview
//!
//! This crate builds the event side of zoom compensation on top of
//! [`unzoom_surface`]: a replace-and-suppress protocol that hides skewed
//! native pointer coordinates from application code. One [`Unzoom`] context
//! is constructed per host surface; once activated, every native pointer
//! event the host routes through [`Unzoom::intercept`] is either passed
//! through untouched or replaced by a corrected copy.
//!
//! ## The protocol
//!
//! For each incoming native event in the closed [`INTERCEPTED_KINDS`] set:
//!
//! 1. Synthetic events (tagged by an earlier interception) pass through —
//!    the tag rides on the event itself and is the sole loop-prevention
//!    mechanism.
//! 2. The magnification ratio is recomputed from live measurements. Exactly
//!    `1` means an unmagnified surface: pass through, no synthetic churn.
//! 3. Otherwise a new event of the same kind is constructed — bubbling,
//!    cancelable, every field verbatim except the positional fields, each
//!    multiplied by the ratio — tagged synthetic, and dispatched on the
//!    original event's target. The original is then suppressed:
//!    [`Propagation::StopImmediate`] tells the host's capture listener to
//!    stop it before any other listener observes the uncorrected
//!    coordinates.
//!
//! Dispatch is synchronous, so the corrected event is fully observed by its
//! listeners strictly before the interceptor yields the suppression verdict
//! for the original.
//!
//! ## Activation
//!
//! [`Unzoom::init`] orchestrates four independently idempotent, one-shot
//! arms — the layout override (with its resize-driven fallback on hosts
//! that do not honor the zoom reset value), selection suppression, the
//! zoom-corrected accessor surface ([`Unzoom::extended`]), and interception
//! itself. Each is guarded by an [`ActivationFlags`] latch, so calling
//! `init` repeatedly never duplicates a listener or a style write. Nothing
//! here fails: on hosts without zoom-control support the context degrades
//! to raw coordinates and emits `log` warnings.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::RefCell;
//! use kurbo::Point;
//! use unzoom_intercept::{
//!     EventTarget, InitOptions, PointerEvent, PointerKind, Propagation, Unzoom,
//! };
//! use unzoom_surface::{RootStyle, SurfaceMetrics, ZoomValue};
//!
//! // A host whose root element renders 1024 wide over 800 of content
//! // width: magnified by 1.28.
//! #[derive(Default)]
//! struct Host {
//!     dispatched: RefCell<Vec<PointerEvent<u32>>>,
//! }
//!
//! impl SurfaceMetrics for Host {
//!     fn root_offset_width(&self) -> f64 { 1024.0 }
//!     fn root_client_width(&self) -> f64 { 800.0 }
//!     fn screen_avail_width(&self) -> f64 { 1024.0 }
//!     fn viewport_width(&self) -> f64 { 800.0 }
//! }
//!
//! impl RootStyle for Host {
//!     fn zoom_control_supported(&self) -> bool { true }
//!     fn zoom_reset_supported(&self) -> bool { true }
//!     fn force_full_width(&self) {}
//!     fn set_zoom(&self, _value: ZoomValue) {}
//! }
//!
//! impl EventTarget for Host {
//!     type Node = u32;
//!     fn attach_capture_listener(&self, _kind: PointerKind) {}
//!     fn attach_resize_listener(&self) {}
//!     fn suppress_text_selection(&self) {}
//!     fn dispatch(&self, event: &PointerEvent<u32>) {
//!         self.dispatched.borrow_mut().push(*event);
//!     }
//! }
//!
//! let unzoom = Unzoom::new(Host::default());
//! unzoom.init(InitOptions::default());
//!
//! // A native click at viewport (100, 50) is suppressed and re-dispatched
//! // with document-space coordinates.
//! let click = PointerEvent::new(PointerKind::Click, 1)
//!     .with_client(Point::new(100.0, 50.0));
//! assert_eq!(unzoom.intercept(&click), Propagation::StopImmediate);
//!
//! let corrected = unzoom.host().dispatched.borrow()[0];
//! assert!(corrected.is_synthetic());
//! assert_eq!(corrected.client, Point::new(128.0, 64.0));
//!
//! // Feeding the corrected event back through (as the host's capture
//! // listener would) does not re-intercept it.
//! assert_eq!(unzoom.intercept(&corrected), Propagation::Continue);
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded and cooperative: all state lives in [`core::cell::Cell`]s
//! behind `&self`, which keeps the context safe under the re-entrancy that
//! synchronous dispatch implies but not under parallel callbacks. See
//! [`Unzoom`] for the details.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod context;
mod event;
mod target;
mod zoomed;

pub use context::{ActivationFlags, Host, InitOptions, Propagation, Unzoom};
pub use event::{INTERCEPTED_KINDS, PointerButton, PointerEvent, PointerKind};
pub use target::EventTarget;
pub use zoomed::Zoomed;
