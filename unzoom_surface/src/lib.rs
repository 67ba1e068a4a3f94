// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=unzoom_surface --heading-base-level=0

//! Unzoom Surface: measurement and zoom-factor primitives for magnified
//! display surfaces.
//!
//! ## Overview
//!
//! When a host surface is magnified by the platform (rather than by the
//! application), native pointer coordinates are reported in the magnified
//! space while layout still reasons in the unzoomed document space. This
//! crate models the measurement side of compensating for that skew:
//! - A [`SurfaceMetrics`] collaborator trait for reading live surface
//!   measurements from the host.
//! - [`zoom_factor`], deriving the current magnification ratio from those
//!   measurements in one of two [`ZoomMode`]s.
//! - [`adjust`], scaling a point from magnified space back into document
//!   space.
//! - A [`RootStyle`] collaborator trait for the root-element style handle,
//!   with [`ZoomCapabilities`] probing whether the host honors the
//!   zoom-control styling capability at all, and whether it honors a reset
//!   value for it.
//!
//! It does **not** own any event pipeline. The `unzoom_intercept` crate
//! builds the pointer-event interception protocol on top of these
//! primitives.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use unzoom_surface::{SurfaceMetrics, ZoomMode, adjust, zoom_factor};
//!
//! // A host whose root element renders 1024 wide but exposes 800 of content
//! // width: the surface is magnified by 1.28.
//! struct Host;
//! impl SurfaceMetrics for Host {
//!     fn root_offset_width(&self) -> f64 { 1024.0 }
//!     fn root_client_width(&self) -> f64 { 800.0 }
//!     fn screen_avail_width(&self) -> f64 { 1024.0 }
//!     fn viewport_width(&self) -> f64 { 800.0 }
//! }
//!
//! assert_eq!(zoom_factor(&Host, ZoomMode::Element), 1.28);
//! assert_eq!(
//!     adjust(&Host, ZoomMode::Element, Point::new(100.0, 50.0)),
//!     Point::new(128.0, 64.0),
//! );
//! ```
//!
//! ## Design notes
//!
//! - The factor is recomputed from live measurements on every call and is
//!   never cached; measurements change under the caller's feet (window
//!   resize, magnification change). Callers that need one stable value
//!   across a computation capture the return once.
//! - A factor of exactly `1.0` is the "no magnification" sentinel, not an
//!   approximate range.
//! - Nothing here fails: degenerate measurements degrade to a factor of
//!   `1.0` rather than producing a panic or a non-finite value.
//!
//! This crate is `no_std`.

#![no_std]

mod metrics;
mod modes;
mod style;

pub use metrics::{SurfaceMetrics, adjust, zoom_factor};
pub use modes::ZoomMode;
pub use style::{RootStyle, ZoomCapabilities, ZoomValue};
