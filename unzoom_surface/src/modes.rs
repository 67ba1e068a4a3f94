// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which pair of surface measurements the zoom factor is derived from.
///
/// This enum is consumed by [`crate::zoom_factor`] and [`crate::adjust`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Derive the factor from the root layout element's box measurements:
    /// outer rendered width over inner content width.
    ///
    /// This reflects CSS-based magnification but is subject to
    /// scrollbar-width skew, since the inner content width excludes any
    /// scrollbar the outer width includes.
    #[default]
    Element,
    /// Derive the factor from the display itself: available physical width
    /// over viewport inner width.
    ///
    /// Unaffected by scrollbars and per-element CSS, so it is the more
    /// reliable computation, but it only holds when the surface occupies the
    /// full display.
    Fullscreen,
}
