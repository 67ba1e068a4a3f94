// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::modes::ZoomMode;

/// Live measurements of the host display surface.
///
/// Implemented by the host's surface handle. All measurements are read fresh
/// on every call; implementations must not return values cached from before
/// the last resize or magnification change.
///
/// Widths are in the host's native (magnified) pixel units. The two
/// measurement pairs correspond to the two [`ZoomMode`]s:
///
/// | Mode                    | Numerator             | Denominator          |
/// |-------------------------|-----------------------|----------------------|
/// | [`ZoomMode::Element`]   | `root_offset_width`   | `root_client_width`  |
/// | [`ZoomMode::Fullscreen`]| `screen_avail_width`  | `viewport_width`     |
pub trait SurfaceMetrics {
    /// Outer rendered width of the root layout element, including any
    /// scrollbar.
    fn root_offset_width(&self) -> f64;

    /// Inner content width of the root layout element, excluding the effect
    /// of the full-width layout override.
    fn root_client_width(&self) -> f64;

    /// Available physical width of the display the surface occupies.
    fn screen_avail_width(&self) -> f64;

    /// Inner width of the viewport through which the surface is shown.
    fn viewport_width(&self) -> f64;
}

/// Computes the current magnification ratio from live measurements.
///
/// Returns exactly `1.0` when the surface is not magnified; callers treat
/// that value as the "do nothing" sentinel. The result is recomputed from
/// fresh measurements on every call — capture it once if a computation needs
/// a stable value.
///
/// Degenerate measurements (a non-positive or non-finite pair, as a degraded
/// host may report) also yield `1.0`; this function never panics and never
/// returns a non-finite value.
#[must_use]
pub fn zoom_factor<M: SurfaceMetrics + ?Sized>(metrics: &M, mode: ZoomMode) -> f64 {
    let (outer, inner) = match mode {
        ZoomMode::Element => (metrics.root_offset_width(), metrics.root_client_width()),
        ZoomMode::Fullscreen => (metrics.screen_avail_width(), metrics.viewport_width()),
    };
    if !(outer.is_finite() && inner.is_finite()) || outer <= 0.0 || inner <= 0.0 {
        return 1.0;
    }
    let ratio = outer / inner;
    if ratio.is_finite() { ratio } else { 1.0 }
}

/// Scales a point from the magnified coordinate space into document space.
///
/// Pure: obtains a fresh factor via [`zoom_factor`] with the given mode and
/// multiplies both components by it. No side effects, no error conditions.
#[must_use]
pub fn adjust<M: SurfaceMetrics + ?Sized>(metrics: &M, mode: ZoomMode, pt: Point) -> Point {
    let factor = zoom_factor(metrics, mode);
    Point::new(pt.x * factor, pt.y * factor)
}
