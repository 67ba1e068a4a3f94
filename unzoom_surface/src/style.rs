// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A value written to the root element's zoom-control styling capability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomValue {
    /// The reset value: render the full page regardless of the user's
    /// magnification level.
    Reset,
    /// An explicit scale, used by the resize-driven fallback when the host
    /// does not honor [`ZoomValue::Reset`].
    Scale(f64),
}

/// Style handle for the root layout element.
///
/// Implemented by the host. Each method is a one-line side effect on the
/// host's styling system; the policy of when to invoke them lives in the
/// `unzoom_intercept` context object.
pub trait RootStyle {
    /// Whether the zoom-control styling capability exists at all.
    fn zoom_control_supported(&self) -> bool;

    /// Whether the host honors [`ZoomValue::Reset`] for that capability.
    fn zoom_reset_supported(&self) -> bool;

    /// Forces the root element to full viewport width.
    ///
    /// The element-mode factor computation depends on the root element being
    /// full width, and this must be applied before [`RootStyle::set_zoom`]
    /// or some hosts will not honor the reset value.
    fn force_full_width(&self);

    /// Writes a value to the zoom-control capability.
    fn set_zoom(&self, value: ZoomValue);
}

/// Which zoom-control capabilities the host honors.
///
/// Probed once at startup and read-only thereafter; the flags never change
/// during a surface's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomCapabilities {
    /// The zoom-control styling capability exists. When `false`, event
    /// interception and the layout override are skipped entirely.
    pub control: bool,
    /// The reset value is honored. When `false` (but `control` holds),
    /// compensation falls back to resize-driven inverse scaling.
    pub reset: bool,
}

impl ZoomCapabilities {
    /// Reads both capability flags from the host's style handle.
    #[must_use]
    pub fn probe<R: RootStyle + ?Sized>(style: &R) -> Self {
        Self {
            control: style.zoom_control_supported(),
            reset: style.zoom_reset_supported(),
        }
    }
}
