// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::Cell;
use core::fmt;

use kurbo::Point;

use unzoom_surface::{
    RootStyle, SurfaceMetrics, ZoomCapabilities, ZoomMode, ZoomValue, adjust, zoom_factor,
};

use crate::event::{INTERCEPTED_KINDS, PointerEvent};
use crate::target::EventTarget;
use crate::zoomed::Zoomed;

/// What the host's capture listener should do with the original event after
/// [`Unzoom::intercept`] returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Propagation {
    /// Let the original event propagate normally.
    Continue,
    /// Stop the original event immediately: no other listener, including the
    /// host application's own handlers, may observe it. The corrected
    /// synthetic event has already been dispatched and fully observed by the
    /// time this value is returned.
    StopImmediate,
}

bitflags::bitflags! {
    /// One-shot activation latches.
    ///
    /// Each bit records that the corresponding ensure-active arm of
    /// [`Unzoom::init`] has run; none is ever cleared during the context's
    /// lifetime. The latches are independent: repeated `init` calls can
    /// engage a latch that earlier calls left unset, but can never re-run an
    /// engaged arm's side effects.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ActivationFlags: u8 {
        /// The first-call surface setup has run: the persistent full-width
        /// layout override and the zoom write (or its resize-driven
        /// fallback), when the host supports zoom control.
        const LAYOUT_OVERRIDE      = 0b0000_0001;
        /// Default text-selection behavior has been disabled.
        const SELECTION_SUPPRESSED = 0b0000_0010;
        /// The zoom-corrected accessor surface ([`Unzoom::extended`]) has
        /// been enabled.
        const PROPERTIES_AUGMENTED = 0b0000_0100;
        /// Capture listeners are attached and interception is live.
        const INTERCEPTION_ACTIVE  = 0b0000_1000;
    }
}

/// Configuration for [`Unzoom::init`].
///
/// Every option has a documented default; `init` never fails, whatever the
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitOptions {
    /// Default zoom-computation mode preference for operations that take no
    /// explicit mode: `true` selects [`ZoomMode::Fullscreen`]. Default
    /// `false`.
    pub use_fullscreen: bool,
    /// Engage the selection-suppression latch. Default `false`.
    pub disable_text_selection: bool,
    /// Enable the zoom-corrected accessor surface ([`Unzoom::extended`]).
    /// Default `false`.
    pub extend_pointer_event: bool,
    /// Activate pointer-event interception, provided the host supports zoom
    /// control. Default `true`.
    pub intercept_events: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            use_fullscreen: false,
            disable_text_selection: false,
            extend_pointer_event: false,
            intercept_events: true,
        }
    }
}

impl InitOptions {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default-mode preference.
    #[must_use]
    pub fn use_fullscreen(mut self, use_fullscreen: bool) -> Self {
        self.use_fullscreen = use_fullscreen;
        self
    }

    /// Sets whether default text selection is disabled.
    #[must_use]
    pub fn disable_text_selection(mut self, disable: bool) -> Self {
        self.disable_text_selection = disable;
        self
    }

    /// Sets whether the zoom-corrected accessor surface is enabled.
    #[must_use]
    pub fn extend_pointer_event(mut self, extend: bool) -> Self {
        self.extend_pointer_event = extend;
        self
    }

    /// Sets whether pointer-event interception is activated.
    #[must_use]
    pub fn intercept_events(mut self, intercept: bool) -> Self {
        self.intercept_events = intercept;
        self
    }
}

/// The full collaborator surface a host handle provides.
///
/// Blanket-implemented for any type implementing the three collaborator
/// traits; hosts implement those and get `Host` for free.
pub trait Host: SurfaceMetrics + RootStyle + EventTarget {}

impl<T: SurfaceMetrics + RootStyle + EventTarget> Host for T {}

/// Zoom-compensation context for one host surface.
///
/// Constructed once by host startup code and passed by handle to every
/// operation; hosts typically hold it in an `Rc` so capture listeners can
/// reach it. All state lives in [`Cell`]s behind `&self`: the context is
/// built for a single-threaded, cooperative UI loop and stays safe under
/// the re-entrancy that synchronous dispatch implies (a dispatched synthetic
/// event's listeners may call back into [`Unzoom::intercept`] before the
/// outer call returns). A platform with truly concurrent UI callbacks must
/// wrap the context in a mutex or confine it to one task queue.
///
/// Capabilities are probed once at construction and are read-only
/// thereafter.
pub struct Unzoom<H: Host> {
    host: H,
    capabilities: ZoomCapabilities,
    flags: Cell<ActivationFlags>,
    use_fullscreen: Cell<bool>,
}

impl<H: Host> fmt::Debug for Unzoom<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unzoom")
            .field("capabilities", &self.capabilities)
            .field("flags", &self.flags.get())
            .field("use_fullscreen", &self.use_fullscreen.get())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Unzoom<H> {
    /// Creates a context over the given host handle, probing the host's
    /// zoom capabilities.
    pub fn new(host: H) -> Self {
        let capabilities = ZoomCapabilities::probe(&host);
        Self {
            host,
            capabilities,
            flags: Cell::new(ActivationFlags::empty()),
            use_fullscreen: Cell::new(false),
        }
    }

    /// The host handle this context drives.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The capability flags probed at construction.
    #[must_use]
    pub fn capabilities(&self) -> ZoomCapabilities {
        self.capabilities
    }

    /// Snapshot of the activation latches, for inspection and debugging.
    #[must_use]
    pub fn activation(&self) -> ActivationFlags {
        self.flags.get()
    }

    /// The default-mode preference: `true` selects
    /// [`ZoomMode::Fullscreen`] for operations that take no explicit mode.
    #[must_use]
    pub fn use_fullscreen(&self) -> bool {
        self.use_fullscreen.get()
    }

    /// Sets the default-mode preference.
    pub fn set_use_fullscreen(&self, use_fullscreen: bool) {
        self.use_fullscreen.set(use_fullscreen);
    }

    fn default_mode(&self) -> ZoomMode {
        if self.use_fullscreen.get() {
            ZoomMode::Fullscreen
        } else {
            ZoomMode::Element
        }
    }

    /// The current magnification ratio in the default mode.
    ///
    /// Recomputed from live measurements on every call; see
    /// [`unzoom_surface::zoom_factor`].
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor_with(self.default_mode())
    }

    /// The current magnification ratio in an explicit mode.
    #[must_use]
    pub fn zoom_factor_with(&self, mode: ZoomMode) -> f64 {
        zoom_factor(&self.host, mode)
    }

    /// Scales a point into document space using the default mode.
    #[must_use]
    pub fn adjust(&self, pt: Point) -> Point {
        self.adjust_with(self.default_mode(), pt)
    }

    /// Scales a point into document space using an explicit mode.
    #[must_use]
    pub fn adjust_with(&self, mode: ZoomMode, pt: Point) -> Point {
        adjust(&self.host, mode, pt)
    }

    /// Applies a configuration: sets the default-mode preference and engages
    /// the requested activation arms.
    ///
    /// Each arm is independently idempotent — calling `init` any number of
    /// times runs each engaged side effect exactly once. Interception only
    /// activates when the host supports zoom control; when it does not, the
    /// layout override and interception are skipped entirely and a warning
    /// is emitted, leaving coordinate queries functional on the raw
    /// (uncorrected) measurements.
    pub fn init(&self, options: InitOptions) {
        self.use_fullscreen.set(options.use_fullscreen);
        self.ensure_layout_override();
        if options.disable_text_selection {
            self.ensure_selection_suppressed();
        }
        if options.extend_pointer_event {
            self.ensure_extended_enabled();
        }
        if options.intercept_events {
            self.ensure_interception_active();
        }
    }

    /// Engages `flag`, returning `true` when it was newly set.
    fn engage(&self, flag: ActivationFlags) -> bool {
        let flags = self.flags.get();
        if flags.contains(flag) {
            return false;
        }
        self.flags.set(flags | flag);
        true
    }

    fn ensure_layout_override(&self) {
        if !self.engage(ActivationFlags::LAYOUT_OVERRIDE) {
            return;
        }
        if !self.capabilities.control {
            log::warn!("zoom control is unsupported; skipping layout override and interception");
            return;
        }
        // The full-width write must precede the zoom write or some hosts
        // will not honor the reset value.
        self.host.force_full_width();
        if self.capabilities.reset {
            self.host.set_zoom(ZoomValue::Reset);
        } else {
            log::warn!("zoom reset is unsupported; falling back to resize-driven compensation");
            self.host.attach_resize_listener();
        }
    }

    fn ensure_selection_suppressed(&self) {
        if self.engage(ActivationFlags::SELECTION_SUPPRESSED) {
            self.host.suppress_text_selection();
        }
    }

    fn ensure_extended_enabled(&self) {
        self.engage(ActivationFlags::PROPERTIES_AUGMENTED);
    }

    fn ensure_interception_active(&self) {
        if !self.capabilities.control {
            return;
        }
        if !self.engage(ActivationFlags::INTERCEPTION_ACTIVE) {
            return;
        }
        for kind in INTERCEPTED_KINDS {
            self.host.attach_capture_listener(kind);
        }
    }

    /// Decides the fate of one incoming native pointer event.
    ///
    /// The host's capture listener calls this for every event it routes and
    /// applies the returned [`Propagation`] to the original. An event passes
    /// through untouched ([`Propagation::Continue`]) when interception is
    /// not active, its kind lies outside [`INTERCEPTED_KINDS`], it is
    /// already synthetic, or the surface is currently unmagnified (factor
    /// exactly `1`). Otherwise a corrected copy is constructed, dispatched
    /// on the original event's target, and [`Propagation::StopImmediate`]
    /// instructs the host to suppress the original so no listener observes
    /// the uncorrected coordinates.
    ///
    /// Dispatch is synchronous: the synthetic event has been fully observed
    /// by its listeners before this method returns.
    pub fn intercept(&self, event: &PointerEvent<H::Node>) -> Propagation {
        if !self.flags.get().contains(ActivationFlags::INTERCEPTION_ACTIVE) {
            return Propagation::Continue;
        }
        if !event.kind.is_intercepted() {
            return Propagation::Continue;
        }
        if event.is_synthetic() {
            return Propagation::Continue;
        }
        let factor = self.zoom_factor();
        if factor == 1.0 {
            return Propagation::Continue;
        }
        let corrected = event.corrected(factor);
        self.host.dispatch(&corrected);
        Propagation::StopImmediate
    }

    /// Applies resize-driven inverse compensation.
    ///
    /// The host's resize listener calls this on every resize notification.
    /// Only meaningful on hosts where zoom control is supported but the
    /// reset value is not: the root element's zoom is set to the inverse of
    /// the fullscreen-mode factor, so the surface renders at full size
    /// despite the magnification. The reset literal is never written here.
    /// A no-op everywhere else.
    pub fn compensate_resize(&self) {
        let fallback = self.flags.get().contains(ActivationFlags::LAYOUT_OVERRIDE)
            && self.capabilities.control
            && !self.capabilities.reset;
        if !fallback {
            return;
        }
        let factor = self.zoom_factor_with(ZoomMode::Fullscreen);
        self.host.set_zoom(ZoomValue::Scale(factor.recip()));
    }

    /// Wraps an event in the zoom-corrected accessor surface.
    ///
    /// Returns `None` until `init` has enabled it via
    /// [`InitOptions::extend_pointer_event`].
    #[must_use]
    pub fn extended<'a>(&'a self, event: &'a PointerEvent<H::Node>) -> Option<Zoomed<'a, H>> {
        self.flags
            .get()
            .contains(ActivationFlags::PROPERTIES_AUGMENTED)
            .then(|| Zoomed::new(self, event))
    }
}
