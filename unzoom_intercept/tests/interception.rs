// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the interception pipeline.
//!
//! These drive an [`Unzoom`] context the way a host's event glue would: the
//! test plays the role of the capture listeners, routing native events
//! through [`Unzoom::intercept`], applying the returned [`Propagation`] to
//! the original, and feeding dispatched synthetic events back through the
//! pipeline.

use std::cell::{Cell, RefCell};

use kurbo::Point;

use unzoom_intercept::{
    EventTarget, InitOptions, PointerEvent, PointerKind, Propagation, Unzoom,
};
use unzoom_surface::{RootStyle, SurfaceMetrics, ZoomValue};

/// Recording host with live-settable measurements.
struct Host {
    control: bool,
    reset: bool,
    offset: Cell<f64>,
    client: Cell<f64>,
    avail: Cell<f64>,
    inner: Cell<f64>,
    capture_listeners: RefCell<Vec<PointerKind>>,
    resize_listeners: Cell<u32>,
    zoom_writes: RefCell<Vec<ZoomValue>>,
    dispatched: RefCell<Vec<PointerEvent<u32>>>,
}

impl Host {
    fn magnified() -> Self {
        Self {
            control: true,
            reset: true,
            offset: Cell::new(1024.0),
            client: Cell::new(800.0),
            avail: Cell::new(1024.0),
            inner: Cell::new(800.0),
            capture_listeners: RefCell::new(Vec::new()),
            resize_listeners: Cell::new(0),
            zoom_writes: RefCell::new(Vec::new()),
            dispatched: RefCell::new(Vec::new()),
        }
    }

    fn without_reset() -> Self {
        Self {
            reset: false,
            ..Self::magnified()
        }
    }
}

impl SurfaceMetrics for Host {
    fn root_offset_width(&self) -> f64 {
        self.offset.get()
    }
    fn root_client_width(&self) -> f64 {
        self.client.get()
    }
    fn screen_avail_width(&self) -> f64 {
        self.avail.get()
    }
    fn viewport_width(&self) -> f64 {
        self.inner.get()
    }
}

impl RootStyle for Host {
    fn zoom_control_supported(&self) -> bool {
        self.control
    }
    fn zoom_reset_supported(&self) -> bool {
        self.reset
    }
    fn force_full_width(&self) {}
    fn set_zoom(&self, value: ZoomValue) {
        self.zoom_writes.borrow_mut().push(value);
    }
}

impl EventTarget for Host {
    type Node = u32;

    fn attach_capture_listener(&self, kind: PointerKind) {
        self.capture_listeners.borrow_mut().push(kind);
    }
    fn attach_resize_listener(&self) {
        self.resize_listeners.set(self.resize_listeners.get() + 1);
    }
    fn suppress_text_selection(&self) {}
    fn dispatch(&self, event: &PointerEvent<u32>) {
        self.dispatched.borrow_mut().push(*event);
    }
}

#[test]
fn magnified_click_is_replaced_and_suppressed() {
    let unzoom = Unzoom::new(Host::magnified());
    unzoom.init(InitOptions::default());
    assert_eq!(unzoom.zoom_factor(), 1.28);

    let click = PointerEvent::new(PointerKind::Click, 42)
        .with_screen(Point::new(100.0, 50.0))
        .with_client(Point::new(100.0, 50.0))
        .with_page(Point::new(100.0, 50.0));

    assert_eq!(unzoom.intercept(&click), Propagation::StopImmediate);

    let dispatched = unzoom.host().dispatched.borrow();
    assert_eq!(dispatched.len(), 1, "exactly one synthetic event");
    let corrected = &dispatched[0];
    assert!(corrected.is_synthetic());
    assert_eq!(corrected.kind, PointerKind::Click);
    assert_eq!(corrected.target, 42, "dispatched on the original target");
    assert_eq!(corrected.client, Point::new(128.0, 64.0));
    assert_eq!(corrected.page, Point::new(128.0, 64.0));
    assert!(corrected.bubbles);
    assert!(corrected.cancelable);
}

#[test]
fn synthetic_event_fed_back_is_never_reintercepted() {
    let unzoom = Unzoom::new(Host::magnified());
    unzoom.init(InitOptions::default());

    let native = PointerEvent::new(PointerKind::Move, 7).with_client(Point::new(10.0, 20.0));
    assert_eq!(unzoom.intercept(&native), Propagation::StopImmediate);

    // The host's capture listener sees the dispatched synthetic event next;
    // it must flow through untouched, with no further dispatch.
    let synthetic = unzoom.host().dispatched.borrow()[0];
    assert_eq!(unzoom.intercept(&synthetic), Propagation::Continue);
    assert_eq!(
        unzoom.host().dispatched.borrow().len(),
        1,
        "no second synthetic event"
    );
}

#[test]
fn unmagnified_surface_leaves_propagation_untouched() {
    let unzoom = Unzoom::new(Host::magnified());
    unzoom.host().offset.set(800.0);
    unzoom.init(InitOptions::default());

    let click = PointerEvent::new(PointerKind::Click, 1).with_client(Point::new(100.0, 50.0));
    assert_eq!(unzoom.intercept(&click), Propagation::Continue);
    assert!(unzoom.host().dispatched.borrow().is_empty());
}

#[test]
fn repeated_init_yields_one_listener_set_and_one_dispatch_per_event() {
    let unzoom = Unzoom::new(Host::magnified());
    for _ in 0..5 {
        unzoom.init(InitOptions::default());
    }
    assert_eq!(
        unzoom.host().capture_listeners.borrow().len(),
        11,
        "one capturing listener per supported kind"
    );

    let click = PointerEvent::new(PointerKind::Click, 1).with_client(Point::new(100.0, 50.0));
    assert_eq!(unzoom.intercept(&click), Propagation::StopImmediate);
    assert_eq!(unzoom.host().dispatched.borrow().len(), 1);
}

#[test]
fn interception_tracks_the_live_zoom_factor() {
    let unzoom = Unzoom::new(Host::magnified());
    unzoom.init(InitOptions::default());

    let m = PointerEvent::new(PointerKind::Move, 1).with_client(Point::new(100.0, 50.0));
    assert_eq!(unzoom.intercept(&m), Propagation::StopImmediate);
    assert_eq!(
        unzoom.host().dispatched.borrow()[0].client,
        Point::new(128.0, 64.0)
    );

    // The user changes the magnification; the next event is corrected by
    // the fresh factor.
    unzoom.host().offset.set(1600.0);
    assert_eq!(unzoom.intercept(&m), Propagation::StopImmediate);
    assert_eq!(
        unzoom.host().dispatched.borrow()[1].client,
        Point::new(200.0, 100.0)
    );

    // Back to unmagnified: events pass through again.
    unzoom.host().offset.set(800.0);
    assert_eq!(unzoom.intercept(&m), Propagation::Continue);
    assert_eq!(unzoom.host().dispatched.borrow().len(), 2);
}

#[test]
fn reset_unsupported_host_uses_resize_compensation() {
    let unzoom = Unzoom::new(Host::without_reset());
    unzoom.init(InitOptions::default());

    assert_eq!(unzoom.host().resize_listeners.get(), 1);
    assert!(
        unzoom.host().zoom_writes.borrow().is_empty(),
        "the reset literal is never written"
    );

    // Two resize notifications at a 1.28 fullscreen factor.
    unzoom.compensate_resize();
    unzoom.compensate_resize();
    let writes = unzoom.host().zoom_writes.borrow();
    assert_eq!(writes.len(), 2);
    for write in writes.iter() {
        assert_eq!(*write, ZoomValue::Scale(1.0 / 1.28));
    }

    // Interception still works on this host.
    drop(writes);
    let click = PointerEvent::new(PointerKind::Click, 1).with_client(Point::new(100.0, 50.0));
    assert_eq!(unzoom.intercept(&click), Propagation::StopImmediate);
}

#[test]
fn disabled_interception_attaches_nothing_even_when_supported() {
    let unzoom = Unzoom::new(Host::magnified());
    unzoom.init(InitOptions::new().intercept_events(false));

    assert!(unzoom.host().capture_listeners.borrow().is_empty());
    let click = PointerEvent::new(PointerKind::Click, 1).with_client(Point::new(100.0, 50.0));
    assert_eq!(unzoom.intercept(&click), Propagation::Continue);
    assert!(unzoom.host().dispatched.borrow().is_empty());
}

#[test]
fn extended_accessors_follow_the_live_factor() {
    let unzoom = Unzoom::new(Host::magnified());
    unzoom.init(
        InitOptions::new()
            .extend_pointer_event(true)
            .intercept_events(false),
    );

    let e = PointerEvent::new(PointerKind::Down, 1)
        .with_screen(Point::new(200.0, 120.0))
        .with_client(Point::new(100.0, 50.0));
    let zoomed = unzoom.extended(&e).expect("enabled by init");
    assert_eq!(zoomed.screen(), Point::new(256.0, 153.6));
    assert_eq!(zoomed.client(), Point::new(128.0, 64.0));

    unzoom.host().offset.set(800.0);
    assert_eq!(zoomed.client(), Point::new(100.0, 50.0));
}
