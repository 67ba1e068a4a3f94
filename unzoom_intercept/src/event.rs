// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use ui_events::keyboard::Modifiers;

/// The kinds of pointer event a host surface reports.
///
/// Names follow the host's native event names (see [`PointerKind::name`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Primary-button click.
    Click,
    /// Context-menu request (typically the secondary button).
    ContextMenu,
    /// Primary-button double click.
    DoubleClick,
    /// A button was pressed.
    Down,
    /// The pointer entered the target (does not bubble on most hosts, but
    /// the capture phase still observes it).
    Enter,
    /// The pointer left the target.
    Leave,
    /// The pointer moved.
    Move,
    /// The pointer moved off the target or one of its descendants.
    Out,
    /// The pointer moved onto the target or one of its descendants.
    Over,
    /// A button was released.
    Up,
    /// Generic show request directed at the target.
    Show,
    /// Wheel/scroll input. Not part of the intercepted set.
    Wheel,
    /// The host canceled the pointer interaction. Not part of the
    /// intercepted set.
    Cancel,
}

/// The fixed set of pointer-event kinds the interception pipeline corrects.
///
/// This is a closed list: kinds outside it (such as [`PointerKind::Wheel`])
/// pass through the pipeline untouched and it is not configurable per call.
/// Every kind in the set carries positional fields.
pub const INTERCEPTED_KINDS: [PointerKind; 11] = [
    PointerKind::Click,
    PointerKind::ContextMenu,
    PointerKind::DoubleClick,
    PointerKind::Down,
    PointerKind::Enter,
    PointerKind::Leave,
    PointerKind::Move,
    PointerKind::Out,
    PointerKind::Over,
    PointerKind::Up,
    PointerKind::Show,
];

impl PointerKind {
    /// Whether this kind belongs to [`INTERCEPTED_KINDS`].
    #[must_use]
    pub fn is_intercepted(self) -> bool {
        INTERCEPTED_KINDS.contains(&self)
    }

    /// The host-side event name for this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::ContextMenu => "contextmenu",
            Self::DoubleClick => "dblclick",
            Self::Down => "mousedown",
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
            Self::Move => "mousemove",
            Self::Out => "mouseout",
            Self::Over => "mouseover",
            Self::Up => "mouseup",
            Self::Show => "show",
            Self::Wheel => "wheel",
            Self::Cancel => "cancel",
        }
    }

    /// Parses a host-side event name, the inverse of [`PointerKind::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(Self::Click),
            "contextmenu" => Some(Self::ContextMenu),
            "dblclick" => Some(Self::DoubleClick),
            "mousedown" => Some(Self::Down),
            "mouseenter" => Some(Self::Enter),
            "mouseleave" => Some(Self::Leave),
            "mousemove" => Some(Self::Move),
            "mouseout" => Some(Self::Out),
            "mouseover" => Some(Self::Over),
            "mouseup" => Some(Self::Up),
            "show" => Some(Self::Show),
            "wheel" => Some(Self::Wheel),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// A pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// The primary button (usually left).
    #[default]
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// The middle button (usually the wheel).
    Middle,
    /// The back navigation button.
    Back,
    /// The forward navigation button.
    Forward,
}

/// A pointer event as reported by — or re-dispatched to — the host surface.
///
/// Generic over the host's node key `N` (the event target's identity), so
/// any scene or element tree can carry its own key type.
///
/// Events are inspected, never mutated in place: the interception pipeline
/// either passes an event through untouched or constructs a corrected copy
/// via [`PointerEvent::corrected`]. The `synthetic` tag rides on the event
/// itself — it is the sole mechanism distinguishing host-originated events
/// from re-dispatched ones, so there is no growing registry of seen events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<N> {
    /// The event kind.
    pub kind: PointerKind,
    /// The node the event targets.
    pub target: N,
    /// Position relative to the physical screen.
    pub screen: Point,
    /// Position relative to the viewport.
    pub client: Point,
    /// Position relative to the document.
    pub page: Point,
    /// Host-specific detail count (e.g. consecutive clicks).
    pub detail: u32,
    /// Modifier-key state at the time of the event.
    pub modifiers: Modifiers,
    /// The button involved, where the kind implies one.
    pub button: PointerButton,
    /// The secondary target for enter/leave/over/out transitions.
    pub related_target: Option<N>,
    /// Whether the event bubbles.
    pub bubbles: bool,
    /// Whether the event's default action can be prevented.
    pub cancelable: bool,
    synthetic: bool,
}

impl<N: Copy> PointerEvent<N> {
    /// Creates a host-originated event of the given kind.
    ///
    /// Positions start at the origin and every other field at its neutral
    /// value; chain the `with_*` setters to fill in what the host reported.
    #[must_use]
    pub fn new(kind: PointerKind, target: N) -> Self {
        Self {
            kind,
            target,
            screen: Point::ZERO,
            client: Point::ZERO,
            page: Point::ZERO,
            detail: 0,
            modifiers: Modifiers::empty(),
            button: PointerButton::default(),
            related_target: None,
            bubbles: true,
            cancelable: true,
            synthetic: false,
        }
    }

    /// Sets the screen-relative position.
    #[must_use]
    pub fn with_screen(mut self, screen: Point) -> Self {
        self.screen = screen;
        self
    }

    /// Sets the viewport-relative position.
    #[must_use]
    pub fn with_client(mut self, client: Point) -> Self {
        self.client = client;
        self
    }

    /// Sets the document-relative position.
    #[must_use]
    pub fn with_page(mut self, page: Point) -> Self {
        self.page = page;
        self
    }

    /// Sets the detail count.
    #[must_use]
    pub fn with_detail(mut self, detail: u32) -> Self {
        self.detail = detail;
        self
    }

    /// Sets the modifier-key state.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Sets the secondary target.
    #[must_use]
    pub fn with_related_target(mut self, related: N) -> Self {
        self.related_target = Some(related);
        self
    }

    /// Whether this event was re-dispatched by the interception pipeline.
    ///
    /// Host-originated events are never synthetic; the pipeline returns
    /// immediately for synthetic ones, which is what prevents an infinite
    /// dispatch loop.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Constructs the zoom-corrected synthetic copy of this event.
    ///
    /// The copy is bubbling and cancelable, keeps every field verbatim
    /// except the three positional fields — each multiplied by `factor` —
    /// and is tagged synthetic.
    #[must_use]
    pub fn corrected(&self, factor: f64) -> Self {
        Self {
            screen: Point::new(self.screen.x * factor, self.screen.y * factor),
            client: Point::new(self.client.x * factor, self.client.y * factor),
            page: Point::new(self.page.x * factor, self.page.y * factor),
            bubbles: true,
            cancelable: true,
            synthetic: true,
            ..*self
        }
    }
}
