// Copyright 2025 the Unzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

use crate::context::{Host, Unzoom};
use crate::event::PointerEvent;

/// Zoom-corrected read-only view over a pointer event.
///
/// Obtained from [`Unzoom::extended`]. Each accessor multiplies the
/// corresponding positional field by the zoom factor current *at the time of
/// the read*, in the context's default mode — two reads across a
/// magnification change can differ. The underlying event is borrowed and
/// never mutated.
#[derive(Clone, Copy)]
pub struct Zoomed<'a, H: Host> {
    context: &'a Unzoom<H>,
    event: &'a PointerEvent<H::Node>,
}

impl<'a, H: Host> Zoomed<'a, H> {
    pub(crate) fn new(context: &'a Unzoom<H>, event: &'a PointerEvent<H::Node>) -> Self {
        Self { context, event }
    }

    /// The wrapped event, with its raw (uncorrected) fields.
    #[must_use]
    pub fn raw(&self) -> &'a PointerEvent<H::Node> {
        self.event
    }

    /// Zoom-corrected screen-relative position.
    #[must_use]
    pub fn screen(&self) -> Point {
        self.context.adjust(self.event.screen)
    }

    /// Zoom-corrected viewport-relative position.
    #[must_use]
    pub fn client(&self) -> Point {
        self.context.adjust(self.event.client)
    }

    /// Zoom-corrected document-relative position.
    #[must_use]
    pub fn page(&self) -> Point {
        self.context.adjust(self.event.page)
    }
}

impl<H: Host> fmt::Debug for Zoomed<'_, H>
where
    H::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zoomed")
            .field("event", self.event)
            .finish_non_exhaustive()
    }
}
