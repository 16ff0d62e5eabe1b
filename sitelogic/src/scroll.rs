#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_OFFSET_PX, NAVBAR_HIDE_PX, NAVBAR_SHADOW_PX, SCROLL_TOP_PX};

/// What the navbar should look like at a given scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarLook {
    /// Drop shadow once the page has scrolled at all meaningfully.
    pub shadow: bool,
    /// Slide the bar out of view while scrolling down past the threshold.
    pub hidden: bool,
}

/// Navbar scroll tracker. Recomputed on every scroll event; the direction
/// test needs the previous offset, which is the only state carried over.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarScroll {
    last_offset: f64,
}

impl NavbarScroll {
    /// Fold in the next scroll offset and return the resulting look.
    pub fn observe(&mut self, offset: f64) -> NavbarLook {
        let look = NavbarLook {
            shadow: offset > NAVBAR_SHADOW_PX,
            hidden: offset > self.last_offset && offset > NAVBAR_HIDE_PX,
        };
        self.last_offset = offset;
        look
    }
}

/// Whether the scroll-to-top button is shown at this offset.
#[must_use]
pub fn show_scroll_top(offset: f64) -> bool {
    offset > SCROLL_TOP_PX
}

/// Absolute scroll target for an in-page anchor, leaving room for the
/// fixed header. `rect_top` is the element's viewport-relative top and
/// `page_offset` the current scroll position.
#[must_use]
pub fn anchor_target(rect_top: f64, page_offset: f64) -> f64 {
    rect_top + page_offset - HEADER_OFFSET_PX
}
