#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// The blocking loading indicator shared by the blog, analyze, case-study
/// and document workflows (the chat panel uses its typing indicator
/// instead).
///
/// `finish` runs unconditionally on success and failure paths alike, so
/// the overlay can never be left up after a request settles. Overlapping
/// requests are tracked with a depth counter: the overlay stays visible
/// until the last one settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    depth: u32,
}

impl OverlayState {
    pub fn begin(&mut self) {
        self.depth += 1;
    }

    pub fn finish(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.depth > 0
    }
}
