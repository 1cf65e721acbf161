use crate::MonthPoint;

/// Page geometry reported by the UI layer on each scroll/resize event.
///
/// All values are in page pixels. `container_top` is the container's offset from the top of the
/// page and `container_height` its full scroll height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub container_top: f64,
    pub container_height: f64,
}

impl ScrollGeometry {
    pub fn new(
        scroll_offset: f64,
        viewport_height: f64,
        container_top: f64,
        container_height: f64,
    ) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            container_top,
            container_height,
        }
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    /// Vertical midpoint of the viewport in page coordinates.
    pub fn scroll_center(&self) -> f64 {
        self.scroll_offset + self.viewport_height / 2.0
    }

    /// How far the viewport center travels across the container. May be zero or negative when
    /// the content is shorter than the viewport.
    pub fn scrollable_height(&self) -> f64 {
        self.container_height - self.viewport_height
    }
}

/// A snapshot of the scroll-to-time mapping, recomputed on every event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Linear scroll fraction in `[0, 1]`.
    pub raw_progress: f64,
    /// `raw_progress` after easing, in `[0, 1]`.
    pub eased_progress: f64,
    /// The point in time the scroll position maps to.
    pub cursor: MonthPoint,
}
