use crate::{Easing, MonthPoint, Order, ScrollGeometry, ScrollState, TimeRange, clamp};

/// Linear scroll fraction of the viewport center across the container.
///
/// Returns 0 when the container is not scrollable or any input is non-finite.
pub fn raw_progress(geometry: &ScrollGeometry) -> f64 {
    let scrollable = geometry.scrollable_height();
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    let p = (geometry.scroll_center() - geometry.container_top) / scrollable;
    if !p.is_finite() {
        return 0.0;
    }
    clamp(p, 0.0, 1.0)
}

impl ScrollState {
    /// Maps a linear progress value onto `range`.
    ///
    /// Chronological order walks from `range.min()` to `range.max()`; reverse order walks back.
    pub fn map(range: &TimeRange, order: Order, easing: Easing, raw_progress: f64) -> Self {
        let raw_progress = clamp(raw_progress, 0.0, 1.0);
        let eased_progress = easing.sample(raw_progress);
        let min = range.min().ordinal() as f64;
        let max = range.max().ordinal() as f64;
        let span = max - min;
        let cursor = match order {
            Order::Chronological => min + eased_progress * span,
            Order::Reverse => max - eased_progress * span,
        };
        Self {
            raw_progress,
            eased_progress,
            cursor: MonthPoint::new(cursor),
        }
    }

    /// Shorthand for [`raw_progress`] followed by [`ScrollState::map`].
    pub fn from_geometry(
        geometry: &ScrollGeometry,
        range: &TimeRange,
        order: Order,
        easing: Easing,
    ) -> Self {
        Self::map(range, order, easing, raw_progress(geometry))
    }

    /// The month the cursor falls in.
    pub fn month(&self) -> crate::YearMonth {
        self.cursor.month()
    }
}
