use crate::{Easing, Order};

/// Configuration for [`crate::Timeline`].
///
/// With `feature = "serde"`, missing fields fall back to their defaults when deserializing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimelineOptions {
    /// Progress curve between scroll fraction and time. Defaults to `Power(4)`: time moves slowly
    /// near the top and accelerates toward the bottom.
    pub easing: Easing,

    /// Initial display order.
    pub order: Order,

    /// Months of padding added before the earliest start and after the latest end.
    pub buffer_months: u32,

    /// Whether the first reveal of an entry queues [`crate::Effect::CenterOn`].
    pub center_on_first_reveal: bool,

    /// Fallback window used when there are no dated entries: from January of
    /// `today.year - fallback_years_before` to January of `today.year + fallback_years_after`.
    pub fallback_years_before: u32,
    pub fallback_years_after: u32,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            easing: Easing::default(),
            order: Order::default(),
            buffer_months: 6,
            center_on_first_reveal: true,
            fallback_years_before: 5,
            fallback_years_after: 1,
        }
    }
}

impl TimelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Shorthand for `with_easing(Easing::Power(exponent))`.
    pub fn with_exponent(mut self, exponent: u32) -> Self {
        self.easing = Easing::Power(exponent);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn with_buffer_months(mut self, buffer_months: u32) -> Self {
        self.buffer_months = buffer_months;
        self
    }

    pub fn with_center_on_first_reveal(mut self, enabled: bool) -> Self {
        self.center_on_first_reveal = enabled;
        self
    }

    pub fn with_fallback_window(mut self, years_before: u32, years_after: u32) -> Self {
        self.fallback_years_before = years_before;
        self.fallback_years_after = years_after;
        self
    }
}
