use crate::{Entry, TimelineOptions, YearMonth};

/// The padded span of time the scroll range maps onto. Always `min < max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    min: YearMonth,
    max: YearMonth,
}

impl TimeRange {
    /// Builds a range from two months, widening it to one month if `max <= min`.
    pub fn new(min: YearMonth, max: YearMonth) -> Self {
        let max = if max > min { max } else { min.add_months(1) };
        Self { min, max }
    }

    /// Derives the range covering `entries`.
    ///
    /// Open-ended entries count as running until `today`. Both ends are padded outward by
    /// `options.buffer_months`. With no entries, returns [`TimeRange::fallback`].
    pub fn compute(entries: &[Entry], today: YearMonth, options: &TimelineOptions) -> Self {
        Self::from_spans(entries.iter().map(|e| (e.start, e.end)), today, options)
    }

    /// Same as [`TimeRange::compute`], over bare `(start, end)` spans.
    pub fn from_spans(
        spans: impl IntoIterator<Item = (YearMonth, Option<YearMonth>)>,
        today: YearMonth,
        options: &TimelineOptions,
    ) -> Self {
        let mut bounds: Option<(YearMonth, YearMonth)> = None;
        for (start, end) in spans {
            let end = end.unwrap_or(today);
            bounds = Some(match bounds {
                None => (start, end),
                Some((lo, hi)) => (lo.min(start), hi.max(end)),
            });
        }
        let Some((min_start, max_end)) = bounds else {
            cdebug!("TimeRange::compute: no dated entries, using fallback window");
            return Self::fallback(today, options);
        };

        let buffer = options.buffer_months as i64;
        let range = Self::new(min_start.add_months(-buffer), max_end.add_months(buffer));
        ctrace!(
            min = range.min.ordinal(),
            max = range.max.ordinal(),
            "TimeRange::compute"
        );
        range
    }

    /// A window anchored on January of the current year.
    pub fn fallback(today: YearMonth, options: &TimelineOptions) -> Self {
        let january = YearMonth::from_ordinal(today.year() as i64 * 12);
        Self::new(
            january.add_months(-(options.fallback_years_before as i64) * 12),
            january.add_months(options.fallback_years_after as i64 * 12),
        )
    }

    pub fn min(&self) -> YearMonth {
        self.min
    }

    pub fn max(&self) -> YearMonth {
        self.max
    }

    /// Length of the range in months; always at least 1.
    pub fn span_months(&self) -> i64 {
        self.min.months_until(self.max)
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.min <= month && month <= self.max
    }
}
