use alloc::vec::Vec;

use chronoscroll::{
    Effect, Entry, EntryId, Order, ScrollGeometry, Timeline, TimelineOptions, Update, YearMonth,
};

use crate::{CenterGuard, RailView};

/// Configuration for [`Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerOptions {
    pub timeline: TimelineOptions,
    /// How long a centering jump suppresses further centering.
    pub center_hold_ms: u64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            timeline: TimelineOptions::default(),
            center_hold_ms: CenterGuard::DEFAULT_HOLD_MS,
        }
    }
}

/// Everything an adapter needs to apply after one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub update: Update,
    /// The entry to scroll into view now, if any. At most one per frame.
    pub center_on: Option<EntryId>,
    pub rail: RailView,
}

/// A framework-neutral controller that wraps a [`Timeline`] and runs its effects.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` when UI events occur
/// - `set_order` when the user changes the display order
///
/// `CenterOn` effects are run through a [`CenterGuard`]: the first one that finds the guard free
/// becomes `Frame::center_on`; the rest are dropped. Entries are already marked revealed by then,
/// so a dropped request is never retried.
#[derive(Clone, Debug)]
pub struct Controller {
    t: Timeline,
    guard: CenterGuard,
}

impl Controller {
    pub fn new(entries: Vec<Entry>, today: YearMonth, options: ControllerOptions) -> Self {
        Self {
            t: Timeline::new(entries, today, options.timeline),
            guard: CenterGuard::new(options.center_hold_ms),
        }
    }

    pub fn from_timeline(t: Timeline) -> Self {
        Self {
            t,
            guard: CenterGuard::default(),
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.t
    }

    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.t
    }

    pub fn into_timeline(self) -> Timeline {
        self.t
    }

    pub fn guard(&self) -> &CenterGuard {
        &self.guard
    }

    /// Whether a centering jump happened less than `center_hold_ms` ago.
    pub fn is_centering(&self, now_ms: u64) -> bool {
        self.guard.is_held(now_ms)
    }

    pub fn rail(&self) -> RailView {
        RailView::from_timeline(&self.t)
    }

    /// Call this when the UI reports a scroll position change.
    pub fn on_scroll(&mut self, geometry: ScrollGeometry, now_ms: u64) -> Frame {
        let update = self.t.on_scroll(geometry);
        self.finish(update, now_ms)
    }

    pub fn on_resize(&mut self, geometry: ScrollGeometry, now_ms: u64) -> Frame {
        let update = self.t.on_resize(geometry);
        self.finish(update, now_ms)
    }

    /// Switches the display order and recomputes immediately from the last geometry.
    pub fn set_order(&mut self, order: Order, now_ms: u64) -> Frame {
        let update = self.t.set_order(order);
        self.finish(update, now_ms)
    }

    pub fn toggle_order(&mut self, now_ms: u64) -> Frame {
        let update = self.t.toggle_order();
        self.finish(update, now_ms)
    }

    /// Replaces the entries (e.g. after a reload). Reveal memory is kept per id.
    pub fn set_entries(&mut self, entries: Vec<Entry>, now_ms: u64) -> Frame {
        let update = self.t.set_entries(entries);
        self.finish(update, now_ms)
    }

    /// Clears the centering guard once its hold has elapsed. Returns `true` if it was cleared.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.guard.expire(now_ms)
    }

    fn finish(&mut self, update: Update, now_ms: u64) -> Frame {
        let mut center_on = None;
        for effect in &update.effects {
            match effect {
                Effect::CenterOn(id) => {
                    if center_on.is_none() && self.guard.try_acquire(now_ms) {
                        adebug!(id = id.as_str(), now_ms, "Controller: centering entry");
                        center_on = Some(id.clone());
                    } else {
                        adebug!(
                            id = id.as_str(),
                            now_ms,
                            "Controller: centering suppressed by guard"
                        );
                    }
                }
            }
        }
        Frame {
            update,
            center_on,
            rail: self.rail(),
        }
    }
}
