use alloc::vec::Vec;

use crate::emitter::PatchEmitter;
use crate::key::RevealedSet;
use crate::{
    Entry, EntryId, MonthPoint, Order, Phase, RevealState, ScrollGeometry, ScrollState,
    StatePatch, TimeRange, TimelineOptions, YearMonth,
};

/// Input events for [`Timeline::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineEvent {
    Scroll(ScrollGeometry),
    Resize(ScrollGeometry),
    SetOrder(Order),
    /// Replaces the entry set. Reveal memory is kept for ids that survive.
    SetEntries(Vec<Entry>),
    /// Moves "today", which bounds open-ended entries in the range.
    SetToday(YearMonth),
}

/// A one-shot side effect for an external effect runner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Bring the entry into view. Queued once per entry, on its first reveal.
    CenterOn(EntryId),
}

/// The result of processing one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub scroll: ScrollState,
    /// State transitions, indexed by the current display order.
    pub patches: Vec<StatePatch>,
    pub effects: Vec<Effect>,
    /// The single current entry, see [`Timeline::current`].
    pub current: Option<EntryId>,
    /// The display order changed. Patch indexes refer to the new order; a presentation layer
    /// should rebuild from [`Timeline::iter`] instead of patching in place.
    pub reordered: bool,
}

impl Update {
    /// `true` when nothing beyond the scroll snapshot changed.
    pub fn is_quiet(&self) -> bool {
        self.patches.is_empty() && self.effects.is_empty() && !self.reordered
    }
}

#[derive(Clone, Debug)]
struct Slot {
    entry: Entry,
    loaded_at: usize,
    state: RevealState,
}

/// A headless scroll-driven timeline.
///
/// This type owns all timeline state that would otherwise live in globals: the display order,
/// the time range, and which entries have been revealed. It never touches UI objects:
/// - Your adapter feeds it scroll geometry and order changes.
/// - It answers with an [`Update`] describing state transitions and one-shot effects.
///
/// For the re-entrancy guard around centering and for view models, see the
/// `chronoscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct Timeline {
    options: TimelineOptions,
    order: Order,
    today: YearMonth,
    slots: Vec<Slot>,
    revealed: RevealedSet,
    range: TimeRange,
    geometry: Option<ScrollGeometry>,
    scroll: ScrollState,
    current: Option<usize>,
}

impl Timeline {
    /// Creates a timeline over `entries`.
    ///
    /// No state is evaluated yet: every entry starts `Upcoming`. Feed the first geometry (or call
    /// [`Timeline::refresh`]) to evaluate.
    pub fn new(entries: Vec<Entry>, today: YearMonth, options: TimelineOptions) -> Self {
        let range = TimeRange::compute(&entries, today, &options);
        let scroll = ScrollState::map(&range, options.order, options.easing, 0.0);
        cdebug!(
            entries = entries.len(),
            order = ?options.order,
            "Timeline::new"
        );
        let mut t = Self {
            order: options.order,
            options,
            today,
            slots: entries
                .into_iter()
                .enumerate()
                .map(|(loaded_at, entry)| Slot {
                    entry,
                    loaded_at,
                    state: RevealState::Upcoming,
                })
                .collect(),
            revealed: RevealedSet::new(),
            range,
            geometry: None,
            scroll,
            current: None,
        };
        t.sort_slots();
        t
    }

    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn today(&self) -> YearMonth {
        self.today
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn geometry(&self) -> Option<ScrollGeometry> {
        self.geometry
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Eased progress of the last evaluation, e.g. for a progress bar.
    pub fn progress(&self) -> f64 {
        self.scroll.eased_progress
    }

    pub fn cursor(&self) -> MonthPoint {
        self.scroll.cursor
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Entry at `index` in the current display order.
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.slots.get(index).map(|s| &s.entry)
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.slots.get(index).map(|s| s.state)
    }

    pub fn state_of(&self, id: &EntryId) -> Option<RevealState> {
        self.index_of(id).map(|i| self.slots[i].state)
    }

    pub fn index_of(&self, id: &EntryId) -> Option<usize> {
        self.slots.iter().position(|s| &s.entry.id == id)
    }

    /// Entries with their states, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Entry, RevealState)> + '_ {
        self.slots.iter().map(|s| (&s.entry, s.state))
    }

    /// Whether `id` has ever been revealed. Survives reorders and entry reloads.
    pub fn is_revealed(&self, id: &EntryId) -> bool {
        self.revealed.contains(id)
    }

    /// The one entry considered current.
    ///
    /// Among `Active` entries, the latest start wins; equal starts go to the entry that was loaded
    /// first.
    pub fn current(&self) -> Option<&Entry> {
        self.current.map(|i| &self.slots[i].entry)
    }

    /// Processes one event and returns the resulting diff.
    pub fn handle(&mut self, event: TimelineEvent) -> Update {
        match event {
            TimelineEvent::Scroll(geometry) => self.on_scroll(geometry),
            TimelineEvent::Resize(geometry) => self.on_resize(geometry),
            TimelineEvent::SetOrder(order) => self.set_order(order),
            TimelineEvent::SetEntries(entries) => self.set_entries(entries),
            TimelineEvent::SetToday(today) => self.set_today(today),
        }
    }

    /// Value-style variant of [`Timeline::handle`]: `(context, event) -> (context', update)`.
    pub fn step(mut self, event: TimelineEvent) -> (Self, Update) {
        let update = self.handle(event);
        (self, update)
    }

    pub fn on_scroll(&mut self, geometry: ScrollGeometry) -> Update {
        ctrace!(
            scroll_offset = geometry.scroll_offset,
            viewport_height = geometry.viewport_height,
            "Timeline::on_scroll"
        );
        self.geometry = Some(geometry);
        self.evaluate(false)
    }

    pub fn on_resize(&mut self, geometry: ScrollGeometry) -> Update {
        ctrace!(
            viewport_height = geometry.viewport_height,
            container_height = geometry.container_height,
            "Timeline::on_resize"
        );
        self.geometry = Some(geometry);
        self.evaluate(false)
    }

    /// Switches the display order.
    ///
    /// Entries are re-sorted, reveal memory is kept, and the mapping is recomputed immediately
    /// from the last known geometry.
    pub fn set_order(&mut self, order: Order) -> Update {
        let reordered = order != self.order;
        if reordered {
            cdebug!(from = ?self.order, to = ?order, "Timeline::set_order");
            self.order = order;
            self.sort_slots();
        }
        self.evaluate(reordered)
    }

    pub fn toggle_order(&mut self) -> Update {
        self.set_order(self.order.toggled())
    }

    /// Replaces the entry set and recomputes the range.
    ///
    /// Entries whose ids were revealed before stay revealed.
    pub fn set_entries(&mut self, entries: Vec<Entry>) -> Update {
        cdebug!(entries = entries.len(), "Timeline::set_entries");
        self.range = TimeRange::compute(&entries, self.today, &self.options);
        let revealed = &self.revealed;
        self.slots = entries
            .into_iter()
            .enumerate()
            .map(|(loaded_at, entry)| {
                let state = if revealed.contains(&entry.id) {
                    RevealState::Revealed(Phase::Past)
                } else {
                    RevealState::Upcoming
                };
                Slot {
                    entry,
                    loaded_at,
                    state,
                }
            })
            .collect();
        self.sort_slots();
        self.evaluate(true)
    }

    pub fn set_today(&mut self, today: YearMonth) -> Update {
        self.today = today;
        self.range = TimeRange::from_spans(
            self.slots.iter().map(|s| (s.entry.start, s.entry.end)),
            today,
            &self.options,
        );
        self.evaluate(false)
    }

    /// Re-evaluates against the last known geometry (progress 0 if none yet).
    pub fn refresh(&mut self) -> Update {
        self.evaluate(false)
    }

    fn sort_slots(&mut self) {
        // Stable: equal starts keep load order.
        match self.order {
            Order::Chronological => self.slots.sort_by(|a, b| a.entry.start.cmp(&b.entry.start)),
            Order::Reverse => self.slots.sort_by(|a, b| b.entry.start.cmp(&a.entry.start)),
        }
    }

    fn evaluate(&mut self, reordered: bool) -> Update {
        let scroll = match &self.geometry {
            Some(g) => ScrollState::from_geometry(g, &self.range, self.order, self.options.easing),
            None => ScrollState::map(&self.range, self.order, self.options.easing, 0.0),
        };
        self.scroll = scroll;
        let cursor = scroll.cursor;

        let mut patches = PatchEmitter::new();
        let mut effects = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let reached = match self.order {
                Order::Chronological => cursor.is_at_or_after(slot.entry.start),
                Order::Reverse => cursor.is_at_or_before(slot.entry.start),
            };

            let known = self.revealed.contains(&slot.entry.id);
            if reached && !known {
                cdebug!(id = slot.entry.id.as_str(), index, "Timeline: first reveal");
                self.revealed.insert(slot.entry.id.clone());
                if self.options.center_on_first_reveal {
                    effects.push(Effect::CenterOn(slot.entry.id.clone()));
                }
            }

            let next = if reached || known {
                RevealState::Revealed(phase_at(&slot.entry, cursor))
            } else {
                RevealState::Upcoming
            };
            slot.state = patches.emit(index, &slot.entry.id, slot.state, next);
        }

        self.current = pick_current(&self.slots);
        Update {
            scroll,
            patches: patches.finish(),
            effects,
            current: self.current().map(|e| e.id.clone()),
            reordered,
        }
    }
}

fn phase_at(entry: &Entry, cursor: MonthPoint) -> Phase {
    let started = cursor.is_at_or_after(entry.start);
    let ended = match entry.end {
        Some(end) => cursor.is_at_or_after(end),
        None => false,
    };
    if started && !ended {
        Phase::Active
    } else {
        Phase::Past
    }
}

fn pick_current(slots: &[Slot]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, slot) in slots.iter().enumerate() {
        if !slot.state.is_active() {
            continue;
        }
        best = match best {
            None => Some(i),
            Some(b) => {
                let cur = &slots[b];
                let later = slot.entry.start > cur.entry.start;
                let tie_earlier_load =
                    slot.entry.start == cur.entry.start && slot.loaded_at < cur.loaded_at;
                if later || tie_earlier_load {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

