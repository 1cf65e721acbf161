//! A headless, scroll-driven timeline engine.
//!
//! For adapter-level utilities (the centering effect runner, view models, document loading),
//! see the `chronoscroll-adapter` crate.
//!
//! This crate maps a scroll position to a point in time and decides which timeline entries are
//! revealed, active, or past at that point: month-granular date parsing, range computation with
//! padding, an eased scroll-to-time mapping in either direction, and a monotonic reveal state
//! machine that emits one-shot effects.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - scroll offset and viewport height
//! - the timeline container's top offset and scroll height
//! - the current month ("today")
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod date;
mod easing;
mod emitter;
mod entry;
mod key;
mod mapper;
mod options;
mod range;
mod state;
mod timeline;
mod types;


pub use date::{
    MonthLabel, MonthPoint, ParseMonthError, YearMonth, clamp, format_month, parse_month,
};
pub use easing::Easing;
pub use emitter::StatePatch;
pub use entry::{Entry, EntryId, RawEntry, prepare_entries};
pub use mapper::raw_progress;
pub use options::TimelineOptions;
pub use range::TimeRange;
pub use state::{ScrollGeometry, ScrollState};
pub use timeline::{Effect, Timeline, TimelineEvent, Update};
pub use types::{Order, Phase, RevealState};
