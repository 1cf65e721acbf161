//! Adapter utilities for the `chronoscroll` crate.
//!
//! The `chronoscroll` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - An effect runner with the timed re-entrancy guard around "center on first reveal"
//! - View models for the progress rail and entry cards
//! - Startup loading of the experience and skills documents (`feature = "load"`)
//!
//! This crate is intentionally framework-agnostic (no DOM/web-sys bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod guard;
#[cfg(feature = "load")]
mod load;
mod view;

#[cfg(test)]
mod tests;

pub use controller::{Controller, ControllerOptions, Frame};
pub use guard::CenterGuard;
#[cfg(feature = "load")]
pub use load::{
    Boot, Documents, EXPERIENCE_JSON, FetchError, LoadError, SKILLS_JSON, SkillGroup, boot,
    load_documents,
};
pub use view::{EntryCard, ErrorCard, RailView, cards, class_list};
