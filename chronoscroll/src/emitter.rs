use alloc::vec::Vec;

use crate::{EntryId, RevealState};

/// One reveal-state transition for the presentation layer to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatePatch {
    /// Position in the current display order.
    pub index: usize,
    pub id: EntryId,
    pub from: RevealState,
    pub to: RevealState,
}

/// Collects state transitions into a diff.
///
/// It enforces the reveal contract:
/// - No-op transitions are dropped.
/// - A revealed entry never goes back to `Upcoming` (ignored and debug-asserted).
pub(crate) struct PatchEmitter {
    patches: Vec<StatePatch>,
}

impl PatchEmitter {
    pub(crate) fn new() -> Self {
        Self {
            patches: Vec::new(),
        }
    }

    /// Records `from -> to` and returns the state the entry ends up in.
    pub(crate) fn emit(
        &mut self,
        index: usize,
        id: &EntryId,
        from: RevealState,
        to: RevealState,
    ) -> RevealState {
        if from == to {
            return from;
        }
        if from.is_revealed() && !to.is_revealed() {
            cwarn!(
                index,
                id = id.as_str(),
                "PatchEmitter: revealed entries cannot return to Upcoming"
            );
            debug_assert!(
                !from.is_revealed() || to.is_revealed(),
                "PatchEmitter: revealed entries cannot return to Upcoming (id={id})"
            );
            return from;
        }

        self.patches.push(StatePatch {
            index,
            id: id.clone(),
            from,
            to,
        });
        to
    }

    pub(crate) fn finish(self) -> Vec<StatePatch> {
        self.patches
    }
}
