#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::EntryId;

#[cfg(feature = "std")]
pub(crate) type RevealedSet = HashSet<EntryId>;
#[cfg(not(feature = "std"))]
pub(crate) type RevealedSet = BTreeSet<EntryId>;
