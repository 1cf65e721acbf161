/// A short timed lock around the "center on first reveal" effect.
///
/// Centering moves the scroll position, which produces another scroll event. While the guard is
/// held, further centering requests are refused so that loop cannot feed itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterGuard {
    pub hold_ms: u64,
    held_until_ms: Option<u64>,
}

impl Default for CenterGuard {
    fn default() -> Self {
        Self::new(CenterGuard::DEFAULT_HOLD_MS)
    }
}

impl CenterGuard {
    pub const DEFAULT_HOLD_MS: u64 = 120;

    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            held_until_ms: None,
        }
    }

    pub fn is_held(&self, now_ms: u64) -> bool {
        match self.held_until_ms {
            Some(until) => now_ms < until,
            None => false,
        }
    }

    /// Takes the lock for `hold_ms`. Returns `false` if it is still held.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        if self.is_held(now_ms) {
            return false;
        }
        self.held_until_ms = Some(now_ms.saturating_add(self.hold_ms));
        true
    }

    /// Clears an expired lock. Returns `true` if a lock was cleared.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.held_until_ms {
            Some(until) if now_ms >= until => {
                self.held_until_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn release(&mut self) {
        self.held_until_ms = None;
    }
}
