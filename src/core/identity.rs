//! Player id allocation
//!
//! One allocator is created per run and handed to whoever starts sessions.
//! Ids are never reused within a run.

use super::PlayerId;

/// Monotonic player id allocator, starting from 0 so the first id is 1
#[derive(Debug, Default)]
pub struct PlayerIdentity {
    last: u32,
}

impl PlayerIdentity {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Increment the counter and return the new id
    #[allow(clippy::should_implement_trait)] // Not an iterator: never ends, never yields None
    pub fn next(&mut self) -> PlayerId {
        self.last += 1;
        tracing::debug!(player = self.last, "allocated player id");
        PlayerId::new(self.last)
    }

    /// The most recently issued id, or `None` before the first allocation
    #[must_use]
    pub const fn current(&self) -> Option<PlayerId> {
        if self.last == 0 {
            None
        } else {
            Some(PlayerId::new(self.last))
        }
    }

    /// Number of ids issued so far
    #[must_use]
    pub const fn issued(&self) -> u32 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_is_one() {
        let mut ids = PlayerIdentity::new();
        assert_eq!(ids.current(), None);
        assert_eq!(ids.next(), PlayerId::new(1));
        assert_eq!(ids.current(), Some(PlayerId::new(1)));
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = PlayerIdentity::new();
        let issued: Vec<PlayerId> = (0..10).map(|_| ids.next()).collect();
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.issued(), 10);
    }
}
