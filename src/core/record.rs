//! Completed-game facts

use std::fmt;

/// Identifier of a player, issued by [`PlayerIdentity`](super::PlayerIdentity)
///
/// Issued ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score earned by one player in one completed round
///
/// Immutable once created: fields are only readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameRecord {
    score: u32,
    player: PlayerId,
}

impl GameRecord {
    #[must_use]
    pub const fn new(score: u32, player: PlayerId) -> Self {
        Self { score, player }
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player ID: {}, Score: {}", self.player, self.score)
    }
}
