//! Append-only game record storage and score aggregates
//!
//! The aggregate functions work on any slice of records so callers can pass
//! the whole store or a filtered view. None of them reorder their input.

use crate::core::{GameError, GameRecord, PlayerId};

/// All game records of the current run, in insertion order
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<GameRecord>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed game
    pub fn append(&mut self, record: GameRecord) {
        tracing::info!(
            player = record.player().value(),
            score = record.score(),
            total = self.records.len() + 1,
            "game recorded"
        );
        self.records.push(record);
    }

    /// Read-only view of every record in insertion order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Average score over the whole store
    ///
    /// # Errors
    /// Returns `EmptyCollection` if nothing has been recorded yet.
    pub fn average(&self) -> Result<f64, GameError> {
        average(&self.records)
    }

    /// Average score of one player over the whole store
    ///
    /// # Errors
    /// Returns `EmptyCollection` if the player has no records.
    pub fn player_average(&self, player: PlayerId) -> Result<f64, GameError> {
        player_average(player, &self.records)
    }

    /// Best `n` records of the store
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<GameRecord> {
        top_n(&self.records, n)
    }

    /// Best `n` records of one player
    #[must_use]
    pub fn top_n_for_player(&self, player: PlayerId, n: usize) -> Vec<GameRecord> {
        top_n_for_player(player, &self.records, n)
    }

    /// Distinct players in order of their first record
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.records
            .iter()
            .map(GameRecord::player)
            .filter(|player| seen.insert(*player))
            .collect()
    }
}

/// Mean score of `records`
///
/// # Errors
/// Returns `EmptyCollection` for an empty slice instead of dividing by zero.
///
/// # Examples
/// ```
/// use guessing_games::core::{GameRecord, PlayerId};
/// use guessing_games::records::average;
///
/// let player = PlayerId::new(1);
/// let records = [
///     GameRecord::new(10, player),
///     GameRecord::new(20, player),
///     GameRecord::new(30, player),
/// ];
/// assert!((average(&records).unwrap() - 20.0).abs() < f64::EPSILON);
/// ```
pub fn average(records: &[GameRecord]) -> Result<f64, GameError> {
    if records.is_empty() {
        return Err(GameError::EmptyCollection);
    }

    let sum: u64 = records.iter().map(|r| u64::from(r.score())).sum();
    Ok(sum as f64 / records.len() as f64)
}

/// Mean score of the records belonging to `player`
///
/// # Errors
/// Returns `EmptyCollection` if `player` has no records in `records`.
pub fn player_average(player: PlayerId, records: &[GameRecord]) -> Result<f64, GameError> {
    average(&for_player(player, records))
}

/// The `min(n, len)` highest-scoring records, best first
///
/// Equal scores keep their relative order. The input is copied,
/// never sorted in place.
#[must_use]
pub fn top_n(records: &[GameRecord], n: usize) -> Vec<GameRecord> {
    let mut sorted = records.to_vec();
    // `sort_by` is stable, which keeps insertion order among ties
    sorted.sort_by(|a, b| b.score().cmp(&a.score()));
    sorted.truncate(n);
    sorted
}

/// [`top_n`] restricted to one player's records
#[must_use]
pub fn top_n_for_player(player: PlayerId, records: &[GameRecord], n: usize) -> Vec<GameRecord> {
    top_n(&for_player(player, records), n)
}

fn for_player(player: PlayerId, records: &[GameRecord]) -> Vec<GameRecord> {
    records
        .iter()
        .filter(|r| r.player() == player)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.append(GameRecord::new(10, P1));
        store.append(GameRecord::new(20, P1));
        store.append(GameRecord::new(5, P2));
        store
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn average_of_three() {
        let records = [
            GameRecord::new(10, P1),
            GameRecord::new(20, P1),
            GameRecord::new(30, P2),
        ];
        assert_close(average(&records).unwrap(), 20.0);
    }

    #[test]
    fn average_empty_is_error() {
        assert!(matches!(average(&[]), Err(GameError::EmptyCollection)));
        assert!(matches!(
            RecordStore::new().average(),
            Err(GameError::EmptyCollection)
        ));
    }

    #[test]
    fn player_scenario() {
        let store = sample_store();

        assert_close(store.player_average(P1).unwrap(), 15.0);
        assert_close(store.player_average(P2).unwrap(), 5.0);

        let best = store.top_n_for_player(P1, 1);
        assert_eq!(best, vec![GameRecord::new(20, P1)]);
    }

    #[test]
    fn player_without_records_is_error() {
        let store = sample_store();
        assert!(matches!(
            store.player_average(PlayerId::new(9)),
            Err(GameError::EmptyCollection)
        ));
        assert!(store.top_n_for_player(PlayerId::new(9), 3).is_empty());
    }

    #[test]
    fn top_n_clamps_to_length() {
        let store = sample_store();
        assert_eq!(store.top_n(10).len(), 3);
        assert!(store.top_n(0).is_empty());
    }

    #[test]
    fn top_n_keeps_tie_order() {
        let records = [
            GameRecord::new(30, P2),
            GameRecord::new(50, P1),
            GameRecord::new(30, P1),
            GameRecord::new(30, PlayerId::new(3)),
        ];
        let top = top_n(&records, 3);
        assert_eq!(
            top,
            vec![
                GameRecord::new(50, P1),
                GameRecord::new(30, P2),
                GameRecord::new(30, P1),
            ]
        );
    }

    #[test]
    fn top_n_does_not_mutate_input() {
        let store = sample_store();
        let before = store.records().to_vec();
        let _ = store.top_n(2);
        let _ = top_n(store.records(), 2);
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn players_in_first_seen_order() {
        let mut store = sample_store();
        store.append(GameRecord::new(0, P1));
        store.append(GameRecord::new(0, PlayerId::new(7)));
        assert_eq!(store.players(), vec![P1, P2, PlayerId::new(7)]);
    }

    fn arb_records() -> impl Strategy<Value = Vec<GameRecord>> {
        proptest::collection::vec(
            (0u32..=10, 1u32..=4).prop_map(|(s, p)| GameRecord::new(s * 10, PlayerId::new(p))),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn prop_top_n_sorted_and_sized(records in arb_records(), n in 0usize..50) {
            let top = top_n(&records, n);
            prop_assert_eq!(top.len(), n.min(records.len()));
            prop_assert!(top.windows(2).all(|w| w[0].score() >= w[1].score()));
        }

        #[test]
        fn prop_top_n_stable_under_ties(scores in proptest::collection::vec(0u32..=5, 0..40)) {
            // Player ids follow insertion order, so ties must come out with ascending ids
            let records: Vec<GameRecord> = (1u32..)
                .zip(&scores)
                .map(|(id, score)| GameRecord::new(*score, PlayerId::new(id)))
                .collect();
            let top = top_n(&records, records.len());
            for pair in top.windows(2) {
                if pair[0].score() == pair[1].score() {
                    prop_assert!(pair[0].player() < pair[1].player());
                }
            }
        }
    }
}
