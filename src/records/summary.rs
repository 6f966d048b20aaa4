//! Aggregate report over a record store
//!
//! Collects the numbers the score report shows: overall average, best games
//! overall, and per-player average and best games.

use super::RecordStore;
use crate::core::{GameRecord, PlayerId};

/// Statistics for one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    pub player: PlayerId,
    pub games: usize,
    pub average: f64,
    pub best: Vec<GameRecord>,
}

/// Statistics for the whole run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_games: usize,
    /// `None` when no games have been recorded
    pub average: Option<f64>,
    pub top: Vec<GameRecord>,
    pub players: Vec<PlayerSummary>,
}

impl Report {
    /// Build a report keeping the best `top_n` games overall and per player
    #[must_use]
    pub fn build(store: &RecordStore, top_n: usize) -> Self {
        let players = store
            .players()
            .into_iter()
            .filter_map(|player| {
                // Every listed player has at least one record
                let average = store.player_average(player).ok()?;
                let games = store
                    .records()
                    .iter()
                    .filter(|r| r.player() == player)
                    .count();
                Some(PlayerSummary {
                    player,
                    games,
                    average,
                    best: store.top_n_for_player(player, top_n),
                })
            })
            .collect();

        Self {
            total_games: store.len(),
            average: store.average().ok(),
            top: store.top_n(top_n),
            players,
        }
    }

    /// Summary for one player, if they have played
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| p.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_report() {
        let report = Report::build(&RecordStore::new(), 3);
        assert_eq!(report.total_games, 0);
        assert_eq!(report.average, None);
        assert!(report.top.is_empty());
        assert!(report.players.is_empty());
    }

    #[test]
    fn report_per_player() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);
        let mut store = RecordStore::new();
        store.append(GameRecord::new(10, p1));
        store.append(GameRecord::new(20, p1));
        store.append(GameRecord::new(5, p2));

        let report = Report::build(&store, 1);
        assert_eq!(report.total_games, 3);
        assert!((report.average.unwrap() - 35.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.top, vec![GameRecord::new(20, p1)]);

        let first = report.player(p1).unwrap();
        assert_eq!(first.games, 2);
        assert!((first.average - 15.0).abs() < 1e-9);
        assert_eq!(first.best, vec![GameRecord::new(20, p1)]);

        let second = report.player(p2).unwrap();
        assert_eq!(second.games, 1);
        assert_eq!(second.best, vec![GameRecord::new(5, p2)]);

        assert!(report.player(PlayerId::new(3)).is_none());
    }
}
