//! Point-scoring ledger.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// One `++` or `--`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub granter: String,
    pub at: DateTime<Utc>,
    pub reason: String,
    pub increase: bool,
}

impl Point {
    fn delta(&self) -> i64 {
        if self.increase { 1 } else { -1 }
    }

    /// "gave" or "docked".
    pub fn verb(&self) -> &'static str {
        if self.increase { "gave" } else { "docked" }
    }
}

/// A nick's running total and the points that produced it.
///
/// `total` is always the signed sum of `history`; it can only change through
/// [`ScoreLedger::record`].
#[derive(Clone, Debug, Default)]
pub struct Score {
    total: i64,
    history: Vec<Point>,
}

impl Score {
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn history(&self) -> &[Point] {
        &self.history
    }
}

#[derive(Debug, Default)]
pub struct ScoreLedger {
    scores: HashMap<String, Score>,
}

impl ScoreLedger {
    /// Append a point to a nick's history and return the new total.
    pub fn record(&mut self, nick: &str, point: Point) -> i64 {
        let score = self.scores.entry(nick.to_owned()).or_default();
        score.total += point.delta();
        score.history.push(point);
        score.total
    }

    pub fn get(&self, nick: &str) -> Option<&Score> {
        self.scores.get(nick)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
