//! Transition history with linear undo/redo.
//!
//! History is a single ordered log of records. Undo does not remove
//! records, it marks them `undone`; redo clears the mark again. Undone
//! records only ever form one contiguous tail, so the last record that is
//! not undone is always the current one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// State reported by a machine before any transition has been taken.
pub const BOOTSTRAP_STATE: &str = "normal";

/// Record of a single successful transition.
///
/// # Example
///
/// ```rust
/// use linear_fsm::core::{HistoryRecord, BOOTSTRAP_STATE};
///
/// let record = HistoryRecord::bootstrap();
/// assert_eq!(record.step, 0);
/// assert_eq!(record.start, "");
/// assert_eq!(record.end, BOOTSTRAP_STATE);
/// assert!(record.is_bootstrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Position in the active timeline, starting at 0
    pub step: u64,
    /// The state transitioned from (empty for the bootstrap record)
    pub start: String,
    /// The state transitioned to
    pub end: String,
    /// Logically removed from the active timeline, kept for redo
    pub undone: bool,
    /// When the record was appended
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// The synthetic first record every history starts from.
    pub fn bootstrap() -> Self {
        Self {
            step: 0,
            start: String::new(),
            end: BOOTSTRAP_STATE.to_string(),
            undone: false,
            timestamp: Utc::now(),
        }
    }

    /// Check whether this is the bootstrap record (no state to return to).
    pub fn is_bootstrap(&self) -> bool {
        self.start.is_empty()
    }

    /// A self-transition cannot be undone.
    fn is_undoable(&self) -> bool {
        !self.is_bootstrap() && self.start != self.end
    }
}

/// Ordered log of transition records.
///
/// # Example
///
/// ```rust
/// use linear_fsm::core::HistoryLog;
///
/// let mut history = HistoryLog::new();
/// history.record("red");
/// history.record("green");
/// assert_eq!(history.current().end, "green");
///
/// assert!(history.undo());
/// assert_eq!(history.current().end, "red");
/// assert_eq!(history.len(), 3); // undone records are kept
///
/// assert!(history.redo());
/// assert_eq!(history.path(), vec!["normal", "red", "green"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HistoryRecord>", into = "Vec<HistoryRecord>")]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create a history holding only the bootstrap record.
    pub fn new() -> Self {
        Self {
            records: vec![HistoryRecord::bootstrap()],
        }
    }

    /// The record describing the active state.
    pub fn current(&self) -> &HistoryRecord {
        &self.records[self.current_index()]
    }

    // The first record is never undone, so a position always exists.
    fn current_index(&self) -> usize {
        self.records.iter().rposition(|r| !r.undone).unwrap_or(0)
    }

    /// Append a transition from the current state to `end`.
    ///
    /// Every undone record is discarded afterwards, which closes the
    /// redo window.
    pub fn record(&mut self, end: impl Into<String>) -> &HistoryRecord {
        let current = self.current();
        let record = HistoryRecord {
            step: current.step + 1,
            start: current.end.clone(),
            end: end.into(),
            undone: false,
            timestamp: Utc::now(),
        };
        self.records.push(record);
        self.records.retain(|r| !r.undone);

        &self.records[self.records.len() - 1]
    }

    /// Mark the current record undone.
    ///
    /// Returns `false` when the current record is the bootstrap record or a
    /// self-transition; history is left untouched in both cases.
    pub fn undo(&mut self) -> bool {
        let index = self.current_index();
        let record = &mut self.records[index];
        if !record.is_undoable() {
            return false;
        }
        record.undone = true;
        true
    }

    /// Restore the earliest undone record. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.records.iter_mut().find(|r| r.undone) {
            Some(record) => {
                record.undone = false;
                true
            }
            None => false,
        }
    }

    /// Whether [`HistoryLog::undo`] would succeed.
    pub fn can_undo(&self) -> bool {
        self.current().is_undoable()
    }

    /// Whether [`HistoryLog::redo`] would succeed.
    pub fn can_redo(&self) -> bool {
        self.records.iter().any(|r| r.undone)
    }

    /// Drop every record and start over from the bootstrap record.
    pub fn clear(&mut self) {
        self.records = vec![HistoryRecord::bootstrap()];
    }

    /// All records in order, including undone ones.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of stored records, including undone ones.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: a history holds at least the bootstrap record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// States along the active timeline, from the bootstrap state to the
    /// current state.
    pub fn path(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| !r.undone)
            .map(|r| r.end.as_str())
            .collect()
    }

    /// Time between the bootstrap record and the current record.
    ///
    /// Returns `None` while no transition is active.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let current = self.current();
        if current.is_bootstrap() {
            return None;
        }
        current
            .timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

impl TryFrom<Vec<HistoryRecord>> for HistoryLog {
    type Error = String;

    /// Accept only logs that could have been produced by transitions:
    /// an active bootstrap record first, `step` equal to list position,
    /// each record starting where the previous one ended, and undone
    /// records confined to one contiguous tail.
    fn try_from(records: Vec<HistoryRecord>) -> Result<Self, Self::Error> {
        let Some(first) = records.first() else {
            return Err("history must contain the bootstrap record".to_string());
        };
        if first.undone || !first.is_bootstrap() || first.end != BOOTSTRAP_STATE {
            return Err(format!(
                "first history record must be an active bootstrap record ending in '{}'",
                BOOTSTRAP_STATE
            ));
        }

        for (index, record) in records.iter().enumerate() {
            if record.step != index as u64 {
                return Err(format!(
                    "history record {} has step {}, expected {}",
                    index, record.step, index
                ));
            }
        }

        for (index, pair) in records.windows(2).enumerate() {
            if pair[1].start.is_empty() || pair[1].start != pair[0].end {
                return Err(format!(
                    "history record {} does not start where record {} ended",
                    index + 1,
                    index
                ));
            }
        }

        if let Some(tail) = records.iter().position(|r| r.undone) {
            if records[tail..].iter().any(|r| !r.undone) {
                return Err(format!(
                    "active history record follows undone record {}",
                    tail
                ));
            }
        }

        Ok(Self { records })
    }
}

impl From<HistoryLog> for Vec<HistoryRecord> {
    fn from(history: HistoryLog) -> Self {
        history.records
    }
}
