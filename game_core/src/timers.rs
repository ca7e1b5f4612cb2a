//! Virtual-clock timers
//!
//! One-shot and repeating timers keyed by a caller-defined kind. The owner
//! advances the clock and pops due timers one at a time, so a timer
//! cancelled by an earlier firing never runs.

use std::collections::{BTreeMap, HashMap};

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Entry<K> {
    kind: K,
    period: Option<u64>,
}

/// Timer queue ordered by due time, ties in creation order
#[derive(Debug, Clone)]
pub struct Timers<K> {
    now: u64,
    next_id: u64,
    queue: BTreeMap<(u64, TimerId), Entry<K>>,
    due_at: HashMap<TimerId, u64>,
}

impl<K: Copy> Timers<K> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            queue: BTreeMap::new(),
            due_at: HashMap::new(),
        }
    }

    /// Current clock in ms
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Fire once, `delay_ms` from now
    pub fn after(&mut self, delay_ms: u64, kind: K) -> TimerId {
        self.insert(self.now + delay_ms, kind, None)
    }

    /// Fire every `period_ms`, first one period from now
    pub fn every(&mut self, period_ms: u64, kind: K) -> TimerId {
        let period = period_ms.max(1);
        self.insert(self.now + period, kind, Some(period))
    }

    fn insert(&mut self, due: u64, kind: K, period: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.insert((due, id), Entry { kind, period });
        self.due_at.insert(id, due);
        id
    }

    /// Returns false if the timer already fired (one-shot) or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_at.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_at.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time. Repeating timers are re-armed one period later.
    pub fn pop_due(&mut self, until: u64) -> Option<K> {
        let (&(due, id), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }
        let entry = self.queue.remove(&(due, id))?;
        self.now = self.now.max(due);

        match entry.period {
            Some(period) => {
                self.queue.insert((due + period, id), entry);
                self.due_at.insert(id, due + period);
            }
            None => {
                self.due_at.remove(&id);
            }
        }
        Some(entry.kind)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, until: u64) {
        self.now = self.now.max(until);
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        self.queue.clear();
        self.due_at.clear();
    }
}

impl<K: Copy> Default for Timers<K> {
    fn default() -> Self {
        Self::new()
    }
}
