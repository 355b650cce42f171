//! Reorders results arriving from worker threads into (year, day, part) order

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Holds early results back until every key before them has been emitted
pub struct ResultAggregator {
    /// Keys not yet emitted, smallest first
    expected: VecDeque<ResultKey>,
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        expected_keys.dedup();
        Self {
            expected: expected_keys.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Buffer `result` and return whatever is now ready, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            let Some(result) = self.pending.remove(next) else {
                break;
            };
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let drained = std::mem::take(&mut self.pending);
        self.expected.retain(|key| !drained.contains_key(key));
        drained.into_values().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
