/// What recording one report did to the barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More sources still have to report.
    Pending { completed: usize, total: usize },
    /// This report closed the barrier. Returned at most once.
    Complete,
    /// The source already reported, or the index is out of range.
    Ignored,
}

/// Join point for a fan-out of fetches, keyed by source index.
///
/// Each source may report once; the barrier closes exactly when every
/// source has reported.
#[derive(Debug)]
pub struct CompletionBarrier {
    reported: Vec<bool>,
    completed: usize,
}

impl CompletionBarrier {
    pub fn new(total: usize) -> Self {
        Self {
            reported: vec![false; total],
            completed: 0,
        }
    }

    pub fn record(&mut self, index: usize) -> Progress {
        match self.reported.get_mut(index) {
            Some(seen) if !*seen => *seen = true,
            _ => return Progress::Ignored,
        }

        self.completed += 1;
        if self.is_complete() {
            Progress::Complete
        } else {
            Progress::Pending {
                completed: self.completed,
                total: self.total(),
            }
        }
    }

    pub fn total(&self) -> usize {
        self.reported.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.total()
    }

    /// Indices that have not reported yet.
    pub fn missing(&self) -> Vec<usize> {
        self.reported
            .iter()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .map(|(i, _)| i)
            .collect()
    }
}
