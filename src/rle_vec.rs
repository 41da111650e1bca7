use crate::error::{RunError, RunResult};
use crate::run::Run;
use ahash::AHashMap as HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice;

/// An owned sequence stored as runs.
///
/// Consecutive equal values pushed onto the vector share one [`Run`]; stored
/// runs are always maximal. Cumulative run end offsets are kept alongside so
/// that positions in the expanded sequence resolve in O(log runs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RleVec<T> {
    runs: Vec<Run<T>>,
    /// `ends[i]` is the expanded length covered by `runs[..=i]`
    ends: Vec<usize>,
}

impl<T: PartialEq> RleVec<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            ends: Vec::new(),
        }
    }

    /// Builds a sequence from `(value, count)` pairs.
    ///
    /// Adjacent pairs with equal values are merged. Fails on the first pair
    /// with a count of zero, or whose count would push the expanded length
    /// past `usize::MAX`.
    pub fn from_runs<I>(pairs: I) -> RunResult<Self>
    where
        I: IntoIterator<Item = (T, usize)>,
    {
        let mut seq = Self::new();
        for (index, (value, count)) in pairs.into_iter().enumerate() {
            if count == 0 {
                debug!("rejecting zero-count run at position {index}");
                return Err(RunError::ZeroCount { index });
            }
            if !seq.checked_push_run(Run::new(value, count)) {
                debug!("rejecting run at position {index}: length overflow");
                return Err(RunError::LengthOverflow { index });
            }
        }
        Ok(seq)
    }

    /// Appends one value, extending the last run if it holds an equal value.
    pub fn push(&mut self, value: T) {
        self.push_run(Run::single(value));
    }

    /// Appends a whole run, merging it into the last run when the values match.
    ///
    /// # Panics
    ///
    /// Panics if the expanded length would exceed `usize::MAX`.
    pub fn push_run(&mut self, run: Run<T>) {
        assert!(
            self.checked_push_run(run),
            "RleVec length overflows usize"
        );
    }

    /// Appends `run` unless the expanded length would overflow, in which case
    /// the sequence is left untouched and `false` is returned.
    fn checked_push_run(&mut self, run: Run<T>) -> bool {
        let Some(new_len) = self.len().checked_add(run.count()) else {
            return false;
        };

        // A run never outgrows the total, so growing it cannot overflow either
        if let (Some(last), Some(end)) = (self.runs.last_mut(), self.ends.last_mut()) {
            if last.value() == run.value() {
                debug!("merging run of {} into previous run of {}", run.count(), last.count());
                last.grow(run.count());
                *end = new_len;
                return true;
            }
        }

        self.ends.push(new_len);
        self.runs.push(run);
        true
    }

    /// Number of values in the expanded sequence.
    pub fn len(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of stored runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub fn runs(&self) -> &[Run<T>] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<Run<T>> {
        self.runs
    }

    /// Returns the value at `index` of the expanded sequence.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        let pos = self.ends.partition_point(|&end| end <= index);
        Some(self.runs[pos].value())
    }

    /// Returns an iterator over the expanded sequence.
    pub fn iter(&self) -> Values<'_, T> {
        Values {
            runs: self.runs.iter(),
            current: None,
            remaining_run: 0,
            remaining_total: self.len(),
        }
    }

    /// Returns compression statistics.
    pub fn stats(&self) -> RunStats {
        RunStats {
            input_length: self.len(),
            num_runs: self.runs.len(),
            longest_run: self.runs.iter().map(Run::count).max().unwrap_or(0),
        }
    }
}

impl<T: PartialEq + Hash + Eq> RleVec<T> {
    /// Total number of occurrences of each distinct value.
    pub fn value_totals(&self) -> HashMap<&T, usize> {
        let mut totals = HashMap::new();
        for run in &self.runs {
            *totals.entry(run.value()).or_insert(0) += run.count();
        }
        totals
    }
}

impl<T: PartialEq> Default for RleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Extend<T> for RleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for RleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

/// Iterator over the expanded values of an [`RleVec`].
#[derive(Debug)]
pub struct Values<'a, T> {
    runs: slice::Iter<'a, Run<T>>,
    current: Option<&'a T>,
    /// Remaining count for the current run
    remaining_run: usize,
    remaining_total: usize,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining_run == 0 {
            let run = self.runs.next()?;
            self.current = Some(run.value());
            self.remaining_run = run.count();
        }

        self.remaining_run -= 1;
        self.remaining_total -= 1;
        self.current
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining_total, Some(self.remaining_total))
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}

impl<'a, T: PartialEq> IntoIterator for &'a RleVec<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Statistics about a run-length encoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Number of values in the expanded sequence
    pub input_length: usize,
    /// Number of stored runs
    pub num_runs: usize,
    /// Count of the longest run (0 when empty)
    pub longest_run: usize,
}

impl RunStats {
    /// Returns the compression ratio as a percentage (runs vs input).
    pub fn compression_ratio(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            (self.num_runs as f64 / self.input_length as f64) * 100.0
        }
    }
}
