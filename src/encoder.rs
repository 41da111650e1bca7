use crate::run::Run;
use std::num::NonZeroUsize;

/// Push-driven run-length encoder.
///
/// Values are fed one at a time with [`push`](Self::push), which hands back a
/// run as soon as a differing value closes it. [`finish`](Self::finish)
/// flushes the run still open at the end of the input.
#[derive(Debug, Clone)]
pub struct RunEncoder<T> {
    /// Run currently being accumulated
    current: Option<Run<T>>,
    max_run: usize,
}

impl<T: PartialEq> RunEncoder<T> {
    /// Creates an encoder with no run open.
    pub fn new() -> Self {
        Self {
            current: None,
            max_run: usize::MAX,
        }
    }

    /// Closes a run once its count reaches `max`, even if the next value is equal.
    pub fn with_max_run(mut self, max: NonZeroUsize) -> Self {
        self.max_run = max.get();
        self
    }

    /// Feeds one value, returning the run it closed, if any.
    pub fn push(&mut self, value: T) -> Option<Run<T>> {
        if let Some(run) = self.current.as_mut() {
            if run.count() < self.max_run && *run.value() == value {
                run.bump();
                return None;
            }
        }

        let closed = self.current.replace(Run::single(value));
        if let Some(run) = &closed {
            trace!("push closed run of length {}", run.count());
        }
        closed
    }

    /// The value and count of the run still open.
    pub fn pending(&self) -> Option<(&T, usize)> {
        self.current.as_ref().map(|run| (run.value(), run.count()))
    }

    /// Ends the input, returning the last run.
    pub fn finish(self) -> Option<Run<T>> {
        if let Some(run) = &self.current {
            trace!("flush final run of length {}", run.count());
        }
        self.current
    }
}

impl<T: PartialEq> Default for RunEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::init_logger;

    fn feed<T: PartialEq>(mut encoder: RunEncoder<T>, input: Vec<T>) -> Vec<(T, usize)> {
        let mut out: Vec<(T, usize)> = input
            .into_iter()
            .filter_map(|value| encoder.push(value))
            .map(Into::into)
            .collect();
        out.extend(encoder.finish().map(Into::into));
        out
    }

    #[test]
    fn test_new() {
        let encoder = RunEncoder::<u8>::new();
        assert_eq!(encoder.pending(), None);
        assert_eq!(encoder.finish(), None);
    }

    #[test]
    fn test_push_sequence() {
        init_logger();
        let input = vec![0, 0, 3, 3, 3, 3, 3, 2, 0, 0, 0, 6, 6];
        assert_eq!(
            feed(RunEncoder::new(), input),
            vec![(0, 2), (3, 5), (2, 1), (0, 3), (6, 2)]
        );
    }

    #[test]
    fn test_push_returns_closed_run() {
        let mut encoder = RunEncoder::new();
        assert_eq!(encoder.push('a'), None);
        assert_eq!(encoder.push('a'), None);
        assert_eq!(encoder.pending(), Some((&'a', 2)));
        assert_eq!(encoder.push('b'), Some(Run::new('a', 2)));
        assert_eq!(encoder.pending(), Some((&'b', 1)));
        assert_eq!(encoder.finish(), Some(Run::new('b', 1)));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(feed(RunEncoder::new(), vec![7]), vec![(7, 1)]);
    }

    #[test]
    fn test_max_run() {
        let cap = NonZeroUsize::new(3).unwrap();
        let encoder = RunEncoder::new().with_max_run(cap);
        assert_eq!(
            feed(encoder, vec![5; 7]),
            vec![(5, 3), (5, 3), (5, 1)]
        );
    }
}
