use crate::error::{RunError, RunResult};

/// A maximal stretch of consecutive equal values.
///
/// `count` is always at least 1; the constructors refuse anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run<T> {
    value: T,
    count: usize,
}

impl<T> Run<T> {
    /// Creates a run of `count` copies of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn new(value: T, count: usize) -> Self {
        assert!(count > 0, "Run count must be at least 1");
        Self { value, count }
    }

    /// Creates a run, returning [`RunError::EmptyRun`] for a zero count
    /// instead of panicking.
    pub fn try_new(value: T, count: usize) -> RunResult<Self> {
        if count == 0 {
            return Err(RunError::EmptyRun);
        }
        Ok(Self { value, count })
    }

    /// A run holding a single occurrence of `value`.
    pub(crate) fn single(value: T) -> Self {
        Self { value, count: 1 }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Splits the run into its value and count.
    pub fn into_parts(self) -> (T, usize) {
        (self.value, self.count)
    }

    pub(crate) fn bump(&mut self) {
        self.count += 1;
    }

    pub(crate) fn grow(&mut self, by: usize) {
        self.count += by;
    }
}

impl<T> From<Run<T>> for (T, usize) {
    fn from(run: Run<T>) -> Self {
        run.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let run = Run::new('a', 3);
        assert_eq!(*run.value(), 'a');
        assert_eq!(run.count(), 3);
        assert_eq!(run.into_parts(), ('a', 3));
    }

    #[test]
    #[should_panic(expected = "Run count must be at least 1")]
    fn test_new_zero_count() {
        Run::new('a', 0);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Run::try_new(5u8, 2), Ok(Run::new(5u8, 2)));
        assert_eq!(Run::try_new(5u8, 0), Err(RunError::EmptyRun));
    }

    #[test]
    fn test_bump_and_grow() {
        let mut run = Run::single("x");
        run.bump();
        run.grow(3);
        assert_eq!(run.count(), 5);
    }

    #[test]
    fn test_into_tuple() {
        let pair: (i32, usize) = Run::new(7, 1).into();
        assert_eq!(pair, (7, 1));
    }
}
