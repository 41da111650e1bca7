use crate::run::Run;
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::num::NonZeroUsize;

/// Equality predicate used by [`encode`] and [`Runs::new`].
pub type EqFn<T> = fn(&T, &T) -> bool;

/// Iterator adapter that groups consecutive equal values into [`Run`]s.
///
/// Single forward pass: the adapter holds at most one buffered element, the
/// first value of the next run, which it pulled while closing the current one.
/// The final run is emitted once the underlying iterator is exhausted.
pub struct Runs<I: Iterator, F> {
    iter: Fuse<I>,
    /// First element of the next run, already pulled from `iter`
    pending: Option<I::Item>,
    same: F,
    /// Upper bound on a single run's count (`usize::MAX` when uncapped)
    max_run: usize,
}

impl<I, F> fmt::Debug for Runs<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runs")
            .field("iter", &self.iter)
            .field("pending", &self.pending)
            .field("max_run", &self.max_run)
            .finish()
    }
}

impl<I: Iterator> Runs<I, EqFn<I::Item>>
where
    I::Item: PartialEq,
{
    /// Creates an adapter comparing elements with `PartialEq`.
    pub fn new(iter: I) -> Self {
        Self::by(iter, <I::Item as PartialEq>::eq)
    }
}

impl<I: Iterator, F> Runs<I, F>
where
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    /// Creates an adapter that extends a run while `same(run_value, next)` holds.
    pub fn by(iter: I, same: F) -> Self {
        Self {
            iter: iter.fuse(),
            pending: None,
            same,
            max_run: usize::MAX,
        }
    }

    /// Splits runs so that no emitted count exceeds `max`.
    ///
    /// Adjacent runs may then carry equal values; expanding them still
    /// reproduces the input.
    pub fn with_max_run(mut self, max: NonZeroUsize) -> Self {
        self.max_run = max.get();
        self
    }
}

impl<I: Iterator, F> Iterator for Runs<I, F>
where
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Run<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.pending.take() {
            Some(value) => value,
            None => self.iter.next()?,
        };

        let mut run = Run::single(first);
        for value in self.iter.by_ref() {
            if run.count() < self.max_run && (self.same)(run.value(), &value) {
                run.bump();
            } else {
                self.pending = Some(value);
                break;
            }
        }

        trace!("emit run of length {}", run.count());
        Some(run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        let (lower, upper) = self.iter.size_hint();
        let lower = usize::from(pending > 0 || lower > 0);
        (lower, upper.and_then(|upper| upper.checked_add(pending)))
    }
}

impl<I: Iterator, F> FusedIterator for Runs<I, F> where F: FnMut(&I::Item, &I::Item) -> bool {}

/// Run-length encodes `iterable`, comparing elements with `PartialEq`.
///
/// ```
/// use runlength::encode;
///
/// let runs: Vec<(char, usize)> = encode("aaabcc".chars()).map(Into::into).collect();
/// assert_eq!(runs, vec![('a', 3), ('b', 1), ('c', 2)]);
/// ```
pub fn encode<I>(iterable: I) -> Runs<I::IntoIter, EqFn<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    Runs::new(iterable.into_iter())
}
