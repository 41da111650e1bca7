use crate::run::Run;
use std::fmt;
use std::iter::{Fuse, FusedIterator};

/// Run-length encoder whose equality test can fail.
///
/// The first comparator error is yielded in place of the run being built,
/// which is dropped. Runs yielded before it are unaffected, and the adapter
/// yields nothing after the error.
pub struct TryRuns<I: Iterator, F> {
    iter: Fuse<I>,
    pending: Option<I::Item>,
    same: F,
    failed: bool,
}

impl<I, F> fmt::Debug for TryRuns<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryRuns")
            .field("iter", &self.iter)
            .field("pending", &self.pending)
            .field("failed", &self.failed)
            .finish()
    }
}

impl<I: Iterator, F, E> TryRuns<I, F>
where
    F: FnMut(&I::Item, &I::Item) -> Result<bool, E>,
{
    pub fn new(iter: I, same: F) -> Self {
        Self {
            iter: iter.fuse(),
            pending: None,
            same,
            failed: false,
        }
    }
}

impl<I: Iterator, F, E> Iterator for TryRuns<I, F>
where
    F: FnMut(&I::Item, &I::Item) -> Result<bool, E>,
{
    type Item = Result<Run<I::Item>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let first = match self.pending.take() {
            Some(value) => value,
            None => self.iter.next()?,
        };

        let mut run = Run::single(first);
        for value in self.iter.by_ref() {
            match (self.same)(run.value(), &value) {
                Ok(true) => run.bump(),
                Ok(false) => {
                    self.pending = Some(value);
                    break;
                }
                Err(err) => {
                    debug!("comparison failed after {} equal values", run.count());
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }

        trace!("emit run of length {}", run.count());
        Some(Ok(run))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let pending = usize::from(self.pending.is_some());
        let (lower, upper) = self.iter.size_hint();
        let lower = usize::from(pending > 0 || lower > 0);
        (lower, upper.and_then(|upper| upper.checked_add(pending)))
    }
}

impl<I: Iterator, F, E> FusedIterator for TryRuns<I, F> where
    F: FnMut(&I::Item, &I::Item) -> Result<bool, E>
{
}
