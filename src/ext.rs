use crate::decode::Expand;
use crate::encode::{EqFn, Runs};
use crate::run::Run;
use crate::try_encode::TryRuns;

/// Run-length adapters available on every iterator.
pub trait RunLengthExt: Iterator + Sized {
    /// Groups consecutive equal elements into runs.
    fn runs(self) -> Runs<Self, EqFn<Self::Item>>
    where
        Self::Item: PartialEq,
    {
        Runs::new(self)
    }

    /// Groups consecutive elements for which `same(run_value, next)` holds.
    fn runs_by<F>(self, same: F) -> Runs<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        Runs::by(self, same)
    }

    /// Like [`runs_by`](Self::runs_by), with a comparison that may fail.
    fn try_runs_by<F, E>(self, same: F) -> TryRuns<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Result<bool, E>,
    {
        TryRuns::new(self, same)
    }

    /// Expands an iterator of runs into the values they encode.
    fn expand<T>(self) -> Expand<Self, T>
    where
        Self: Iterator<Item = Run<T>>,
        T: Clone,
    {
        Expand::new(self)
    }
}

impl<I: Iterator> RunLengthExt for I {}
