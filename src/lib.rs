//! # runlength - Run-Length Encoding over iterators
//!
//! Groups consecutive equal values of any sequence into `(value, count)` runs
//! and expands them back.
//!
//! Encoding is a single forward pass: the encoder carries the current value
//! and its running count, emits the run when a different value arrives, and
//! flushes the last run once the input ends. At most one element is buffered,
//! so infinite inputs are encoded lazily.
//!
//! ## Example
//!
//! ```
//! use runlength::{encode, RunLengthExt};
//!
//! let numbers = vec![0, 0, 3, 3, 3, 3, 3, 2, 0, 0, 0, 6, 6];
//! let runs: Vec<(i32, usize)> = encode(numbers.clone()).map(Into::into).collect();
//! assert_eq!(runs, vec![(0, 2), (3, 5), (2, 1), (0, 3), (6, 2)]);
//!
//! // Expanding the runs reconstructs the input
//! let expanded: Vec<i32> = encode(numbers.clone()).expand().collect();
//! assert_eq!(expanded, numbers);
//! ```
//!
//! ## Modes
//!
//! - [`Runs`]: pull-based adapter, also reachable through [`RunLengthExt::runs`]
//! - [`TryRuns`]: equality test that may fail; the first failure ends the stream
//! - [`RunEncoder`]: push-based, for producers that hand values over one by one
//! - [`RleVec`]: an owned sequence kept in run-length form with indexed access

#[macro_use]
extern crate log;

mod decode;
mod encode;
mod encoder;
mod error;
mod ext;
mod rle_vec;
mod run;
mod try_encode;

#[cfg(test)]
mod tests;

pub use decode::{decode, Expand};
pub use encode::{encode, EqFn, Runs};
pub use encoder::RunEncoder;
pub use error::{RunError, RunResult};
pub use ext::RunLengthExt;
pub use rle_vec::{RleVec, RunStats, Values};
pub use run::Run;
pub use try_encode::TryRuns;
