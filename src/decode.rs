use crate::run::Run;
use std::iter::{Fuse, FusedIterator};

/// Iterator that expands runs back into the original values.
///
/// Each run yields `count` clones of its value; the last one is moved out
/// instead of cloned.
#[derive(Debug)]
pub struct Expand<I, T> {
    runs: Fuse<I>,
    current: Option<T>,
    /// Remaining count for the current run
    remaining: usize,
}

impl<I, T> Expand<I, T>
where
    I: Iterator<Item = Run<T>>,
    T: Clone,
{
    pub fn new(runs: I) -> Self {
        Self {
            runs: runs.fuse(),
            current: None,
            remaining: 0,
        }
    }
}

impl<I, T> Iterator for Expand<I, T>
where
    I: Iterator<Item = Run<T>>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            let (value, count) = self.runs.next()?.into_parts();
            self.current = Some(value);
            self.remaining = count;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.current.take()
        } else {
            self.current.clone()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every run holds at least one value, but may hold any number
        let (runs_lower, _) = self.runs.size_hint();
        (self.remaining.saturating_add(runs_lower), None)
    }
}

impl<I, T> FusedIterator for Expand<I, T>
where
    I: Iterator<Item = Run<T>>,
    T: Clone,
{
}

/// Expands `runs` into the sequence they encode.
///
/// ```
/// use runlength::{decode, Run};
///
/// let runs = vec![Run::new('x', 2), Run::new('y', 1)];
/// let text: String = decode(runs).collect();
/// assert_eq!(text, "xxy");
/// ```
pub fn decode<I, T>(runs: I) -> Expand<I::IntoIter, T>
where
    I: IntoIterator<Item = Run<T>>,
    T: Clone,
{
    Expand::new(runs.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_decode_empty() {
        let out: Vec<u8> = decode(Vec::new()).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_runs() {
        let runs = vec![
            Run::new(0, 2),
            Run::new(3, 5),
            Run::new(2, 1),
            Run::new(0, 3),
            Run::new(6, 2),
        ];
        let out: Vec<i32> = decode(runs).collect();
        assert_eq!(out, vec![0, 0, 3, 3, 3, 3, 3, 2, 0, 0, 0, 6, 6]);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let input: Vec<String> = ["a", "a", "b", "a"].iter().map(|s| s.to_string()).collect();
        let out: Vec<String> = decode(encode(input.clone())).collect();
        assert_eq!(out, input);
    }

    #[test]
    fn test_debug() {
        let mut values = decode(vec![Run::new('z', 2)]);
        values.next();
        let printed = format!("{values:?}");
        assert!(printed.contains("current: Some('z')"));
        assert!(printed.contains("remaining: 1"));
    }

    #[test]
    fn test_size_hint() {
        let mut values = decode(vec![Run::new('q', 3), Run::new('r', 1)]);
        assert_eq!(values.size_hint(), (2, None));
        values.next();
        assert_eq!(values.size_hint(), (3, None));
        assert_eq!(values.by_ref().count(), 3);
        assert_eq!(values.next(), None);
    }
}
