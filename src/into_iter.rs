use std::fmt;
use std::iter::FusedIterator;

use super::Deque;

/// An owning iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`into_iter`] method on [`Deque`] (provided by the
/// [`IntoIterator`] trait). Elements are moved out with [`pop_front_zero`] and
/// [`pop_back_zero`], so every element is dropped exactly once.
///
/// [`into_iter`]: Deque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
/// [`pop_front_zero`]: Deque::pop_front_zero
/// [`pop_back_zero`]: Deque::pop_back_zero
#[derive(Clone)]
pub struct IntoIter<T> {
    inner: Deque<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(inner: Deque<T>) -> Self {
        IntoIter { inner }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.pop_front_zero()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back_zero()
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}
