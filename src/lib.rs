//! A double-ended queue on a power-of-two circular buffer.
//!
//! [`Deque`] can be used as a stack, as a FIFO queue or as a randomly indexable array. Pushing and
//! popping on both ends is amortized *O(1)* and indexing is *O(1)*.
//!
//! The deque stores its elements in a buffer whose length is always a power of two. Two counters,
//! `head` and `tail`, only ever move forward (or backward for front pushes) and are never wrapped
//! into the bounds of the buffer. Instead they are masked with `capacity - 1` at the point of
//! indexing. The length is `tail - head`, which stays correct even if the counters themselves
//! overflow because both wrap the same way. The counters are only reset when the buffer is
//! reallocated.
//!
//! ```text
//!         tail & mask               head & mask
//!               |                       |
//!               v                       v
//! +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! | 5 | 6 | 7 |   |   |   |   |   |   | 0 | 1 | 2 | 3 | 4 |   |   |
//! +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!   <- second run ->                    <----- first run ----->
//! ```
//!
//! When the live elements wrap past the end of the buffer they form two contiguous runs. All
//! searching and comparing methods work on these runs directly, see [`Deque::as_slices`].
//!
//! # Zeroing
//!
//! Every slot of the buffer always holds a valid `T`, slots outside of the live region hold stale
//! values. This is why storage requires `T: Default`. Methods with `zero` in their name reset
//! vacated slots to `T::default()`. Use them when `T` owns resources (heap memory, reference
//! counts, handles) that should be released as soon as the element leaves the deque. The plain
//! variants only move the counters and leave a stale copy behind, which is cheaper and perfectly
//! fine for plain data.
//!
//! # Unchecked methods
//!
//! Methods ending in `_unchecked` skip bounds and emptiness checks. They are *not* `unsafe`: the
//! slot they access is always masked into the buffer, so misuse silently yields or overwrites the
//! wrong element instead of panicking or reading invalid memory.
//!
//! # Examples
//!
//! ```
//! use ringdeque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_back_many([1, 2, 3]);
//! deque.push_front(0);
//!
//! assert_eq!(deque, [0, 1, 2, 3]);
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.pop_back(), Some(3));
//! assert_eq!(deque.at(1), &2);
//! ```

use core::cmp::{self, Ordering};
use core::ops::{Bound, Index, IndexMut, Range, RangeBounds};

use std::fmt;
use std::iter::{repeat_with, Chain, Enumerate};
use std::mem;
use std::slice;

use log::{debug, trace};

#[macro_use]
mod macros;

mod error;
mod into_iter;
mod pow2;

pub use error::Error;
pub use into_iter::IntoIter;
pub use pow2::ceil_pow2;


/// Capacity of a deque created with [`Deque::new`].
pub const DEFAULT_CAPACITY: usize = 16;

pub type Iter<'a, T> = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

pub type IterMut<'a, T> = Chain<slice::IterMut<'a, T>, slice::IterMut<'a, T>>;

/// A double-ended queue implemented with a growable circular buffer.
///
/// See the [module-level documentation](./index.html) for more details.
pub struct Deque<T> {
    // head and tail are positions in a virtual stream, they are masked with buf.len() - 1 to get
    // a slot in buf. tail - head (wrapping) is the length and never exceeds buf.len(), unless an
    // unchecked pop was called on an empty deque.
    // buf.len() is a power of two >= 1.
    buf: Box<[T]>,
    head: usize,
    tail: usize,
}

impl<T> Deque<T> {
    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head)
    }

    /// Returns whether the deque is empty or not.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns whether the deque is full. Pushing onto a full deque reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::with_capacity(2).unwrap();
    /// deque.push_back(1);
    /// assert!(!deque.is_full());
    /// deque.push_back(2);
    /// assert!(deque.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns the number of elements the deque can hold without reallocating. This is always a
    /// power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque: Deque<i32> = Deque::with_capacity(10).unwrap();
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque.
    ///
    /// The second slice is only non-empty if the elements wrap around the end of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::with_capacity(4).unwrap();
    /// deque.push_back_many([1, 2, 3]);
    /// assert_eq!(deque.as_slices(), (&[1, 2, 3][..], &[][..]));
    ///
    /// deque.push_front(0);
    /// assert_eq!(deque.as_slices(), (&[0][..], &[1, 2, 3][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.is_empty() {
            return (&[], &[]);
        }
        let head = self.head & self.mask();
        let tail = self.tail & self.mask();
        if head < tail {
            (&self.buf[head..tail], &[])
        } else {
            let (back, front) = self.buf.split_at(head);
            (front, &back[..tail])
        }
    }

    /// Returns a mutable pair of slices which contain, in order, the contents of the deque.
    ///
    /// See the non-mutable version [`as_slices`] for details.
    ///
    /// [`as_slices`]: Deque::as_slices
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        if self.is_empty() {
            return (&mut [], &mut []);
        }
        let head = self.head & self.mask();
        let tail = self.tail & self.mask();
        if head < tail {
            (&mut self.buf[head..tail], &mut [])
        } else {
            let (back, front) = self.buf.split_at_mut(head);
            (front, &mut back[..tail])
        }
    }

    /// Provides a reference to the element at the given index, or `None` if it is out of bounds.
    ///
    /// Element at index 0 is the front of the deque.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(self.slot(self.head.wrapping_add(index)))
        } else {
            None
        }
    }

    /// Provides a mutable reference to the element at the given index, or `None` if it is out of
    /// bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            Some(self.slot_mut(self.head.wrapping_add(index)))
        } else {
            None
        }
    }

    /// Provides a reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_front('a');
    /// deque.push_front('b');
    /// assert_eq!(deque.at(0), &'b');
    /// assert_eq!(deque.at(1), &'a');
    /// ```
    pub fn at(&self, index: usize) -> &T {
        self.check_bounds(index);
        self.at_unchecked(index)
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.check_bounds(index);
        self.slot_mut(self.head.wrapping_add(index))
    }

    /// Provides a reference to the element at the given index without checking the bounds.
    ///
    /// This never panics. If `index` is out of bounds it returns whatever element, live or stale,
    /// is stored in the slot the index maps to.
    #[inline]
    pub fn at_unchecked(&self, index: usize) -> &T {
        self.slot(self.head.wrapping_add(index))
    }

    /// Replaces the element at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2, 3]);
    /// deque.set(1, 5);
    /// assert_eq!(deque, [1, 5, 3]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) {
        self.check_bounds(index);
        self.set_unchecked(index, value);
    }

    /// Replaces the element at the given index without checking the bounds.
    ///
    /// This never panics. If `index` is out of bounds it overwrites another slot of the buffer,
    /// which may hold a live element.
    #[inline]
    pub fn set_unchecked(&mut self, index: usize, value: T) {
        *self.slot_mut(self.head.wrapping_add(index)) = value;
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2, 3]);
    /// deque.swap(0, 2);
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) {
        self.check_bounds(i);
        self.check_bounds(j);
        self.swap_unchecked(i, j);
    }

    /// Swaps elements at indices `i` and `j` without checking the bounds.
    ///
    /// This never panics, but swaps the wrong slots if an index is out of bounds.
    #[inline]
    pub fn swap_unchecked(&mut self, i: usize, j: usize) {
        let mask = self.mask();
        let i = self.head.wrapping_add(i) & mask;
        let j = self.head.wrapping_add(j) & mask;
        self.buf.swap(i, j);
    }

    /// Provides a reference to the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.peek_front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.peek_front(), Some(&1));
    /// ```
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.peek_front_unchecked())
        }
    }

    /// Provides a mutable reference to the front element, or `None` if the deque is empty.
    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            Some(self.slot_mut(self.head))
        }
    }

    /// Provides a reference to the front element without checking if the deque is empty.
    ///
    /// On an empty deque this returns a stale element.
    #[inline]
    pub fn peek_front_unchecked(&self) -> &T {
        self.slot(self.head)
    }

    /// Provides a reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.peek_back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.peek_back(), Some(&2));
    /// ```
    pub fn peek_back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.peek_back_unchecked())
        }
    }

    /// Provides a mutable reference to the back element, or `None` if the deque is empty.
    pub fn peek_back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            Some(self.slot_mut(self.tail.wrapping_sub(1)))
        }
    }

    /// Provides a reference to the back element without checking if the deque is empty.
    ///
    /// On an empty deque this returns a stale element.
    #[inline]
    pub fn peek_back_unchecked(&self) -> &T {
        self.slot(self.tail.wrapping_sub(1))
    }

    /// Removes up to `n` elements from the front in *O(1)*.
    ///
    /// The removed elements are left in the buffer until they get overwritten. If they own
    /// resources, prefer [`drop_front_zero`]. A negative `n` does nothing.
    ///
    /// [`drop_front_zero`]: Deque::drop_front_zero
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2, 3, 4]);
    /// deque.drop_front(3);
    /// assert_eq!(deque, [4]);
    /// deque.drop_front(5);
    /// assert!(deque.is_empty());
    /// ```
    pub fn drop_front(&mut self, n: isize) {
        if let Ok(n) = usize::try_from(n) {
            self.head = self.head.wrapping_add(cmp::min(n, self.len()));
        }
    }

    /// Removes up to `n` elements from the back in *O(1)*.
    ///
    /// See [`drop_front`] for details.
    ///
    /// [`drop_front`]: Deque::drop_front
    pub fn drop_back(&mut self, n: isize) {
        if let Ok(n) = usize::try_from(n) {
            self.tail = self.tail.wrapping_sub(cmp::min(n, self.len()));
        }
    }

    /// Empties the deque in *O(1)* and keeps its capacity.
    ///
    /// The elements are not dropped until they get overwritten. If they own resources, prefer
    /// [`clear_eager`].
    ///
    /// [`clear_eager`]: Deque::clear_eager
    pub fn clear_lazy(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([0, 1]);
    /// assert!(deque.contains(&1));
    /// assert!(!deque.contains(&4));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns `true` if the deque contains an element satisfying `pred`.
    pub fn contains_by<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let (a, b) = self.as_slices();
        a.iter().any(&mut pred) || b.iter().any(pred)
    }

    /// Returns the index of the first element equal to `x`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([2, 3, 3]);
    /// deque.push_front(1);
    /// assert_eq!(deque.index_of(&3), Some(2));
    /// assert_eq!(deque.index_of(&7), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_by(|el| el == x)
    }

    /// Returns the index of the first element satisfying `pred`, or `None` if there is none.
    pub fn index_of_by<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let (a, b) = self.as_slices();
        match a.iter().position(&mut pred) {
            Some(i) => Some(i),
            None => b.iter().position(pred).map(|i| i + a.len()),
        }
    }

    /// Returns the minimum element. If several elements are equally minimum, the first one is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([3, 1, 2]);
    /// assert_eq!(deque.min(), &1);
    /// ```
    pub fn min(&self) -> &T
    where
        T: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns the element that gives the minimum value with respect to `compare`. If several
    /// elements are equally minimum, the first one is returned.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn min_by<F>(&self, mut compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (a, b) = self.as_slices();
        // the first run is never empty in a non-empty deque
        let min = match a.iter().min_by(|x, y| compare(*x, *y)) {
            Some(min) => min,
            None => empty_deque("min"),
        };
        match b.iter().min_by(|x, y| compare(*x, *y)) {
            Some(other) if compare(other, min) == Ordering::Less => other,
            _ => min,
        }
    }

    /// Returns the maximum element. If several elements are equally maximum, the last one is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([3, 1, 2]);
    /// assert_eq!(deque.max(), &3);
    /// ```
    pub fn max(&self) -> &T
    where
        T: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the element that gives the maximum value with respect to `compare`. If several
    /// elements are equally maximum, the last one is returned.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn max_by<F>(&self, mut compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (a, b) = self.as_slices();
        let max = match a.iter().max_by(|x, y| compare(*x, *y)) {
            Some(max) => max,
            None => empty_deque("max"),
        };
        match b.iter().max_by(|x, y| compare(*x, *y)) {
            Some(other) if compare(other, max) != Ordering::Less => other,
            _ => max,
        }
    }

    /// Returns `true` if both deques have the same length and `eq` returns `true` for every pair
    /// of elements at the same index.
    ///
    /// The deques do not need to have the same capacity or the same wrap point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let a = Deque::from([1, 2, 3]);
    /// let b = Deque::from(["1", "2", "3"]);
    /// assert!(a.eq_by(&b, |x, y| x.to_string() == *y));
    /// ```
    pub fn eq_by<U, F>(&self, other: &Deque<U>, mut eq: F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            slice_eq_by(sa, oa, &mut eq) && slice_eq_by(sb, ob, &mut eq)
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);

            slice_eq_by(sa, oa_front, &mut eq)
                && slice_eq_by(sb_mid, oa_mid, &mut eq)
                && slice_eq_by(sb_back, ob, &mut eq)
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);

            slice_eq_by(sa_front, oa, &mut eq)
                && slice_eq_by(sa_mid, ob_mid, &mut eq)
                && slice_eq_by(sb, ob_back, &mut eq)
        }
    }

    /// Calls `visitor` on every element in order until it returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([1, 2, 3, 4]);
    /// let mut seen = Vec::new();
    /// deque.for_each(|&x| {
    ///     seen.push(x);
    ///     x < 2
    /// });
    /// assert_eq!(seen, [1, 2]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T) -> bool,
    {
        let (a, b) = self.as_slices();
        for el in a.iter().chain(b) {
            if !visitor(el) {
                return;
            }
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// The iterator borrows the deque, so the deque cannot be modified while iterating. Cloning
    /// the iterator restarts from its current position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2]);
    /// deque.push_front(0);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
    /// assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), [2, 1, 0]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        front.iter().chain(back.iter())
    }

    /// Returns a front-to-back iterator over `(index, element)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from(['a', 'b']);
    /// assert_eq!(deque.iter_indexed().collect::<Vec<_>>(), [(0, &'a'), (1, &'b')]);
    /// ```
    pub fn iter_indexed(&self) -> Enumerate<Iter<'_, T>> {
        self.iter().enumerate()
    }

    /// Returns a front-to-back iterator that returns mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        front.iter_mut().chain(back.iter_mut())
    }

    /// Creates an iterator that covers the specified range in the deque.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if the end point is greater
    /// than the length of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.range(1..3).copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let (front, back) = self.range_slices(simplify_range(range, self.len()));
        front.iter().chain(back.iter())
    }

    fn range_slices(&self, range: Range<usize>) -> (&[T], &[T]) {
        let Range { start, end } = range;
        let (front, back) = self.as_slices();
        let front_len = front.len();

        if start >= front_len {
            (&back[start - front_len..end - front_len], &[])
        } else if end <= front_len {
            (&front[start..end], &[])
        } else {
            (&front[start..], &back[..end - front_len])
        }
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buf.len() - 1
    }

    /// The slot a counter position maps to.
    #[inline]
    fn slot(&self, pos: usize) -> &T {
        let idx = pos & self.mask();
        // SAFETY: idx is masked with buf.len() - 1 and buf.len() is a power of two, so idx < buf.len()
        unsafe { self.buf.get_unchecked(idx) }
    }

    #[inline]
    fn slot_mut(&mut self, pos: usize) -> &mut T {
        let idx = pos & self.mask();
        // SAFETY: idx is masked with buf.len() - 1 and buf.len() is a power of two, so idx < buf.len()
        unsafe { self.buf.get_unchecked_mut(idx) }
    }

    #[inline]
    fn check_bounds(&self, index: usize) {
        let len = self.len();
        if index >= len {
            index_out_of_bounds(index, len);
        }
    }
}

impl<T: Default> Deque<T> {
    /// Creates an empty deque with a capacity of [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::Deque;
    ///
    /// let deque: Deque<i32> = Deque::new();
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        Self::with_exact_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with space for at least `capacity` elements.
    ///
    /// The capacity is rounded up to the next power of two, a capacity of 0 becomes 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCapacity`] if `capacity` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Deque, Error};
    ///
    /// let deque: Deque<i32> = Deque::with_capacity(10).unwrap();
    /// assert_eq!(deque.capacity(), 16);
    ///
    /// assert_eq!(Deque::<i32>::with_capacity(-1).unwrap_err(), Error::NegativeCapacity);
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self, Error> {
        let capacity = usize::try_from(capacity).map_err(|_| Error::NegativeCapacity)?;
        Ok(Self::with_exact_capacity(ceil_pow2(capacity)))
    }

    /// `capacity` must be a power of two.
    fn with_exact_capacity(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Deque { buf: alloc_buf(capacity), head: 0, tail: 0 }
    }

    /// Reallocates the buffer so it can hold at least `min_capacity` elements.
    ///
    /// `min_capacity` is rounded up to the next power of two. The buffer may shrink as long as
    /// all elements still fit.
    ///
    /// # Errors
    ///
    /// * [`Error::NegativeCapacity`] if `min_capacity` is negative.
    /// * [`Error::SameCapacity`] if the rounded capacity equals the current one.
    /// * [`Error::NotEnoughCapacity`] if the rounded capacity cannot hold all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Deque, Error};
    ///
    /// let mut deque = Deque::from([1, 2, 3]);
    /// assert_eq!(deque.resize(9), Ok(()));
    /// assert_eq!(deque.capacity(), 16);
    /// assert_eq!(deque.resize(16), Err(Error::SameCapacity));
    /// assert_eq!(deque.resize(2), Err(Error::NotEnoughCapacity));
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn resize(&mut self, min_capacity: isize) -> Result<(), Error> {
        let min_capacity = usize::try_from(min_capacity).map_err(|_| Error::NegativeCapacity)?;
        self.realloc(ceil_pow2(min_capacity))
    }

    /// Makes sure at least `additional` more elements can be pushed without reallocating.
    ///
    /// Unlike [`resize`] it is not an error if the capacity is already sufficient.
    ///
    /// [`resize`]: Deque::resize
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCapacity`] if `additional` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2, 3, 4]);
    /// deque.reserve(10).unwrap();
    /// assert_eq!(deque.capacity(), 16);
    /// deque.reserve(1).unwrap();
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    pub fn reserve(&mut self, additional: isize) -> Result<(), Error> {
        let additional = usize::try_from(additional).map_err(|_| Error::NegativeCapacity)?;
        let needed = self.needed_capacity(additional);
        if needed <= self.capacity() {
            trace!("reserve({}) needs no reallocation, capacity is {}", additional, self.capacity());
            return Ok(());
        }
        self.realloc(ceil_pow2(needed))
    }

    /// Shrinks the buffer to the smallest power of two that holds all elements and returns the
    /// resulting capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back_many([1, 2, 3]);
    /// assert_eq!(deque.capacity(), 16);
    /// assert_eq!(deque.shrink(), 4);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn shrink(&mut self) -> usize {
        // SameCapacity just means there is nothing to do
        let _ = self.realloc(ceil_pow2(self.len()));
        self.capacity()
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.push_back(3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow(1);
        }
        let tail = self.tail;
        *self.slot_mut(tail) = value;
        self.tail = tail.wrapping_add(1);
    }

    /// Appends all elements of `values` to the back of the deque, in order. The last element
    /// becomes the new back.
    ///
    /// Reallocates at most once, so it is cheaper than pushing the elements one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1]);
    /// deque.push_back_many([2, 3, 4]);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    pub fn push_back_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let n = values.len();
        self.grow(n);
        for value in values.take(n) {
            let tail = self.tail;
            *self.slot_mut(tail) = value;
            self.tail = tail.wrapping_add(1);
        }
    }

    /// Prepends an element to the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_front(3);
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.is_full() {
            self.grow(1);
        }
        self.head = self.head.wrapping_sub(1);
        let head = self.head;
        *self.slot_mut(head) = value;
    }

    /// Prepends all elements of `values` to the front of the deque, one after the other. The last
    /// element becomes the new front.
    ///
    /// Reallocates at most once, so it is cheaper than pushing the elements one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([4]);
    /// deque.push_front_many([3, 2, 1]);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    pub fn push_front_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let n = values.len();
        self.grow(n);
        for value in values.take(n) {
            self.head = self.head.wrapping_sub(1);
            let head = self.head;
            *self.slot_mut(head) = value;
        }
    }

    /// Removes the first element and returns it, or `None` if the deque is empty. The vacated slot
    /// is reset to `T::default()`.
    ///
    /// This is how a deque of resource owning elements should be used as a FIFO queue.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([String::from("a"), String::from("b")]);
    /// assert_eq!(deque.pop_front_zero().as_deref(), Some("a"));
    /// assert_eq!(deque.pop_front_zero().as_deref(), Some("b"));
    /// assert_eq!(deque.pop_front_zero(), None);
    /// ```
    pub fn pop_front_zero(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_front_zero_unchecked())
        }
    }

    /// Removes the first element and returns it without checking if the deque is empty. The
    /// vacated slot is reset to `T::default()`.
    ///
    /// Calling this on an empty deque returns a stale element and leaves the deque in a corrupt
    /// state: its length wraps around and all further results are meaningless.
    pub fn pop_front_zero_unchecked(&mut self) -> T {
        let head = self.head;
        self.head = head.wrapping_add(1);
        mem::take(self.slot_mut(head))
    }

    /// Removes the first element and returns it, or `None` if the deque is empty. If the deque is
    /// afterwards at most 25% full, it is shrunk to at most 50%.
    ///
    /// Calling this only once after popping many elements avoids repeated reallocations.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back_many(0..5);
    /// assert_eq!(deque.pop_front_shrink(), Some(0));
    /// assert_eq!(deque.capacity(), 8);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    pub fn pop_front_shrink(&mut self) -> Option<T> {
        let value = self.pop_front_zero();
        self.shrink_if_sparse();
        value
    }

    /// Removes the last element and returns it, or `None` if the deque is empty. The vacated slot
    /// is reset to `T::default()`.
    ///
    /// This is how a deque of resource owning elements should be used as a LIFO stack.
    pub fn pop_back_zero(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_back_zero_unchecked())
        }
    }

    /// Removes the last element and returns it without checking if the deque is empty. The
    /// vacated slot is reset to `T::default()`.
    ///
    /// See [`pop_front_zero_unchecked`] for what happens on an empty deque.
    ///
    /// [`pop_front_zero_unchecked`]: Deque::pop_front_zero_unchecked
    pub fn pop_back_zero_unchecked(&mut self) -> T {
        self.tail = self.tail.wrapping_sub(1);
        let tail = self.tail;
        mem::take(self.slot_mut(tail))
    }

    /// Removes the last element and returns it, or `None` if the deque is empty. If the deque is
    /// afterwards at most 25% full, it is shrunk to at most 50%.
    pub fn pop_back_shrink(&mut self) -> Option<T> {
        let value = self.pop_back_zero();
        self.shrink_if_sparse();
        value
    }

    /// Removes up to `n` elements from the front in *O(n)*, resetting every vacated slot to
    /// `T::default()`. A negative `n` does nothing.
    pub fn drop_front_zero(&mut self, n: isize) {
        if let Ok(n) = usize::try_from(n) {
            let n = cmp::min(n, self.len());
            for _ in 0..n {
                let head = self.head;
                *self.slot_mut(head) = T::default();
                self.head = head.wrapping_add(1);
            }
        }
    }

    /// Removes up to `n` elements from the back in *O(n)*, resetting every vacated slot to
    /// `T::default()`. A negative `n` does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2, 3, 4]);
    /// deque.drop_back_zero(2);
    /// assert_eq!(deque, [1, 2]);
    /// deque.drop_back_zero(-1);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn drop_back_zero(&mut self, n: isize) {
        if let Ok(n) = usize::try_from(n) {
            let n = cmp::min(n, self.len());
            for _ in 0..n {
                self.tail = self.tail.wrapping_sub(1);
                let tail = self.tail;
                *self.slot_mut(tail) = T::default();
            }
        }
    }

    /// Empties the deque in *O(n)*, resetting every vacated slot to `T::default()`. The capacity
    /// is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2, 3]);
    /// deque.clear_eager();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    pub fn clear_eager(&mut self) {
        let (front, back) = self.as_mut_slices();
        front.iter_mut().chain(back).for_each(|el| *el = T::default());
        self.head = 0;
        self.tail = 0;
    }

    /// Length after pushing `additional` more elements.
    fn needed_capacity(&self, additional: usize) -> usize {
        match self.len().checked_add(additional) {
            Some(needed) => needed,
            None => pow2::capacity_overflow(),
        }
    }

    /// Makes room for `additional` more elements with at most one reallocation.
    #[inline]
    fn grow(&mut self, additional: usize) {
        let needed = self.needed_capacity(additional);
        if needed > self.capacity() {
            self.grow_to(needed);
        }
    }

    #[inline(never)]
    fn grow_to(&mut self, needed: usize) {
        // the new capacity is larger than the current one and >= len, so this cannot fail
        let _ = self.realloc(ceil_pow2(needed));
        debug_assert!(self.capacity() >= needed);
    }

    fn shrink_if_sparse(&mut self) {
        let len = self.len();
        if len <= self.capacity() >> 2 {
            let old_cap = self.capacity();
            if self.realloc(ceil_pow2(len << 1)).is_ok() {
                trace!("shrunk sparse deque from {} to {}", old_cap, self.capacity());
            }
        }
    }

    /// Moves all elements into a fresh buffer of `new_cap` slots, starting at slot 0.
    ///
    /// This is the only place where `head` and `tail` are reset.
    fn realloc(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap.is_power_of_two());
        let old_cap = self.capacity();
        if new_cap == old_cap {
            return Err(Error::SameCapacity);
        }
        let len = self.len();
        if len > new_cap {
            return Err(Error::NotEnoughCapacity);
        }

        let mut buf = alloc_buf(new_cap);
        let (front, back) = self.as_mut_slices();
        for (dst, src) in buf.iter_mut().zip(front.iter_mut().chain(back)) {
            *dst = mem::take(src);
        }
        self.buf = buf;
        self.head = 0;
        self.tail = len;
        debug!("reallocated deque from {} to {} slots, len {}", old_cap, new_cap, len);
        Ok(())
    }
}

impl<T: Clone> Deque<T> {
    /// Removes the first element and returns it, or `None` if the deque is empty.
    ///
    /// The vacated slot keeps a copy of the element until it gets overwritten. If `T` owns
    /// resources, prefer [`pop_front_zero`].
    ///
    /// [`pop_front_zero`]: Deque::pop_front_zero
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_front_unchecked())
        }
    }

    /// Removes the first element and returns it without checking if the deque is empty.
    ///
    /// See [`pop_front_zero_unchecked`] for what happens on an empty deque.
    ///
    /// [`pop_front_zero_unchecked`]: Deque::pop_front_zero_unchecked
    pub fn pop_front_unchecked(&mut self) -> T {
        let value = self.peek_front_unchecked().clone();
        self.head = self.head.wrapping_add(1);
        value
    }

    /// Removes the last element and returns it, or `None` if the deque is empty.
    ///
    /// The vacated slot keeps a copy of the element until it gets overwritten. If `T` owns
    /// resources, prefer [`pop_back_zero`].
    ///
    /// [`pop_back_zero`]: Deque::pop_back_zero
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([1, 2]);
    /// assert_eq!(deque.pop_back(), Some(2));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_back_unchecked())
        }
    }

    /// Removes the last element and returns it without checking if the deque is empty.
    pub fn pop_back_unchecked(&mut self) -> T {
        let value = self.peek_back_unchecked().clone();
        self.tail = self.tail.wrapping_sub(1);
        value
    }

    /// Clones elements starting at index `start` into `dst` until either `dst` is full or the
    /// deque has no more elements. Returns the number of cloned elements.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than the length of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([1, 2, 3, 4]);
    /// let mut buf = [0; 3];
    /// assert_eq!(deque.copy_to_slice(2, &mut buf), 2);
    /// assert_eq!(buf, [3, 4, 0]);
    /// ```
    pub fn copy_to_slice(&self, start: usize, dst: &mut [T]) -> usize {
        let len = self.len();
        if start > len {
            panic!("deque: copy start {} out of bounds with length {}", start, len);
        }
        let end = cmp::min(len, start.saturating_add(dst.len()));
        let (a, b) = self.range_slices(start..end);
        let (dst_a, rest) = dst.split_at_mut(a.len());
        dst_a.clone_from_slice(a);
        rest[..b.len()].clone_from_slice(b);
        a.len() + b.len()
    }

    /// Returns a newly allocated `Vec` with all elements of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let mut deque = Deque::from([2, 3]);
    /// deque.push_front(1);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        let (a, b) = self.as_slices();
        let mut vec = Vec::with_capacity(a.len() + b.len());
        vec.extend_from_slice(a);
        vec.extend_from_slice(b);
        vec
    }

    /// Returns a newly allocated `Vec` with the elements in `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.to_vec_range(1, 3), vec![2, 3]);
    /// ```
    pub fn to_vec_range(&self, start: usize, end: usize) -> Vec<T> {
        self.to_vec_range_with_capacity(start, end, end.saturating_sub(start))
    }

    /// Returns a newly allocated `Vec` with the elements in `start..end` and room for at least
    /// `capacity` elements in total, for callers that want to push more elements afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`, `end > len` or `capacity < end - start`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from([1, 2, 3, 4]);
    /// let vec = deque.to_vec_range_with_capacity(0, 2, 10);
    /// assert_eq!(vec, [1, 2]);
    /// assert!(vec.capacity() >= 10);
    /// ```
    pub fn to_vec_range_with_capacity(&self, start: usize, end: usize, capacity: usize) -> Vec<T> {
        let range = simplify_range(start..end, self.len());
        if capacity < range.len() {
            panic!("capacity {} should be >= range length {}", capacity, range.len());
        }
        let (a, b) = self.range_slices(range);
        let mut vec = Vec::with_capacity(capacity);
        vec.extend_from_slice(a);
        vec.extend_from_slice(b);
        vec
    }
}

impl<T: Clone + Default> Deque<T> {
    /// Creates a deque holding clones of all elements of `slice`, in order. The capacity is the
    /// length of the slice rounded up to a power of two. No memory is shared with the slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::Deque;
    /// let deque = Deque::from_slice(&[1, 2, 3, 4, 5]);
    /// assert_eq!(deque, [1, 2, 3, 4, 5]);
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn from_slice(slice: &[T]) -> Self {
        let mut deque = Self::with_exact_capacity(ceil_pow2(slice.len()));
        deque.push_back_many(slice.iter().cloned());
        deque
    }
}

/// Returns the length of a possibly absent deque, `0` for `None`.
pub fn len_of<T>(deque: Option<&Deque<T>>) -> usize {
    deque.map_or(0, Deque::len)
}

/// Returns an iterator over a possibly absent deque. An absent deque yields no elements.
///
/// # Examples
///
/// ```
/// use ringdeque::{iter_of, Deque};
///
/// assert_eq!(iter_of::<i32>(None).count(), 0);
/// let deque = Deque::from([1, 2]);
/// assert_eq!(iter_of(Some(&deque)).count(), 2);
/// ```
pub fn iter_of<T>(deque: Option<&Deque<T>>) -> Iter<'_, T> {
    match deque {
        Some(deque) => deque.iter(),
        None => {
            let empty: &[T] = Default::default();
            empty.iter().chain(empty.iter())
        }
    }
}

/// Returns whether two possibly absent deques are equal.
///
/// Two absent deques are equal, but an absent deque is never equal to a present one, not even an
/// empty one.
///
/// # Examples
///
/// ```
/// use ringdeque::{equal, Deque};
///
/// let empty: Deque<i32> = Deque::new();
/// assert!(equal::<i32>(None, None));
/// assert!(!equal(Some(&empty), None));
/// assert!(equal(Some(&empty), Some(&Deque::new())));
/// ```
pub fn equal<T: PartialEq>(a: Option<&Deque<T>>, b: Option<&Deque<T>>) -> bool {
    equal_by(a, b, |x, y| x == y)
}

/// Like [`equal`] but compares elements with `eq`.
pub fn equal_by<T, U, F>(a: Option<&Deque<T>>, b: Option<&Deque<U>>, eq: F) -> bool
where
    F: FnMut(&T, &U) -> bool,
{
    match (a, b) {
        (Some(a), Some(b)) => a.eq_by(b, eq),
        (None, None) => true,
        _ => false,
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        Deque { buf: self.buf.clone(), head: self.head, tail: self.tail }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: Default> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.grow(lower);
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: 'a + Copy + Default> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Default> From<Vec<T>> for Deque<T> {
    fn from(other: Vec<T>) -> Self {
        let mut deque = Self::with_exact_capacity(ceil_pow2(other.len()));
        deque.push_back_many(other);
        deque
    }
}

impl<T: Default> From<Deque<T>> for Vec<T> {
    fn from(other: Deque<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T: Default, const N: usize> From<[T; N]> for Deque<T> {
    fn from(arr: [T; N]) -> Self {
        let mut deque = Self::with_exact_capacity(ceil_pow2(N));
        deque.push_back_many(arr);
        deque
    }
}

impl<T: Default> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut deque = Self::with_exact_capacity(ceil_pow2(lower));
        deque.extend(iter);
        deque
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T: Default> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_by(other, |a, b| a == b)
    }
}

impl<T: Eq> Eq for Deque<T> {}

__impl_slice_eq! { [] Deque<T>, Vec<U>, }
__impl_slice_eq! { [] Deque<T>, &[U], }
__impl_slice_eq! { [] Deque<T>, &mut [U], }
__impl_slice_eq! { [const N: usize] Deque<T>, [U; N], }
__impl_slice_eq! { [const N: usize] Deque<T>, &[U; N], }
__impl_slice_eq! { [const N: usize] Deque<T>, &mut [U; N], }

fn alloc_buf<T: Default>(capacity: usize) -> Box<[T]> {
    repeat_with(T::default).take(capacity).collect()
}

fn slice_eq_by<T, U, F>(a: &[T], b: &[U], eq: &mut F) -> bool
where
    F: FnMut(&T, &U) -> bool,
{
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y))
}

#[cold]
#[inline(never)]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("deque: index {} out of bounds with length {}", index, len);
}

#[cold]
#[inline(never)]
fn empty_deque(op: &str) -> ! {
    panic!("deque: {} of empty deque", op);
}

fn simplify_range(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    // we later check for start > end so ignore here if start > len
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1).expect("range start Bound::Excluded(usize::MAX) is > usize::MAX"),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => len,
        Bound::Excluded(&i) if i <= len => i,
        Bound::Included(&i) if i < len => i + 1,
        bound => panic!("range end {:?} should be <= length {}", bound, len),
    };
    if start > end {
        panic!(
            "range start {:?} should be <= range end {:?}",
            range.start_bound(),
            range.end_bound()
        );
    }
    start..end
}
