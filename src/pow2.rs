/// Returns the smallest power of two greater than or equal to `x`.
///
/// Zero maps to one, a deque never has zero capacity.
///
/// # Panics
///
/// Panics if the result does not fit in a `usize`.
///
/// # Examples
///
/// ```
/// use ringdeque::ceil_pow2;
///
/// assert_eq!(ceil_pow2(0), 1);
/// assert_eq!(ceil_pow2(1), 1);
/// assert_eq!(ceil_pow2(5), 8);
/// assert_eq!(ceil_pow2(16), 16);
/// ```
#[inline]
pub fn ceil_pow2(x: usize) -> usize {
    if x <= 1 {
        return 1;
    }
    // bit length of x - 1, so exact powers of two map to themselves
    let shift = usize::BITS - (x - 1).leading_zeros();
    if shift >= usize::BITS {
        capacity_overflow();
    }
    1 << shift
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
