//! Assorted helpers shared by the problem modules.

/// Index of the first element of `sorted` that is `>= value`
/// (`sorted.len()` if there is none).
///
/// `sorted` must be ascending; patience sorting keeps its tails array that way.
#[inline]
pub fn lower_bound<T: Ord>(sorted: &[T], value: &T) -> usize {
    let (mut lo, mut hi) = (0usize, sorted.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if sorted[mid] < *value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Whether `needle` appears in `haystack` in order (not necessarily contiguous).
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|x| rest.any(|y| y == x))
}
