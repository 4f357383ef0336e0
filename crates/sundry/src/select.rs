//! Positional slicing from either end of a sequence.
//!
//! Counts larger than the sequence clamp to its length; they never panic.

/// Returns the first element, or `None` if the sequence is empty.
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `min(n, len)` elements.
///
/// # Example
///
/// ```
/// use sundry::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), [1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 0), [] as [i32; 0]);
/// assert_eq!(first_n(&[1, 2, 3], 10), [1, 2, 3]);
/// ```
pub fn first_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[..n.min(sequence.len())]
}

/// Returns the last element, or `None` if the sequence is empty.
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the final `n` elements in their original order, or the whole
/// sequence when `n` exceeds its length.
pub fn last_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_without_count() {
        assert_eq!(first(&[7, 8]), Some(&7));
        assert_eq!(first::<i32>(&[]), None);
    }

    #[test]
    fn first_n_clamps() {
        let s = [1, 2, 3];
        assert!(first_n(&s, 0).is_empty());
        assert_eq!(first_n(&s, 1), [1]);
        assert_eq!(first_n(&s, 3), s);
        assert_eq!(first_n(&s, 99), s);
        assert!(first_n::<i32>(&[], 2).is_empty());
    }

    #[test]
    fn last_without_count() {
        assert_eq!(last(&[7, 8]), Some(&8));
        assert_eq!(last::<i32>(&[]), None);
    }

    #[test]
    fn last_n_variants() {
        let s = [1, 2, 3, 4];
        assert!(last_n(&s, 0).is_empty());
        assert_eq!(last_n(&s, 2), [3, 4]);
        assert_eq!(last_n(&s, 4), s);
        assert_eq!(last_n(&s, 5), s);
    }
}
