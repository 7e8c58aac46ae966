//! Splitting lists into fixed-size pages.

/// Splits `items` into pages of at most `size` items, preserving order.
///
/// The last page may be shorter. An empty slice gives no pages, and so does a
/// page size of 0.
///
/// # Examples
///
/// ```
/// use botkit_utils::utils::paginate::paginate;
///
/// let pages = paginate(&[1, 2, 3, 4], 3);
/// assert_eq!(pages, vec![vec![1, 2, 3], vec![4]]);
/// assert!(paginate::<u8>(&[], 3).is_empty());
/// ```
pub fn paginate<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Borrows page `index` (zero-based) without copying the items.
pub fn page<T>(items: &[T], size: usize, index: usize) -> Option<&[T]> {
    if size == 0 {
        return None;
    }
    items.chunks(size).nth(index)
}

/// Number of pages `len` items fill at `size` items per page.
pub fn page_count(len: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        len.div_ceil(size)
    }
}
