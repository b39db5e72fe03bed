//! Order-preserving splice operations on column task lists.
//!
//! Both operations are pure: inputs are borrowed, fresh vectors are
//! returned, and out-of-range indices fail with
//! [`BoardDomainError::InvalidIndex`] instead of being clamped.

use super::{BoardDomainError, BoardResult};

/// Moves the element at `from_index` so that it ends up at `to_index`.
///
/// `to_index` is an insertion index into the sequence *after* the element has
/// been removed, so the element is found at `to_index` in the result. Both
/// indices must be below `sequence.len()`.
///
/// # Examples
///
/// ```
/// use kanban_core::board::domain::reorder_within_column;
///
/// let reordered = reorder_within_column(&["a", "b", "c"], 0, 2)?;
/// assert_eq!(reordered, vec!["b", "c", "a"]);
/// # Ok::<(), kanban_core::board::domain::BoardDomainError>(())
/// ```
///
/// # Errors
///
/// Returns [`BoardDomainError::InvalidIndex`] when either index is out of
/// range.
pub fn reorder_within_column<T: Clone>(
    sequence: &[T],
    from_index: usize,
    to_index: usize,
) -> BoardResult<Vec<T>> {
    let len = sequence.len();
    for index in [from_index, to_index] {
        if index >= len {
            return Err(BoardDomainError::InvalidIndex { index, len });
        }
    }

    let mut reordered = sequence.to_vec();
    let moved = reordered.remove(from_index);
    reordered.insert(to_index, moved);
    Ok(reordered)
}

/// Moves the element at `source_index` of `source` into `destination` at
/// `destination_index`.
///
/// `destination_index` indexes the unmodified destination, so any value up
/// to and including `destination.len()` is accepted. Returns the new source
/// and destination sequences, in that order. Callers own any bookkeeping on
/// the moved element itself.
///
/// # Errors
///
/// Returns [`BoardDomainError::InvalidIndex`] when `source_index` is not a
/// position in `source` or `destination_index` exceeds `destination.len()`.
pub fn move_between_columns<T: Clone>(
    source: &[T],
    destination: &[T],
    source_index: usize,
    destination_index: usize,
) -> BoardResult<(Vec<T>, Vec<T>)> {
    if source_index >= source.len() {
        return Err(BoardDomainError::InvalidIndex {
            index: source_index,
            len: source.len(),
        });
    }
    if destination_index > destination.len() {
        return Err(BoardDomainError::InvalidIndex {
            index: destination_index,
            len: destination.len(),
        });
    }

    let mut new_source = source.to_vec();
    let mut new_destination = destination.to_vec();
    let moved = new_source.remove(source_index);
    new_destination.insert(destination_index, moved);
    Ok((new_source, new_destination))
}
