//! Fixed-length column storage.
//!
//! A [`ColumnBuffer`] is sized once, before any token is parsed, to the number
//! of rows in the column. Collectors write into it by row index; each index
//! must be written exactly once before [`ColumnBuffer::finish`] hands the
//! values to consumers. The buffer never grows or shrinks.
//!
//! For parallel collection the buffer can be [partitioned](ColumnBuffer::partition)
//! into disjoint [`ColumnSlice`]s, one per worker. Slices keep absolute row
//! numbering, so a worker writes row `n` regardless of where its range starts.
//!
//! ## Examples
//!
//! ```rust
//! use column_collect::{ColumnBuffer, TriState};
//!
//! let mut column = ColumnBuffer::with_rows(2);
//! column.set(1, TriState::False).unwrap();
//! assert!(!column.is_complete());
//!
//! column.set(0, TriState::True).unwrap();
//! assert_eq!(column.finish().unwrap(), vec![TriState::True, TriState::False]);
//! ```

use crate::{Error, Result};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::ops::Range;

/// Anything a collector can write row values into.
pub trait ColumnTarget<T> {
    /// Absolute row indices this target accepts.
    fn rows(&self) -> Range<usize>;

    /// Stores `value` at absolute row `row`.
    ///
    /// # Errors
    ///
    /// [`Error::RowOutOfBounds`] if `row` is outside [`rows`](Self::rows),
    /// [`Error::DuplicateWrite`] if the row already holds a value.
    fn write(&mut self, row: usize, value: T) -> Result<()>;
}

impl<V, T: ColumnTarget<V> + ?Sized> ColumnTarget<V> for &mut T {
    fn rows(&self) -> Range<usize> {
        (**self).rows()
    }

    fn write(&mut self, row: usize, value: V) -> Result<()> {
        (**self).write(row, value)
    }
}

/// Pre-sized, write-once storage for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBuffer<T> {
    values: Vec<T>,
    written: Vec<bool>,
}

impl<T: Copy + Default> ColumnBuffer<T> {
    /// Creates a column of `rows` unwritten slots.
    #[must_use]
    pub fn with_rows(rows: usize) -> Self {
        ColumnBuffer {
            values: vec![T::default(); rows],
            written: vec![false; rows],
        }
    }
}

impl<T> ColumnBuffer<T> {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes `value` at `row`.
    ///
    /// # Errors
    ///
    /// Fails if `row` is out of range or was already written.
    pub fn set(&mut self, row: usize, value: T) -> Result<()> {
        store(&mut self.values, &mut self.written, 0, row, value)
    }

    /// Returns the value at `row` if it has been written.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&T> {
        match self.written.get(row) {
            Some(true) => self.values.get(row),
            _ => None,
        }
    }

    /// Number of rows written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written.iter().filter(|&&w| w).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.written.iter().all(|&w| w)
    }

    /// Splits the column into disjoint slices of at most `chunk_rows` rows.
    ///
    /// A `chunk_rows` of zero is treated as one.
    pub fn partition(&mut self, chunk_rows: usize) -> Vec<ColumnSlice<'_, T>> {
        let chunk_rows = chunk_rows.max(1);
        self.values
            .chunks_mut(chunk_rows)
            .zip(self.written.chunks_mut(chunk_rows))
            .enumerate()
            .map(|(i, (values, written))| ColumnSlice {
                offset: i * chunk_rows,
                values,
                written,
            })
            .collect()
    }

    /// Consumes the column and returns its values in row order.
    ///
    /// # Errors
    ///
    /// [`Error::IncompleteColumn`] if any row was never written.
    pub fn finish(self) -> Result<Vec<T>> {
        if let Some(first_unwritten) = self.written.iter().position(|&w| !w) {
            return Err(Error::incomplete_column(
                first_unwritten,
                self.written(),
                self.len(),
            ));
        }
        tracing::debug!(rows = self.values.len(), "column complete");
        Ok(self.values)
    }
}

impl<T> ColumnTarget<T> for ColumnBuffer<T> {
    fn rows(&self) -> Range<usize> {
        0..self.values.len()
    }

    fn write(&mut self, row: usize, value: T) -> Result<()> {
        self.set(row, value)
    }
}

/// Unwritten rows serialize as `null`.
impl<T: Serialize> Serialize for ColumnBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for (value, &written) in self.values.iter().zip(&self.written) {
            if written {
                seq.serialize_element(&Some(value))?;
            } else {
                seq.serialize_element(&None::<&T>)?;
            }
        }
        seq.end()
    }
}

/// A disjoint, mutable row range of a [`ColumnBuffer`].
///
/// Rows are addressed by their absolute index in the parent column.
#[derive(Debug)]
pub struct ColumnSlice<'b, T> {
    offset: usize,
    values: &'b mut [T],
    written: &'b mut [bool],
}

impl<T> ColumnSlice<'_, T> {
    /// Absolute index of the first row in this slice.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes `value` at absolute row `row`.
    ///
    /// # Errors
    ///
    /// Fails if `row` lies outside this slice or was already written.
    pub fn set(&mut self, row: usize, value: T) -> Result<()> {
        store(self.values, self.written, self.offset, row, value)
    }
}

impl<T> ColumnTarget<T> for ColumnSlice<'_, T> {
    fn rows(&self) -> Range<usize> {
        self.offset..self.offset + self.values.len()
    }

    fn write(&mut self, row: usize, value: T) -> Result<()> {
        self.set(row, value)
    }
}

fn store<T>(
    values: &mut [T],
    written: &mut [bool],
    offset: usize,
    row: usize,
    value: T,
) -> Result<()> {
    let index = match row.checked_sub(offset) {
        Some(index) if index < values.len() => index,
        _ => return Err(Error::row_out_of_bounds(row, offset + values.len())),
    };
    if written[index] {
        return Err(Error::duplicate_write(row));
    }
    values[index] = value;
    written[index] = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriState;

    #[test]
    fn test_out_of_bounds() {
        let mut column = ColumnBuffer::<TriState>::with_rows(3);
        assert_eq!(
            column.set(3, TriState::True),
            Err(Error::RowOutOfBounds { row: 3, rows: 3 })
        );
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn test_duplicate_write() {
        let mut column = ColumnBuffer::with_rows(1);
        column.set(0, TriState::True).unwrap();
        assert_eq!(
            column.set(0, TriState::False),
            Err(Error::DuplicateWrite { row: 0 })
        );
        assert_eq!(column.get(0), Some(&TriState::True));
    }

    #[test]
    fn test_finish_incomplete() {
        let mut column = ColumnBuffer::with_rows(4);
        column.set(0, TriState::True).unwrap();
        column.set(1, TriState::Missing).unwrap();
        column.set(3, TriState::False).unwrap();

        let err = column.finish().unwrap_err();
        assert_eq!(
            err,
            Error::IncompleteColumn {
                first_unwritten: 2,
                written: 3,
                rows: 4
            }
        );
    }

    #[test]
    fn test_empty_column_finishes() {
        let column = ColumnBuffer::<TriState>::with_rows(0);
        assert!(column.is_empty());
        assert!(column.is_complete());
        assert_eq!(column.finish().unwrap(), Vec::<TriState>::new());
    }

    #[test]
    fn test_written_missing_differs_from_unwritten() {
        let mut column = ColumnBuffer::with_rows(2);
        column.set(0, TriState::Missing).unwrap();
        assert_eq!(column.get(0), Some(&TriState::Missing));
        assert_eq!(column.get(1), None);
        assert_eq!(column.written(), 1);
    }

    #[test]
    fn test_partition_uses_absolute_rows() {
        let mut column = ColumnBuffer::with_rows(5);
        {
            let mut slices = column.partition(2);
            assert_eq!(slices.len(), 3);
            assert_eq!(slices[1].rows(), 2..4);
            assert_eq!(slices[2].len(), 1);

            slices[1].set(3, TriState::True).unwrap();
            assert_eq!(
                slices[1].set(4, TriState::True),
                Err(Error::RowOutOfBounds { row: 4, rows: 4 })
            );
            assert!(slices[2].set(1, TriState::True).is_err());
        }
        assert_eq!(column.get(3), Some(&TriState::True));
        assert_eq!(column.written(), 1);
    }

    #[test]
    fn test_partition_zero_chunk() {
        let mut column = ColumnBuffer::<TriState>::with_rows(2);
        assert_eq!(column.partition(0).len(), 2);
    }

    #[test]
    fn test_serialize_unwritten_as_null() {
        let mut column = ColumnBuffer::with_rows(3);
        column.set(0, TriState::True).unwrap();
        column.set(2, TriState::Missing).unwrap();
        assert_eq!(serde_json::to_string(&column).unwrap(), "[true,null,null]");
    }
}
