//! Fixed-capacity sequence.
//!
//! [`FixedArray`] backs the decision variables, objectives, and constraint
//! values of a [`Solution`](super::Solution). Its length is set at
//! construction and every write is bounds-checked, so a solution can never
//! silently grow or shrink away from its problem's declared shape.

use crate::error::{MoeaError, Result};
use std::fmt;
use std::ops::{Index, Range};

/// A sequence whose length never changes after construction.
///
/// Reads through [`Index`] panic on out-of-range access like a slice does;
/// writes go through [`set`](Self::set) and [`assign`](Self::assign), which
/// return [`MoeaError::IndexOutOfRange`] instead.
///
/// # Example
///
/// ```
/// use u_moea::model::FixedArray;
///
/// let mut values = FixedArray::new(4, 0.0);
/// values.assign(0..2, &[1.0, 2.0]).unwrap(); // element-wise
/// values.assign(2..4, &[9.0]).unwrap();      // broadcast
/// assert_eq!(values.as_slice(), &[1.0, 2.0, 9.0, 9.0]);
/// assert!(values.set(4, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedArray<T> {
    data: Vec<T>,
}

impl<T: Clone> FixedArray<T> {
    /// Creates an array of `len` copies of `default`.
    pub fn new(len: usize, default: T) -> Self {
        Self {
            data: vec![default; len],
        }
    }

    /// Writes `value` at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MoeaError::IndexOutOfRange { index, len }),
        }
    }

    /// Assigns `values` to the positions in `range`.
    ///
    /// - `values.len() == range.len()`: element-wise copy.
    /// - `values.len() == 1`: the single value is broadcast over the range.
    /// - anything else: [`MoeaError::DimensionMismatch`].
    pub fn assign(&mut self, range: Range<usize>, values: &[T]) -> Result<()> {
        let len = self.data.len();
        if range.start > range.end || range.end > len {
            return Err(MoeaError::IndexOutOfRange {
                index: range.end.max(range.start),
                len,
            });
        }

        let target = &mut self.data[range.clone()];
        if values.len() == target.len() {
            target.clone_from_slice(values);
        } else if values.len() == 1 {
            target.fill(values[0].clone());
        } else {
            return Err(MoeaError::DimensionMismatch {
                what: "elements",
                expected: range.len(),
                actual: values.len(),
            });
        }
        Ok(())
    }

    /// Replaces the whole content with `values`, which must have exactly the
    /// array's length.
    pub fn copy_from(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.data.len() {
            return Err(MoeaError::DimensionMismatch {
                what: "elements",
                expected: self.data.len(),
                actual: values.len(),
            });
        }
        self.data.clone_from_slice(values);
        Ok(())
    }

    /// Sets every position to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> FixedArray<T> {
    /// Wraps an existing vector; its length becomes the fixed length.
    pub(crate) fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has zero slots.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the value at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Borrows the content as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrows the content as a mutable slice. The length stays fixed.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Index<usize> for FixedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> AsRef<[T]> for FixedArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
