//! ArrayedList: an owning, index-addressed sequence with shifting insert.
//!
//! Storage grows by amortized doubling, so no capacity constant is needed.
//! A list may still be built with a hard `limit`; inserting past it is a
//! precondition violation, the same as inserting past the end.

use core::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("list is full: limit of {limit} elements reached")]
    LimitReached { limit: usize },
}

/// A refused insert: why it failed, plus the element handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    pub error: SequenceError,
    pub element: T,
}

impl<T> Rejected<T> {
    pub fn into_element(self) -> T {
        self.element
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayedList<T> {
    elements: Vec<T>,
    limit: Option<usize>,
}

impl<T> ArrayedList<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            limit: None,
        }
    }

    /// Unbounded list with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            limit: None,
        }
    }

    /// List that never holds more than `limit` elements.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            elements: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    /// Replace the element at `index`, handing the previous one back.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, SequenceError> {
        let len = self.len();
        match self.elements.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, element)),
            None => Err(SequenceError::OutOfRange { index, len }),
        }
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// On error the list is unchanged and the element comes back in `Rejected`.
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), Rejected<T>> {
        let len = self.len();
        let error = match self.limit {
            _ if index > len => SequenceError::OutOfRange { index, len },
            Some(limit) if len >= limit => SequenceError::LimitReached { limit },
            _ => {
                self.elements.insert(index, element);
                return Ok(());
            }
        };
        Err(Rejected { error, element })
    }

    /// Insert `element` at `index`.
    ///
    /// Panics if `index > len` or the list is at its limit.
    #[track_caller]
    pub fn insert(&mut self, index: usize, element: T) {
        if let Err(rejected) = self.try_insert(index, element) {
            panic!("ArrayedList::insert: {}", rejected.error);
        }
    }

    /// Append at the end. Panics if the list is at its limit.
    #[track_caller]
    pub fn push(&mut self, element: T) {
        self.insert(self.len(), element);
    }

    /// Drop every element. Allocated storage and the limit are kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T> Default for ArrayedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ArrayedList<T> {
    type Output = T;
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.elements.get(index) {
            Some(e) => e,
            None => panic!(
                "ArrayedList index {index} out of range for length {}",
                self.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for ArrayedList<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.elements.get_mut(index) {
            Some(e) => e,
            None => panic!("ArrayedList index {index} out of range for length {len}"),
        }
    }
}

impl<T> Extend<T> for ArrayedList<T> {
    /// Appends each item; panics if a limit is hit part way through.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for ArrayedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
            limit: None,
        }
    }
}

impl<T> IntoIterator for ArrayedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayedList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayedList<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}
