//! # dynamic_array
//!
//! `dynamic_array` implements a growable, index-addressable sequence container
//! that keeps its elements in one contiguous block of storage.
//!
//! ## Features
//! - Ordered sequence with checked, index based element access.
//! - Amortized constant-time appends: storage starts at [`DEFAULT_CAPACITY`] slots
//!   and doubles whenever it runs out.
//! - Capacity never shrinks implicitly, not even on [`DynamicArray::clear`].
//! - Bounds failures are reported as [`Error`] values instead of panics.
//!
//! ## Example
//! ```rust
//! use dynamic_array::{DynamicArray, Error};
//!
//! let mut array = DynamicArray::from([1, 2, 3]);
//! array.push(4);
//! array.insert(0, 0).unwrap();
//!
//! assert_eq!(array.to_string(), "[0, 1, 2, 3, 4]");
//! assert_eq!(array.capacity(), 16);
//!
//! assert_eq!(array.remove(4), Ok(4));
//! assert_eq!(array.get(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
//! ```

mod buffer;
mod error;
mod growth;

pub use error::{Error, Result};
pub use growth::DEFAULT_CAPACITY;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::buffer::Buffer;
use crate::growth::grown_capacity;

/// Creates a [`DynamicArray`] containing the given values, in order.
///
/// # Example
/// ```rust
/// use dynamic_array::{DynamicArray, dynamic_array};
///
/// let empty: DynamicArray<i32> = dynamic_array![];
/// assert_eq!(empty.to_string(), "[]");
///
/// let array = dynamic_array![5, 4];
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.to_string(), "[5, 4]");
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($value),+])
    };
}

/// A growable sequence of elements stored contiguously.
///
/// Elements occupy positions `[0, len)` in the order they were added or inserted.
/// The backing storage holds `capacity` slots, `len <= capacity` always holds, and
/// capacity only ever grows.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the array.
///
/// # Example
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push("Peter");
/// array.push("Maria");
///
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(0), Ok(&"Peter"));
/// assert_eq!(array.to_string(), "[Peter, Maria]");
/// ```
pub struct DynamicArray<T> {
    buffer: Buffer<T>,
}

impl<T, const M: usize> From<[T; M]> for DynamicArray<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        let (lower_bound, _) = iter.size_hint();
        self.reserve(lower_bound);

        iter.for_each(|value| self.push(value));
    }
}

impl<'a, T> Extend<&'a T> for DynamicArray<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty `DynamicArray` with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let array: DynamicArray<i64> = DynamicArray::new();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(growth::DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `DynamicArray` with room for at least `capacity` elements.
    ///
    /// The capacity is never smaller than [`DEFAULT_CAPACITY`].
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let small: DynamicArray<u8> = DynamicArray::with_capacity(4);
    /// assert_eq!(small.capacity(), 16);
    ///
    /// let large: DynamicArray<u8> = DynamicArray::with_capacity(100);
    /// assert_eq!(large.capacity(), 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Buffer::with_capacity(capacity.max(growth::DEFAULT_CAPACITY)),
        }
    }

    /// Returns the number of elements currently stored in the `DynamicArray`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let array = DynamicArray::from([5, 4]);
    ///
    /// assert_eq!(array.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Checks if the `DynamicArray` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots currently allocated.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// assert_eq!(array.capacity(), 16);
    ///
    /// array.extend(0..17);
    /// assert_eq!(array.capacity(), 32);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let array = DynamicArray::from(["Peter", "Maria"]);
    ///
    /// assert_eq!(array.get(1), Ok(&"Maria"));
    /// assert_eq!(array.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.buffer.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.buffer.as_mut_slice()[index])
    }

    /// Overwrites the element at `index`, returning the value it replaced.
    ///
    /// Length and capacity are left unchanged.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`; the array is not modified.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from(["Peter", "Maria"]);
    ///
    /// assert_eq!(array.set(0, "Anna"), Ok("Peter"));
    /// assert_eq!(array.to_string(), "[Anna, Maria]");
    /// assert!(array.set(2, "Ivan").is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Appends an element to the end of the `DynamicArray`.
    ///
    /// When the storage is full it is grown first; existing elements keep their
    /// values and order.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// array.push(9);
    ///
    /// assert_eq!(array.len(), 1);
    /// assert_eq!(array.to_string(), "[9]");
    /// ```
    pub fn push(&mut self, value: T) {
        self.reserve(1);
        self.buffer.push(value);
    }

    /// Clones and appends every element of `values`, preserving their order.
    ///
    /// Storage is grown at most once for the whole batch.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// array.extend_from_slice(&[6, 7, 8]);
    ///
    /// assert_eq!(array.to_string(), "[6, 7, 8]");
    /// assert_eq!(array.capacity(), 16);
    /// ```
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.extend(values);
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// `index == len` appends at the end.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index > len`; the array is not modified
    /// and `value` is dropped.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3, 4, 5]);
    /// array.insert(0, 0).unwrap();
    /// array.insert(6, 6).unwrap();
    ///
    /// assert_eq!(array.to_string(), "[0, 1, 2, 3, 4, 5, 6]");
    /// assert!(array.insert(8, 8).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        self.reserve(1);
        self.buffer.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Capacity is left unchanged.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(array.remove(4), Ok(5));
    /// assert_eq!(array.to_string(), "[1, 2, 3, 4]");
    /// assert!(array.remove(4).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.buffer.remove(index))
    }

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either index is `>= len`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3, 4, 5]);
    /// array.swap_at(2, 1).unwrap();
    ///
    /// assert_eq!(array.to_string(), "[1, 3, 2, 4, 5]");
    /// ```
    pub fn swap_at(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.buffer.as_mut_slice().swap(a, b);
        Ok(())
    }

    /// Removes all elements. Capacity is retained.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = (0..100).collect();
    /// let capacity = array.capacity();
    ///
    /// array.clear();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), capacity);
    /// assert_eq!(array.to_string(), "[]");
    /// ```
    pub fn clear(&mut self) {
        log::trace!(
            "clearing {} elements, keeping {} slots",
            self.len(),
            self.capacity()
        );
        self.buffer.clear();
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// Capacity grows geometrically, so repeated calls stay amortized constant
    /// time. It never shrinks.
    ///
    /// # Panics
    /// Panics if `len + additional` overflows `usize`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1]);
    /// array.reserve(40);
    ///
    /// assert!(array.capacity() >= 41);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let Some(required) = self.len().checked_add(additional) else {
            panic!("capacity overflow");
        };

        if required <= self.capacity() {
            return;
        }

        let new_capacity = grown_capacity(self.capacity(), required);
        log::trace!(
            "growing storage from {} to {} slots",
            self.capacity(),
            new_capacity
        );
        self.buffer.grow_to(new_capacity);
    }

    /// Returns the elements as a slice, in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Returns the elements as a mutable slice, in order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(())
    }
}

impl<T> DynamicArray<T>
where
    T: PartialEq,
{
    /// Swaps the first element equal to `a` with the first element equal to `b`.
    ///
    /// Both values are located by an equality scan from the front, so with
    /// duplicates only the first occurrences move. Exchanging a value with an
    /// equal one is a no-op.
    ///
    /// # Errors
    /// Returns [`Error::ValueNotFound`] if either value is absent; the array is
    /// not modified.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let mut array = DynamicArray::from([1, 2, 3, 4, 5]);
    /// array.exchange(&2, &1).unwrap();
    ///
    /// assert_eq!(array.to_string(), "[2, 1, 3, 4, 5]");
    /// assert_eq!(array.exchange(&1, &9), Err(Error::ValueNotFound));
    /// ```
    pub fn exchange(&mut self, a: &T, b: &T) -> Result<()> {
        let position_of = |value: &T| {
            self.as_slice()
                .iter()
                .position(|element| element == value)
                .ok_or(Error::ValueNotFound)
        };

        let (a, b) = (position_of(a)?, position_of(b)?);
        self.buffer.as_mut_slice().swap(a, b);
        Ok(())
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut this = Self::with_capacity(self.capacity());
        this.extend(self.as_slice());
        this
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq<&[T]> for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T> PartialEq<[T]> for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for DynamicArray<T> where T: Eq {}

impl<T> PartialOrd for DynamicArray<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for DynamicArray<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for DynamicArray<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> fmt::Debug for DynamicArray<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Renders the elements as `[a, b, c]`; an empty array renders as `[]`.
impl<T> fmt::Display for DynamicArray<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (index, value) in self.as_slice().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{value}")?;
        }

        f.write_str("]")
    }
}
