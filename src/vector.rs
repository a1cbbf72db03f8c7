//! A contiguous growable array type with positional editing operations.
//!
//! [`Vector`] layers a set of positional mutators over [`alloc::vec::Vec`]:
//! ranges can be cut out, runs of default values expanded in, whole vectors
//! spliced in, and elements pushed or popped at either end. Storage growth
//! is left entirely to the underlying `Vec`.
//!
//! Every operation that takes an index or range comes in two flavors: a
//! panicking one (e.g. [`delete`](Vector::delete)), and a checked one
//! prefixed with `try_` that returns [`Error::IndexOutOfRange`] instead
//! (e.g. [`try_delete`](Vector::try_delete)).
//!
//! Shifting operations ([`insert`](Vector::insert), [`delete`](Vector::delete),
//! [`cut`](Vector::cut), [`push_front`](Vector::push_front), ...) take time
//! linear in the number of elements moved. [`push`](Vector::push),
//! [`pop_back`](Vector::pop_back) and
//! [`delete_no_preserve_order`](Vector::delete_no_preserve_order) are O(1)
//! (amortized, for `push`).

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Range, RangeBounds};

use log::trace;

use crate::range::checked_range;
use crate::{Error, Result};

#[cold]
#[inline(never)]
#[track_caller]
fn removal_failed(index: usize, len: usize) -> ! {
    panic!("removal index (is {}) should be < len (is {})", index, len);
}

#[cold]
#[inline(never)]
#[track_caller]
fn insertion_failed(index: usize, len: usize) -> ! {
    panic!("insertion index (is {}) should be <= len (is {})", index, len);
}

/// A contiguous growable array of elements of type `T`.
///
/// See the [module-level documentation](crate::vector) for more.
pub struct Vector<T> {
    buf: Vec<T>,
}

impl<T> Vector<T> {
    /// Constructs a new, empty `Vector`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    /// ```
    /// let vec = vectors::Vector::<i32>::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Vector { buf: Vec::new() }
    }

    /// Constructs a new, empty `Vector` with room for at least `capacity`
    /// elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Consumes the vector, returning its underlying storage.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.buf
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements in the vector, also referred to as its *length*.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Extracts a mutable slice of the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Returns a reference to the element at the specified index, or [`None`]
    /// if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let vec = vectors::Vector::from([1, 2, 3]);
    /// assert_eq!(vec.get(1), Some(&2));
    /// assert_eq!(vec.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Returns a mutable reference to the element at the specified index, or
    /// [`None`] if the index is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Returns a reference to the element at the specified index.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.buf.get(index).ok_or(Error::out_of_range(index, len))
    }

    /// Appends all `elements` to the back of the vector, in order.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2]);
    /// vec.put([3, 4, 5]);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn put<It: IntoIterator<Item = T>>(&mut self, elements: It) {
        self.buf.extend(elements);
    }

    /// Prepends all `elements` to the front of the vector.
    ///
    /// The new elements keep their order and precede the existing contents,
    /// which keep theirs.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([4, 5]);
    /// vec.put_front([1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn put_front<It: IntoIterator<Item = T>>(&mut self, elements: It) {
        drop(self.buf.splice(0..0, elements));
    }

    /// Appends an element to the back of the vector.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.buf.push(element);
    }

    /// Prepends an element to the front of the vector, shifting all
    /// elements to the right.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([2, 3]);
    /// vec.push_front(1);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, element: T) {
        self.buf.insert(0, element);
    }

    /// Removes the first element from the vector and returns it, or [`None`]
    /// if it is empty. The remaining elements shift to the left.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 3]);
    /// assert_eq!(vec.pop_front(), Some(1));
    /// assert_eq!(vec, [2, 3]);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        Some(self.buf.remove(0))
    }

    /// Removes the first element from the vector and returns it.
    ///
    /// Returns [`Error::IndexOutOfRange`] if the vector is empty.
    pub fn try_pop_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(Error::out_of_range(0, 0))
    }

    /// Removes the last element from the vector and returns it, or [`None`]
    /// if it is empty.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 3]);
    /// assert_eq!(vec.pop_back(), Some(3));
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Removes the last element from the vector and returns it.
    ///
    /// Returns [`Error::IndexOutOfRange`] if the vector is empty.
    #[inline]
    pub fn try_pop_back(&mut self) -> Result<T> {
        self.buf.pop().ok_or(Error::out_of_range(0, 0))
    }

    /// Removes the elements in the half-open range `start..end`, shifting
    /// all elements after it to the left. The removed elements are dropped.
    ///
    /// # Panics
    /// Panics if `start > end`, or if `end > len()`. See
    /// [`try_cut`](Vector::try_cut) for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 3, 4, 5]);
    /// vec.cut(1, 3);
    /// assert_eq!(vec, [1, 4, 5]);
    /// ```
    #[track_caller]
    pub fn cut(&mut self, start: usize, end: usize) {
        self.cut_range(start..end);
    }

    /// Removes the elements in the half-open range `start..end`, shifting
    /// all elements after it to the left.
    ///
    /// Returns [`Error::IndexOutOfRange`] and leaves the vector untouched if
    /// `start > end` or `end > len()`.
    pub fn try_cut(&mut self, start: usize, end: usize) -> Result<()> {
        self.try_cut_range(start..end)
    }

    /// Removes the elements in `range`, shifting all elements after it to
    /// the left.
    ///
    /// # Panics
    /// Panics if the starting point is greater than the end point or if the
    /// end point is greater than the length of the vector.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 3, 4, 5]);
    /// vec.cut_range(3..);
    /// assert_eq!(vec, [1, 2, 3]);
    /// vec.cut_range(..=0);
    /// assert_eq!(vec, [2, 3]);
    /// ```
    #[track_caller]
    pub fn cut_range<R: RangeBounds<usize>>(&mut self, range: R) {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(err: Error) -> ! {
            panic!("cut range is invalid: {}", err);
        }

        if let Err(err) = self.try_cut_range(range) {
            assert_failed(err);
        }
    }

    /// Removes the elements in `range`, shifting all elements after it to
    /// the left.
    ///
    /// Returns [`Error::IndexOutOfRange`] naming the offending bound if the
    /// range is reversed or extends past the end of the vector.
    pub fn try_cut_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<()> {
        let Range { start, end } = checked_range(range, self.len())?;
        drop(self.buf.drain(start..end));
        Ok(())
    }

    /// Removes the element at position `index`, shifting all elements after
    /// it to the left. The element is dropped.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_delete`](Vector::try_delete)
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 3]);
    /// vec.delete(0);
    /// assert_eq!(vec, [2, 3]);
    /// ```
    #[track_caller]
    pub fn delete(&mut self, index: usize) {
        self.pop_out(index);
    }

    /// Removes the element at position `index`, shifting all elements after
    /// it to the left.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn try_delete(&mut self, index: usize) -> Result<()> {
        self.try_pop_out(index).map(drop)
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_pop_out`](Vector::try_pop_out)
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from(['a', 'b', 'c']);
    /// assert_eq!(vec.pop_out(1), 'b');
    /// assert_eq!(vec, ['a', 'c']);
    /// ```
    #[track_caller]
    pub fn pop_out(&mut self, index: usize) -> T {
        let len = self.len();
        if index >= len {
            removal_failed(index, len);
        }

        self.buf.remove(index)
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn try_pop_out(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }

        Ok(self.buf.remove(index))
    }

    /// Removes an element from the vector and returns it.
    ///
    /// The removed element is replaced by the last element of the vector. This
    /// does not preserve ordering, but it is O(1).
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 3, 4]);
    /// assert_eq!(vec.delete_no_preserve_order(1), 2);
    /// assert_eq!(vec, [1, 4, 3]);
    /// ```
    #[track_caller]
    pub fn delete_no_preserve_order(&mut self, index: usize) -> T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!(
                "swap_remove index (is {}) should be < len (is {})",
                index, len
            );
        }

        let len = self.len();
        if index >= len {
            assert_failed(index, len);
        }

        self.buf.swap_remove(index)
    }

    /// Removes an element from the vector and returns it, replacing it with
    /// the last element.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn try_delete_no_preserve_order(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }

        Ok(self.buf.swap_remove(index))
    }

    /// Inserts an element at position `offset` within the vector, shifting
    /// all elements after it to the right.
    ///
    /// # Panics
    /// Panics if `offset > len()`. See [`try_insert`](Vector::try_insert)
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 3]);
    /// vec.insert(1, 2);
    /// vec.insert(3, 4);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, offset: usize, element: T) {
        let len = self.len();
        if offset > len {
            insertion_failed(offset, len);
        }

        self.buf.insert(offset, element);
    }

    /// Inserts an element at position `offset` within the vector, shifting
    /// all elements after it to the right.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `offset > len()`; the element
    /// is dropped in that case.
    pub fn try_insert(&mut self, offset: usize, element: T) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(Error::out_of_range(offset, len));
        }

        self.buf.insert(offset, element);
        Ok(())
    }

    /// Moves all elements of `other` into this vector at position `offset`,
    /// shifting all elements after it to the right.
    ///
    /// # Panics
    /// Panics if `offset > len()`. See [`try_insert_vector`](Vector::try_insert_vector)
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// use vectors::Vector;
    /// let mut vec = Vector::from([1, 5]);
    /// vec.insert_vector(1, Vector::from([2, 3, 4]));
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    #[track_caller]
    pub fn insert_vector(&mut self, offset: usize, other: Vector<T>) {
        let len = self.len();
        if offset > len {
            insertion_failed(offset, len);
        }

        drop(self.buf.splice(offset..offset, other.buf));
    }

    /// Moves all elements of `other` into this vector at position `offset`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `offset > len()`.
    pub fn try_insert_vector(&mut self, offset: usize, other: Vector<T>) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(Error::out_of_range(offset, len));
        }

        drop(self.buf.splice(offset..offset, other.buf));
        Ok(())
    }

    /// Places an element at position `index` within the vector, returning the
    /// element previously stored there.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_modify`](Vector::try_modify)
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 3]);
    /// assert_eq!(vec.modify(1, 4), 2);
    /// assert_eq!(vec, [1, 4, 3]);
    /// ```
    #[track_caller]
    pub fn modify(&mut self, index: usize, element: T) -> T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!(
                "replacement index (is {}) should be < len (is {})",
                index, len
            );
        }

        let len = self.len();
        match self.buf.get_mut(index) {
            Some(slot) => core::mem::replace(slot, element),
            None => assert_failed(index, len),
        }
    }

    /// Places an element at position `index` within the vector, returning the
    /// element previously stored there.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn try_modify(&mut self, index: usize, element: T) -> Result<T> {
        let len = self.len();
        let slot = self
            .buf
            .get_mut(index)
            .ok_or(Error::out_of_range(index, len))?;
        Ok(core::mem::replace(slot, element))
    }

    /// Shortens the vector, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than the vector's current length, this has no effect.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Clears the vector, dropping all values.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let before = self.capacity();
        self.buf.reserve(additional);
        if self.capacity() != before {
            trace!(
                "vector storage grew from {} to {} slots",
                before,
                self.capacity()
            );
        }
    }

    /// Shrinks the capacity of the vector as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }
}

impl<T: Default> Vector<T> {
    /// Inserts `count` default values at position `offset`, shifting all
    /// elements after it to the right.
    ///
    /// # Panics
    /// Panics if `offset > len()`. See [`try_expand`](Vector::try_expand)
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2]);
    /// vec.expand(1, 3);
    /// assert_eq!(vec, [1, 0, 0, 0, 2]);
    /// ```
    #[track_caller]
    pub fn expand(&mut self, offset: usize, count: usize) {
        let len = self.len();
        if offset > len {
            insertion_failed(offset, len);
        }

        self.expand_unchecked(offset, count);
    }

    /// Inserts `count` default values at position `offset`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `offset > len()`.
    pub fn try_expand(&mut self, offset: usize, count: usize) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(Error::out_of_range(offset, len));
        }

        self.expand_unchecked(offset, count);
        Ok(())
    }

    fn expand_unchecked(&mut self, offset: usize, count: usize) {
        self.reserve(count);
        let zeroes = iter::repeat_with(T::default).take(count);
        drop(self.buf.splice(offset..offset, zeroes));
    }

    /// Appends `count` default values to the back of the vector.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([true]);
    /// vec.extend_default(2);
    /// assert_eq!(vec, [true, false, false]);
    /// ```
    pub fn extend_default(&mut self, count: usize) {
        self.reserve(count);
        let new_len = self.len() + count;
        self.buf.resize_with(new_len, T::default);
    }
}

impl<T: Clone> Vector<T> {
    /// Returns an independent copy of the vector.
    ///
    /// The copy has the same length and at least the same capacity. Elements
    /// are duplicated with [`Clone`], so reference-like elements are shared.
    ///
    /// # Examples
    /// ```
    /// let vec = vectors::Vector::from([1, 2, 3]);
    /// let mut copy = vec.copy();
    /// copy.push(4);
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(copy, [1, 2, 3, 4]);
    /// ```
    pub fn copy(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity());
        buf.extend_from_slice(&self.buf);
        Vector { buf }
    }

    /// Copies all elements of `src` into this vector at position `offset`,
    /// shifting all elements after it to the right.
    ///
    /// # Panics
    /// Panics if `offset > len()`. See [`try_insert_slice`](Vector::try_insert_slice)
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = vectors::Vector::from([1, 2, 5, 6]);
    /// vec.insert_slice(2, &[3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
    /// ```
    #[track_caller]
    pub fn insert_slice(&mut self, offset: usize, src: &[T]) {
        let len = self.len();
        if offset > len {
            insertion_failed(offset, len);
        }

        drop(self.buf.splice(offset..offset, src.iter().cloned()));
    }

    /// Copies all elements of `src` into this vector at position `offset`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `offset > len()`.
    pub fn try_insert_slice(&mut self, offset: usize, src: &[T]) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(Error::out_of_range(offset, len));
        }

        drop(self.buf.splice(offset..offset, src.iter().cloned()));
        Ok(())
    }
}

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.copy()
    }

    fn clone_from(&mut self, source: &Self) {
        self.buf.clone_from(&source.buf);
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(buf: Vec<T>) -> Self {
        Vector { buf }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(vec: Vector<T>) -> Self {
        vec.buf
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(source: [T; N]) -> Self {
        Vector {
            buf: Vec::from(source),
        }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(source: &[T]) -> Self {
        Vector {
            buf: source.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Vector {
            buf: Vec::from_iter(iter),
        }
    }
}

impl<T> core::ops::Deref for Vector<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        &self.buf
    }
}

impl<T> core::ops::DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_failed(index: usize, len: usize) -> ! {
    panic!("index (is {}) should be < len (is {})", index, len);
}

impl<T> core::ops::Index<usize> for Vector<T> {
    type Output = T;
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.buf.get(index) {
            Some(element) => element,
            None => index_failed(index, self.len()),
        }
    }
}

impl<T> core::ops::IndexMut<usize> for Vector<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        match self.buf.get_mut(index) {
            Some(element) => element,
            None => index_failed(index, len),
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: Hash> Hash for Vector<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<A: PartialEq<B>, B> PartialEq<Vector<B>> for Vector<A> {
    #[inline]
    fn eq(&self, other: &Vector<B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<A: PartialEq<B>, B> PartialEq<[B]> for Vector<A> {
    #[inline]
    fn eq(&self, other: &[B]) -> bool {
        self.as_slice() == other
    }
}

impl<A: PartialEq<B>, B> PartialEq<&[B]> for Vector<A> {
    #[inline]
    fn eq(&self, other: &&[B]) -> bool {
        self.as_slice() == *other
    }
}

impl<A: PartialEq<B>, B, const N: usize> PartialEq<[B; N]> for Vector<A> {
    #[inline]
    fn eq(&self, other: &[B; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<A: PartialEq<B>, B, const N: usize> PartialEq<&[B; N]> for Vector<A> {
    #[inline]
    fn eq(&self, other: &&[B; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::DropCounter;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rustc_hash::FxHasher;
    use std::collections::HashMap;
    use std::hash::BuildHasherDefault;

    type FxHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;

    #[test]
    fn push_get_delete_push_front_cut() {
        let mut vec = Vector::<i64>::new();
        vec.push(1);
        vec.push(2);
        vec.push(3);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.get(1), Some(&2));

        vec.delete(0);
        assert_eq!(vec, [2, 3]);
        assert_eq!(vec.len(), 2);

        vec.push_front(9);
        assert_eq!(vec, [9, 2, 3]);

        vec.cut(1, 2);
        assert_eq!(vec, [9, 3]);
    }

    #[test]
    fn new_vector_is_empty_without_capacity() {
        let vec = Vector::<std::string::String>::new();
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 0);
        assert_eq!(vec.try_get(0), Err(Error::out_of_range(0, 0)));
    }

    #[test]
    fn pushes_are_read_back_in_order() {
        for n in [0usize, 1, 7, 64, 1000] {
            let mut vec = Vector::new();
            for k in 0..n {
                vec.push(k * 3);
            }
            assert_eq!(vec.len(), n);
            for k in 0..n {
                assert_eq!(vec.try_get(k), Ok(&(k * 3)));
            }
            assert!(vec.capacity() >= vec.len());
        }
    }

    #[test]
    fn push_then_pop_back_round_trips() {
        let mut vec = Vector::from([1, 2, 3]);
        vec.push(4);
        assert_eq!(vec.pop_back(), Some(4));
        assert_eq!(vec.len(), 3);
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn pop_front_then_push_front_restores_sequence() {
        let mut vec = Vector::from(['x', 'y', 'z']);
        let front = vec.pop_front().unwrap();
        assert_eq!(vec, ['y', 'z']);
        vec.push_front(front);
        assert_eq!(vec, ['x', 'y', 'z']);
    }

    #[test]
    fn popping_empty_vector_fails() {
        let mut vec = Vector::<u8>::new();
        assert_eq!(vec.pop_front(), None);
        assert_eq!(vec.pop_back(), None);
        assert_eq!(vec.try_pop_front(), Err(Error::out_of_range(0, 0)));
        assert_eq!(vec.try_pop_back(), Err(Error::out_of_range(0, 0)));
    }

    #[test]
    fn put_front_splices_in_argument_order() {
        let mut vec = Vector::from([3, 4]);
        vec.put_front([1, 2]);
        assert_eq!(vec, [1, 2, 3, 4]);

        let mut empty = Vector::new();
        empty.put_front([5, 6]);
        assert_eq!(empty, [5, 6]);

        empty.put_front(core::iter::empty());
        assert_eq!(empty, [5, 6]);
    }

    #[test]
    fn copy_is_independent_of_original() {
        let mut vec = Vector::with_capacity(16);
        vec.put([10, 20, 30]);

        let mut copy = vec.copy();
        assert_eq!(copy, vec);
        assert!(copy.capacity() >= vec.capacity());

        copy.modify(0, 11);
        copy.push(40);
        copy.delete(1);
        assert_eq!(vec, [10, 20, 30]);
        assert_eq!(copy, [11, 30, 40]);

        let mut cloned = Vector::new();
        cloned.clone_from(&vec);
        assert_eq!(cloned, vec);
    }

    #[test]
    fn cut_removes_exactly_the_range() {
        let mut vec: Vector<u32> = (0..10).collect();
        vec.cut(2, 5);
        assert_eq!(vec.len(), 7);
        assert_eq!(vec, [0, 1, 5, 6, 7, 8, 9]);

        vec.cut(0, 0);
        vec.cut(7, 7);
        assert_eq!(vec.len(), 7);

        vec.cut(0, 7);
        assert!(vec.is_empty());
    }

    #[test]
    fn invalid_cuts_leave_vector_untouched() {
        let mut vec = Vector::from([1, 2, 3]);
        assert_eq!(vec.try_cut(2, 1), Err(Error::out_of_range(2, 3)));
        assert_eq!(vec.try_cut(1, 4), Err(Error::out_of_range(4, 3)));
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "cut range is invalid")]
    fn cut_panics_past_the_end() {
        let mut vec = Vector::from([1, 2, 3]);
        vec.cut(0, 4);
    }

    #[test]
    fn removed_elements_are_dropped_once() {
        let drop_count = DropCounter::new();
        let mut vec = Vector::new();
        for i in 0..8 {
            vec.push(drop_count.new_droppable(i));
        }

        vec.cut(2, 5);
        assert_eq!(drop_count.dropped(), 3);

        vec.delete(0);
        assert_eq!(drop_count.dropped(), 4);

        let popped = vec.pop_out(0);
        assert_eq!(popped.value, 1);
        assert_eq!(drop_count.dropped(), 4);
        drop(popped);
        assert_eq!(drop_count.dropped(), 5);

        let old = vec.modify(0, drop_count.new_droppable(100));
        assert_eq!(old.value, 5);
        drop(old);
        assert_eq!(drop_count.dropped(), 6);

        assert_eq!(vec.len(), 3);
        drop(vec);
        assert_eq!(drop_count.dropped(), 9);
    }

    #[test]
    fn delete_preserves_order() {
        let mut vec = Vector::from([1, 2, 3, 4, 5]);
        vec.delete(2);
        assert_eq!(vec, [1, 2, 4, 5]);
        vec.delete(3);
        assert_eq!(vec, [1, 2, 4]);
        assert_eq!(vec.try_delete(3), Err(Error::out_of_range(3, 3)));
    }

    #[test]
    fn delete_no_preserve_order_moves_last_into_hole() {
        let mut vec = Vector::from([1, 2, 3, 4]);
        assert_eq!(vec.delete_no_preserve_order(0), 1);
        assert_eq!(vec, [4, 2, 3]);
        assert_eq!(vec.delete_no_preserve_order(2), 3);
        assert_eq!(vec, [4, 2]);
        assert_eq!(
            vec.try_delete_no_preserve_order(2),
            Err(Error::out_of_range(2, 2))
        );
    }

    #[test]
    fn expand_inserts_default_values() {
        let mut vec = Vector::from([1u8, 2, 3]);
        vec.expand(0, 2);
        assert_eq!(vec, [0, 0, 1, 2, 3]);
        vec.expand(5, 1);
        assert_eq!(vec, [0, 0, 1, 2, 3, 0]);
        vec.expand(3, 0);
        assert_eq!(vec.len(), 6);
        assert_eq!(vec.try_expand(7, 1), Err(Error::out_of_range(7, 6)));

        let mut names = Vector::from([std::string::String::from("a")]);
        names.extend_default(2);
        assert_eq!(names, ["a", "", ""]);
    }

    #[test]
    fn insert_shifts_right() {
        let mut vec = Vector::from([1, 2, 3]);
        vec.insert(0, 0);
        vec.insert(4, 4);
        vec.insert(2, 9);
        assert_eq!(vec, [0, 1, 9, 2, 3, 4]);
        assert_eq!(vec.try_insert(7, 5), Err(Error::out_of_range(7, 6)));
    }

    #[test]
    #[should_panic(expected = "insertion index (is 4) should be <= len (is 3)")]
    fn insert_panics_past_the_end() {
        let mut vec = Vector::from([1, 2, 3]);
        vec.insert(4, 0);
    }

    #[test]
    fn insert_vector_splices_everything() {
        let mut vec = Vector::from(["a", "e"]);
        vec.insert_vector(1, Vector::from(["b", "c", "d"]));
        assert_eq!(vec, ["a", "b", "c", "d", "e"]);
        vec.insert_vector(5, Vector::new());
        assert_eq!(vec.len(), 5);

        let other = Vector::from(["z"]);
        assert_eq!(
            vec.try_insert_vector(6, other),
            Err(Error::out_of_range(6, 5))
        );

        vec.insert_slice(0, &["0"]);
        assert_eq!(vec[0], "0");
    }

    #[test]
    fn modify_and_pop_out_are_bounds_checked() {
        let mut vec = Vector::from([1, 2, 3]);
        assert_eq!(vec.try_modify(3, 0), Err(Error::out_of_range(3, 3)));
        assert_eq!(vec.try_pop_out(3), Err(Error::out_of_range(3, 3)));
        assert_eq!(vec.try_modify(2, 7), Ok(3));
        assert_eq!(vec.try_pop_out(0), Ok(1));
        assert_eq!(vec, [2, 7]);
    }

    #[test]
    #[should_panic(expected = "removal index (is 3) should be < len (is 3)")]
    fn pop_out_panics_out_of_bounds() {
        let mut vec = Vector::from([1, 2, 3]);
        vec.pop_out(3);
    }

    #[test]
    #[should_panic(expected = "index (is 5) should be < len (is 2)")]
    fn indexing_panics_out_of_bounds() {
        let vec = Vector::from([1, 2]);
        let _element = vec[5];
    }

    #[test]
    fn matches_std_vec_under_random_edits() {
        let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
        let mut vec = Vector::<u32>::new();
        let mut model = Vec::<u32>::new();

        for _ in 0..5_000 {
            let len = model.len();
            match rng.gen_range(0..8) {
                0 => {
                    let x = rng.gen();
                    vec.push(x);
                    model.push(x);
                }
                1 => {
                    let x = rng.gen();
                    vec.push_front(x);
                    model.insert(0, x);
                }
                2 => {
                    let at = rng.gen_range(0..=len);
                    let x = rng.gen();
                    vec.insert(at, x);
                    model.insert(at, x);
                }
                3 if len > 0 => {
                    let at = rng.gen_range(0..len);
                    assert_eq!(vec.pop_out(at), model.remove(at));
                }
                4 => {
                    let i = rng.gen_range(0..=len);
                    let j = rng.gen_range(i..=len);
                    vec.cut(i, j);
                    model.drain(i..j);
                    assert_eq!(vec.len(), len - (j - i));
                }
                5 => {
                    let at = rng.gen_range(0..=len);
                    let n = rng.gen_range(0..4);
                    vec.expand(at, n);
                    for _ in 0..n {
                        model.insert(at, 0);
                    }
                }
                6 => assert_eq!(vec.pop_front(), (len > 0).then(|| model.remove(0))),
                _ => assert_eq!(vec.pop_back(), model.pop()),
            }

            assert_eq!(vec.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn swap_removal_keeps_the_multiset() {
        fn counts(values: &[u32]) -> FxHashMap<u32, usize> {
            let mut map = FxHashMap::default();
            for &v in values {
                *map.entry(v).or_insert(0) += 1;
            }
            map
        }

        let mut rng = SmallRng::seed_from_u64(0x0123_4567_89ab_cdef);
        let mut vec: Vector<u32> = (0..200).map(|_| rng.gen_range(0..20)).collect();

        while !vec.is_empty() {
            let before = counts(&vec);
            let len = vec.len();
            let at = rng.gen_range(0..len);
            let expected = vec[at];

            let removed = vec.delete_no_preserve_order(at);
            assert_eq!(removed, expected);
            assert_eq!(vec.len(), len - 1);

            let mut after = counts(&vec);
            *after.entry(removed).or_insert(0) += 1;
            assert_eq!(after, before);
        }
    }
}
