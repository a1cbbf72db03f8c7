//! Vectors whose element type is chosen at runtime.
//!
//! An [`AnyVector`] is created from an [`ElementType`] and from then on only
//! admits values of that type. Every operation that brings values in checks
//! them first and fails with [`Error::TypeMismatch`] without touching the
//! vector's contents, so a rejected batch leaves no partial writes behind.
//!
//! Internally an `AnyVector` owns a [`Vector<T>`] behind a type-erased
//! interface; [`typed`](AnyVector::typed) and [`typed_mut`](AnyVector::typed_mut)
//! give direct access to it once the caller names the right `T`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{type_name, Any};
use core::fmt;

use log::{debug, trace};

use crate::types::{Element, ElementType};
use crate::{Error, Result, Vector};

/// A value of any `'static` type, boxed together with its type name.
///
/// Used to pass values of mixed types into [`AnyVector::put_values`], and
/// returned by the removal operations of [`AnyVector`].
///
/// # Examples
/// ```
/// use vectors::AnyValue;
/// let value = AnyValue::new(42u8);
/// assert_eq!(value.type_name(), "u8");
/// assert!(value.is::<u8>());
/// assert_eq!(value.downcast::<u8>().ok(), Some(42));
/// ```
pub struct AnyValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl AnyValue {
    /// Boxes `value`.
    pub fn new<V: Any>(value: V) -> Self {
        AnyValue {
            value: Box::new(value),
            type_name: type_name::<V>(),
        }
    }

    /// Returns the name of the boxed value's type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the boxed value is a `V`.
    #[inline]
    pub fn is<V: Any>(&self) -> bool {
        self.value.is::<V>()
    }

    /// Returns a reference to the boxed value if it is a `V`.
    #[inline]
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref()
    }

    /// Unboxes the value if it is a `V`, or gives it back otherwise.
    pub fn downcast<V: Any>(self) -> core::result::Result<V, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(AnyValue { value, type_name }),
        }
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyValue").field(&self.type_name).finish()
    }
}

/// The operations of [`Vector<T>`] that do not mention `T`, so they can be
/// dispatched without knowing it.
pub(crate) trait ErasedVector {
    fn element_type(&self) -> ElementType;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn copy_boxed(&self) -> Box<dyn ErasedVector>;

    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
    fn get_any(&self, index: usize) -> Option<&dyn Any>;

    fn put_values(&mut self, values: Vec<AnyValue>, front: bool) -> Result<()>;
    fn insert_from(&mut self, offset: usize, other: &dyn ErasedVector) -> Result<()>;

    fn cut(&mut self, start: usize, end: usize) -> Result<()>;
    fn delete(&mut self, index: usize) -> Result<()>;
    fn delete_no_preserve_order(&mut self, index: usize) -> Result<AnyValue>;
    fn expand(&mut self, offset: usize, count: usize) -> Result<()>;
    fn extend_default(&mut self, count: usize);
    fn pop_front(&mut self) -> Result<AnyValue>;
    fn pop_back(&mut self) -> Result<AnyValue>;
    fn pop_out(&mut self, index: usize) -> Result<AnyValue>;
    fn truncate(&mut self, len: usize);
}

pub(crate) fn erased_with_capacity<T: Element>(capacity: usize) -> Box<dyn ErasedVector> {
    Box::new(Vector::<T>::with_capacity(capacity))
}

impl<T: Element> ErasedVector for Vector<T> {
    fn element_type(&self) -> ElementType {
        ElementType::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn copy_boxed(&self) -> Box<dyn ErasedVector> {
        Box::new(self.copy())
    }

    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn capacity(&self) -> usize {
        Vector::capacity(self)
    }

    fn get_any(&self, index: usize) -> Option<&dyn Any> {
        Vector::get(self, index).map(|element| element as &dyn Any)
    }

    fn put_values(&mut self, values: Vec<AnyValue>, front: bool) -> Result<()> {
        let mut staged = Vec::with_capacity(values.len());
        for value in values {
            match value.downcast::<T>() {
                Ok(element) => staged.push(element),
                Err(value) => {
                    return Err(Error::TypeMismatch {
                        found: value.type_name(),
                        expected: type_name::<T>(),
                    })
                }
            }
        }

        if front {
            self.put_front(staged);
        } else {
            self.put(staged);
        }
        Ok(())
    }

    fn insert_from(&mut self, offset: usize, other: &dyn ErasedVector) -> Result<()> {
        match other.as_any().downcast_ref::<Vector<T>>() {
            Some(other) => self.try_insert_slice(offset, other.as_slice()),
            None => Err(Error::TypeMismatch {
                found: other.element_type().name(),
                expected: type_name::<T>(),
            }),
        }
    }

    fn cut(&mut self, start: usize, end: usize) -> Result<()> {
        self.try_cut(start, end)
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        self.try_delete(index)
    }

    fn delete_no_preserve_order(&mut self, index: usize) -> Result<AnyValue> {
        self.try_delete_no_preserve_order(index).map(AnyValue::new)
    }

    fn expand(&mut self, offset: usize, count: usize) -> Result<()> {
        self.try_expand(offset, count)
    }

    fn extend_default(&mut self, count: usize) {
        Vector::extend_default(self, count);
    }

    fn pop_front(&mut self) -> Result<AnyValue> {
        self.try_pop_front().map(AnyValue::new)
    }

    fn pop_back(&mut self) -> Result<AnyValue> {
        self.try_pop_back().map(AnyValue::new)
    }

    fn pop_out(&mut self, index: usize) -> Result<AnyValue> {
        self.try_pop_out(index).map(AnyValue::new)
    }

    fn truncate(&mut self, len: usize) {
        Vector::truncate(self, len);
    }
}

fn mismatch<V: ?Sized>(expected: &'static str) -> Error {
    let err = Error::TypeMismatch {
        found: type_name::<V>(),
        expected,
    };
    log_rejection(&err);
    err
}

fn log_rejection(err: &Error) {
    if let Error::TypeMismatch { found, expected } = err {
        debug!("rejected {} for a vector of {}", found, expected);
    }
}

/// A homogeneous vector whose element type is fixed at construction time.
///
/// # Examples
/// ```
/// use vectors::{AnyVector, ElementType, Error};
///
/// let mut vec = AnyVector::new(ElementType::INT64);
/// vec.push(1i64)?;
/// vec.push(2i64)?;
/// vec.push(3i64)?;
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.get::<i64>(1)?, &2);
///
/// assert!(matches!(vec.push(4u8), Err(Error::TypeMismatch { .. })));
/// assert_eq!(vec.len(), 3);
/// # Ok::<(), Error>(())
/// ```
pub struct AnyVector {
    inner: Box<dyn ErasedVector>,
}

impl AnyVector {
    /// Constructs a new, empty vector of `element_type`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    pub fn new(element_type: ElementType) -> Self {
        Self::with_capacity(element_type, 0)
    }

    /// Constructs a new, empty vector of `element_type` with room for at
    /// least `capacity` elements.
    pub fn with_capacity(element_type: ElementType, capacity: usize) -> Self {
        trace!(
            "creating vector of {} with capacity {}",
            element_type,
            capacity
        );
        AnyVector {
            inner: element_type.new_vector(capacity),
        }
    }

    /// Wraps a statically typed vector, keeping its contents.
    pub fn from_vector<T: Element>(vec: Vector<T>) -> Self {
        AnyVector {
            inner: Box::new(vec),
        }
    }

    /// Unwraps the statically typed vector inside.
    ///
    /// Consumes `self` either way; fails with [`Error::TypeMismatch`] if `T`
    /// is not the element type.
    pub fn into_vector<T: Element>(self) -> Result<Vector<T>> {
        let expected = self.element_type().name();
        match self.inner.into_any().downcast::<Vector<T>>() {
            Ok(vec) => Ok(*vec),
            Err(_) => Err(mismatch::<T>(expected)),
        }
    }

    /// Returns the element type fixed at construction.
    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.inner.element_type()
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the statically typed vector inside.
    ///
    /// Fails with [`Error::TypeMismatch`] if `V` is not the element type.
    pub fn typed<V: Any>(&self) -> Result<&Vector<V>> {
        match self.inner.as_any().downcast_ref::<Vector<V>>() {
            Some(vec) => Ok(vec),
            None => Err(mismatch::<V>(self.element_type().name())),
        }
    }

    /// Mutably borrows the statically typed vector inside.
    ///
    /// Fails with [`Error::TypeMismatch`] if `V` is not the element type.
    ///
    /// # Examples
    /// ```
    /// use vectors::{AnyVector, ElementType};
    /// let mut vec = AnyVector::new(ElementType::UINT16);
    /// vec.typed_mut::<u16>()?.put([1, 2, 3]);
    /// assert_eq!(vec.typed::<u16>()?.as_slice(), &[1, 2, 3]);
    /// # Ok::<(), vectors::Error>(())
    /// ```
    pub fn typed_mut<V: Any>(&mut self) -> Result<&mut Vector<V>> {
        let expected = self.element_type().name();
        match self.inner.as_any_mut().downcast_mut::<Vector<V>>() {
            Some(vec) => Ok(vec),
            None => Err(mismatch::<V>(expected)),
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with [`Error::TypeMismatch`] if `V` is not the element type, or
    /// with [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get<V: Any>(&self, index: usize) -> Result<&V> {
        self.typed::<V>()?.try_get(index)
    }

    /// Returns a type-erased reference to the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get_any(&self, index: usize) -> Result<&dyn Any> {
        self.inner
            .get_any(index)
            .ok_or(Error::out_of_range(index, self.len()))
    }

    /// Appends all `elements` to the back of the vector, in order.
    ///
    /// Fails with [`Error::TypeMismatch`], leaving the vector unchanged, if
    /// `V` is not the element type.
    pub fn put<V: Any, It: IntoIterator<Item = V>>(&mut self, elements: It) -> Result<()> {
        self.typed_mut::<V>()?.put(elements);
        Ok(())
    }

    /// Prepends all `elements` to the front of the vector, in order.
    ///
    /// Fails with [`Error::TypeMismatch`], leaving the vector unchanged, if
    /// `V` is not the element type.
    pub fn put_front<V: Any, It: IntoIterator<Item = V>>(&mut self, elements: It) -> Result<()> {
        self.typed_mut::<V>()?.put_front(elements);
        Ok(())
    }

    /// Appends boxed values of possibly mixed types to the back of the vector.
    ///
    /// Every value is checked before any is stored: if one of them is not of
    /// the element type, fails with [`Error::TypeMismatch`] naming the first
    /// offender and leaves the vector unchanged.
    ///
    /// # Examples
    /// ```
    /// use vectors::{AnyValue, AnyVector, ElementType};
    /// let mut vec = AnyVector::new(ElementType::BOOL);
    /// vec.put_values(vec![AnyValue::new(true), AnyValue::new(false)])?;
    /// assert_eq!(vec.len(), 2);
    ///
    /// let mixed = vec![AnyValue::new(true), AnyValue::new(1u8)];
    /// assert!(vec.put_values(mixed).is_err());
    /// assert_eq!(vec.len(), 2);
    /// # Ok::<(), vectors::Error>(())
    /// ```
    pub fn put_values(&mut self, values: Vec<AnyValue>) -> Result<()> {
        self.inner
            .put_values(values, false)
            .inspect_err(log_rejection)
    }

    /// Prepends boxed values of possibly mixed types to the front of the
    /// vector, keeping their order.
    ///
    /// Like [`put_values`](AnyVector::put_values), this either stores all
    /// values or none.
    pub fn put_front_values(&mut self, values: Vec<AnyValue>) -> Result<()> {
        self.inner
            .put_values(values, true)
            .inspect_err(log_rejection)
    }

    /// Appends an element to the back of the vector.
    pub fn push<V: Any>(&mut self, element: V) -> Result<()> {
        self.typed_mut::<V>()?.push(element);
        Ok(())
    }

    /// Prepends an element to the front of the vector.
    pub fn push_front<V: Any>(&mut self, element: V) -> Result<()> {
        self.typed_mut::<V>()?.push_front(element);
        Ok(())
    }

    /// Inserts an element at position `offset`, shifting all elements after
    /// it to the right.
    ///
    /// The type is checked before the offset.
    pub fn insert<V: Any>(&mut self, offset: usize, element: V) -> Result<()> {
        self.typed_mut::<V>()?.try_insert(offset, element)
    }

    /// Copies all elements of `other` into this vector at position `offset`.
    ///
    /// Fails with [`Error::TypeMismatch`] if the two vectors have different
    /// element types, or with [`Error::IndexOutOfRange`] if `offset > len()`.
    ///
    /// # Examples
    /// ```
    /// use vectors::{AnyVector, ElementType};
    /// let mut vec = AnyVector::new(ElementType::INT8);
    /// vec.put([1i8, 5])?;
    ///
    /// let mut middle = AnyVector::new(ElementType::INT8);
    /// middle.put([2i8, 3, 4])?;
    ///
    /// vec.insert_vector(1, &middle)?;
    /// assert_eq!(vec.typed::<i8>()?.as_slice(), &[1, 2, 3, 4, 5]);
    /// assert!(vec.insert_vector(0, &AnyVector::new(ElementType::UINT8)).is_err());
    /// # Ok::<(), vectors::Error>(())
    /// ```
    pub fn insert_vector(&mut self, offset: usize, other: &AnyVector) -> Result<()> {
        self.inner
            .insert_from(offset, &*other.inner)
            .inspect_err(log_rejection)
    }

    /// Places an element at position `index`, returning the element
    /// previously stored there.
    pub fn modify<V: Any>(&mut self, index: usize, element: V) -> Result<V> {
        self.typed_mut::<V>()?.try_modify(index, element)
    }

    /// Returns an independent copy of the vector, with the same element type.
    pub fn copy(&self) -> Self {
        AnyVector {
            inner: self.inner.copy_boxed(),
        }
    }

    /// Removes the elements in the half-open range `start..end`.
    pub fn cut(&mut self, start: usize, end: usize) -> Result<()> {
        self.inner.cut(start, end)
    }

    /// Removes the element at position `index`, preserving order.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.inner.delete(index)
    }

    /// Removes and returns the element at position `index`, moving the last
    /// element into its place.
    pub fn delete_no_preserve_order(&mut self, index: usize) -> Result<AnyValue> {
        self.inner.delete_no_preserve_order(index)
    }

    /// Inserts `count` default values at position `offset`.
    pub fn expand(&mut self, offset: usize, count: usize) -> Result<()> {
        self.inner.expand(offset, count)
    }

    /// Appends `count` default values.
    pub fn extend_default(&mut self, count: usize) {
        self.inner.extend_default(count);
    }

    /// Removes and returns the first element.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if the vector is empty.
    ///
    /// # Examples
    /// ```
    /// use vectors::{AnyVector, ElementType};
    /// let mut vec = AnyVector::new(ElementType::STRING);
    /// vec.put([String::from("a"), String::from("b")])?;
    ///
    /// let front = vec.pop_front()?;
    /// assert_eq!(front.downcast_ref::<String>().map(String::as_str), Some("a"));
    /// assert_eq!(vec.len(), 1);
    /// # Ok::<(), vectors::Error>(())
    /// ```
    pub fn pop_front(&mut self) -> Result<AnyValue> {
        self.inner.pop_front()
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if the vector is empty.
    pub fn pop_back(&mut self) -> Result<AnyValue> {
        self.inner.pop_back()
    }

    /// Removes and returns the element at position `index`, preserving order.
    pub fn pop_out(&mut self, index: usize) -> Result<AnyValue> {
        self.inner.pop_out(index)
    }

    /// Shortens the vector to `len` elements. Has no effect if `len` is not
    /// less than the current length.
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.inner.truncate(0);
    }
}

impl Clone for AnyVector {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Element> From<Vector<T>> for AnyVector {
    fn from(vec: Vector<T>) -> Self {
        Self::from_vector(vec)
    }
}

impl fmt::Debug for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyVector")
            .field("element_type", &self.element_type())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
