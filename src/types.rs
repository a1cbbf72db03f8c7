//! Runtime identities for element types.
//!
//! An [`ElementType`] names the single type every element of an
//! [`AnyVector`](crate::AnyVector) must have. The associated constants cover
//! the common primitive types; [`ElementType::of`] builds one for any other
//! type meeting the [`Element`] bounds.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::dynamic::{erased_with_capacity, ErasedVector};

/// Types that can be stored in an [`AnyVector`](crate::AnyVector).
///
/// Elements must be `'static` to be identified at runtime, [`Clone`] so
/// vectors can be copied, and [`Default`] so vectors can be expanded with
/// placeholder values.
pub trait Element: Any + Clone + Default {}

impl<T: Any + Clone + Default> Element for T {}

/// A complex number with real part `re` and imaginary part `im`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<F> {
    /// Real part.
    pub re: F,
    /// Imaginary part.
    pub im: F,
}

impl<F> Complex<F> {
    /// Constructs a complex number from its parts.
    pub const fn new(re: F, im: F) -> Self {
        Complex { re, im }
    }
}

/// A complex number made of two `f32`s.
pub type Complex64 = Complex<f32>;
/// A complex number made of two `f64`s.
pub type Complex128 = Complex<f64>;

/// The identity of an element type, chosen when an
/// [`AnyVector`](crate::AnyVector) is created.
///
/// Two `ElementType`s are equal exactly when they describe the same Rust type.
///
/// # Examples
/// ```
/// use vectors::ElementType;
/// assert_eq!(ElementType::INT32, ElementType::of::<i32>());
/// assert_ne!(ElementType::INT32, ElementType::UINT32);
/// assert_eq!(ElementType::STRING.name(), "alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct ElementType {
    id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    make: fn(usize) -> Box<dyn ErasedVector>,
}

impl ElementType {
    /// `bool`
    pub const BOOL: Self = Self::of::<bool>();
    /// `isize`, the native signed integer.
    pub const INT: Self = Self::of::<isize>();
    /// `i8`
    pub const INT8: Self = Self::of::<i8>();
    /// `i16`
    pub const INT16: Self = Self::of::<i16>();
    /// `i32`
    pub const INT32: Self = Self::of::<i32>();
    /// `i64`
    pub const INT64: Self = Self::of::<i64>();
    /// `usize`, the native unsigned integer.
    pub const UINT: Self = Self::of::<usize>();
    /// `u8`
    pub const UINT8: Self = Self::of::<u8>();
    /// `u16`
    pub const UINT16: Self = Self::of::<u16>();
    /// `u32`
    pub const UINT32: Self = Self::of::<u32>();
    /// `u64`
    pub const UINT64: Self = Self::of::<u64>();
    /// `usize`, wide enough to hold an address.
    ///
    /// Rust has a single address-sized unsigned type, so this is equal to
    /// [`UINT`](ElementType::UINT).
    pub const UINTPTR: Self = Self::of::<usize>();
    /// `f32`
    pub const FLOAT32: Self = Self::of::<f32>();
    /// `f64`
    pub const FLOAT64: Self = Self::of::<f64>();
    /// [`Complex64`]
    pub const COMPLEX64: Self = Self::of::<Complex64>();
    /// [`Complex128`]
    pub const COMPLEX128: Self = Self::of::<Complex128>();
    /// [`String`]
    pub const STRING: Self = Self::of::<String>();

    /// Returns the element type describing `T`.
    ///
    /// # Examples
    /// ```
    /// #[derive(Clone, Default)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let points = vectors::ElementType::of::<Point>();
    /// assert!(points.name().ends_with("Point"));
    /// ```
    pub const fn of<T: Element>() -> Self {
        ElementType {
            id: TypeId::of::<T>,
            type_name: core::any::type_name::<T>,
            make: erased_with_capacity::<T>,
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// Returns the name of the described type, as given by
    /// [`core::any::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Returns `true` if this element type describes `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id() == TypeId::of::<T>()
    }

    pub(crate) fn new_vector(&self, capacity: usize) -> Box<dyn ErasedVector> {
        (self.make)(capacity)
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ElementType {}

impl Hash for ElementType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementType").field(&self.name()).finish()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
