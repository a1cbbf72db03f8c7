#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/vectors/0.1.0")]

//! Homogeneous resizable arrays with positional editing operations.
//!
//! [`Vector<T>`](Vector) wraps the standard growable array and adds the
//! editing operations it lacks: cutting out ranges, expanding runs of
//! default values in place, splicing whole vectors in, pushing and popping
//! at the front, and order-preserving or swap-based deletion. All elements
//! share the type `T`, so mixing element types is a compile-time error.
//!
//! With the `dynamic` feature (enabled by default), [`AnyVector`] offers the
//! same operations for vectors whose element type is only known at runtime.
//! It is created from an [`ElementType`], such as [`ElementType::INT32`] or
//! [`ElementType::of::<T>()`](ElementType::of), and rejects values of any
//! other type with [`Error::TypeMismatch`].
//!
//! # Examples
//! ```
//! use vectors::Vector;
//!
//! let mut vec = Vector::new();
//! vec.push(1);
//! vec.push(2);
//! vec.push(3);
//! assert_eq!(vec.get(1), Some(&2));
//!
//! vec.delete(0);
//! vec.push_front(9);
//! assert_eq!(vec, [9, 2, 3]);
//!
//! vec.cut(1, 2);
//! assert_eq!(vec, [9, 3]);
//! ```
//!
//! Neither vector type synchronizes access; share one across threads only
//! behind a lock.

extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod range;
pub mod vector;

#[cfg(feature = "dynamic")]
#[cfg_attr(docs_rs, doc(cfg(feature = "dynamic")))]
pub mod dynamic;
#[cfg(feature = "dynamic")]
#[cfg_attr(docs_rs, doc(cfg(feature = "dynamic")))]
pub mod types;

#[cfg(test)]
mod test_utils;

pub use crate::error::{Error, Result};
pub use crate::vector::Vector;

#[cfg(feature = "dynamic")]
pub use crate::dynamic::{AnyValue, AnyVector};
#[cfg(feature = "dynamic")]
pub use crate::types::{Complex, Complex128, Complex64, Element, ElementType};
