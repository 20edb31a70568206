//! Trait defining the type-erased message values carried by a [`Term`].
//!
//! Most users work with [`Term`] directly rather than implementing [`Item`]
//! by hand; the blanket implementation below covers every eligible type.
//!
//! [`Term`]: crate::lang::Term

use dyn_clone::DynClone;
use std::any::Any;
use std::fmt::Debug;

/// Trait implemented by all values stored inside a [`Term`].
///
/// Message boxes treat their contents as opaque: the runtime never inspects
/// a payload, it only moves it along. [`Item`] is what makes that possible
/// while still supporting cloning, diagnostic output, and type-safe
/// recovery at the receiving end.
///
/// # Automatic Implementation
///
/// [`Item`] is automatically implemented for all types that satisfy:
///
/// - [`Any`]: Required for downcasting
/// - [`Debug`]: Required for the box-content diagnostic dump
/// - [`DynClone`]: Required for cloning trait objects
/// - [`PartialEq`]: Required for comparing received messages
/// - [`Send`] + [`Sync`]: Required for crossing fiber task boundaries
/// - `'static`: Required for type erasure
///
/// # Examples
///
/// ```
/// use alcor::lang::Term;
///
/// // These types automatically implement Item:
/// let t1 = Term::new(42_i32);
/// let t2 = Term::new(String::from("Hello World"));
/// let t3 = Term::new(vec![1, 2, 3]);
/// ```
///
/// [`Term`]: crate::lang::Term
pub trait Item: Any + Debug + DynClone + Send + Sync + 'static {
  /// Returns a shared reference to this value as [`Any`].
  fn as_any(&self) -> &(dyn Any + Send + Sync);

  /// Returns a mutable reference to this value as [`Any`].
  fn as_mut_any(&mut self) -> &mut (dyn Any + Send + Sync);

  /// Converts this value into a boxed [`Any`] trait object.
  fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;

  /// Tests for `self` and `other` values to be equal.
  ///
  /// This is stricter than [`PartialEq`] because the types must be
  /// identical.
  fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl PartialEq for dyn Item {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.dyn_eq(other.as_any())
  }
}

impl<T> Item for T
where
  T: Any + Debug + DynClone + Send + Sync + 'static,
  T: PartialEq,
{
  #[inline]
  fn as_any(&self) -> &(dyn Any + Send + Sync) {
    self
  }

  #[inline]
  fn as_mut_any(&mut self) -> &mut (dyn Any + Send + Sync) {
    self
  }

  #[inline]
  fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
    self
  }

  #[inline]
  fn dyn_eq(&self, other: &dyn Any) -> bool {
    other
      .downcast_ref::<T>()
      .is_some_and(|other| PartialEq::eq(self, other))
  }
}
