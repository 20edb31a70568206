//! Type-erased message value moved between microprocesses.

use dyn_clone::clone_box;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use crate::lang::Item;
use crate::raise;

/// Dynamically typed value carried through message boxes and suspension
/// points.
///
/// A [`Term`] wraps a boxed [`Item`] and provides type-safe downcasting for
/// inspecting or extracting the contained value. The runtime itself never
/// looks inside a term: message boxes queue them in FIFO order, postmen
/// relay them verbatim, and suspension points hand them between a fiber and
/// its resumer.
///
/// # Cloning Behavior
///
/// Cloning a [`Term`] performs a deep clone of the contained value, so a
/// producer can hold a template message and send a fresh copy every step.
///
/// # Examples
///
/// ```
/// use alcor::lang::Term;
///
/// let mut term = Term::new(vec![1, 2, 3]);
///
/// assert!(term.is::<Vec<i32>>());
///
/// if let Some(vec) = term.downcast_mut::<Vec<i32>>() {
///   vec.push(4);
/// }
///
/// assert_eq!(term.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3, 4]));
/// ```
#[repr(transparent)]
pub struct Term {
  data: Box<dyn Item>,
}

impl Term {
  /// Creates a new term wrapping the given value.
  ///
  /// # Examples
  ///
  /// ```
  /// use alcor::lang::Term;
  ///
  /// let num = Term::new(42);
  /// let text = Term::new("Hello World");
  /// ```
  #[inline]
  pub fn new<T>(data: T) -> Self
  where
    T: Item,
  {
    Self {
      data: Box::new(data),
    }
  }

  /// Returns `true` if the contained value is of type `T`.
  #[inline]
  pub fn is<T>(&self) -> bool
  where
    T: 'static,
  {
    self.data.as_any().is::<T>()
  }

  /// Returns a shared reference to the contained value of type `T`.
  ///
  /// Returns [`None`] if the value has a different concrete type.
  ///
  /// # Examples
  ///
  /// ```
  /// use alcor::lang::Term;
  ///
  /// let term = Term::new(String::from("Hello World"));
  ///
  /// assert_eq!(term.downcast_ref::<String>(), Some(&String::from("Hello World")));
  /// assert_eq!(term.downcast_ref::<i32>(), None);
  /// ```
  #[inline]
  pub fn downcast_ref<T>(&self) -> Option<&T>
  where
    T: 'static,
  {
    self.data.as_any().downcast_ref()
  }

  /// Returns a mutable reference to the contained value of type `T`.
  ///
  /// Returns [`None`] if the value has a different concrete type.
  #[inline]
  pub fn downcast_mut<T>(&mut self) -> Option<&mut T>
  where
    T: 'static,
  {
    self.data.as_mut_any().downcast_mut()
  }

  /// Extracts the contained value of type `T`.
  ///
  /// Returns the term unchanged in the error position if the value has a
  /// different concrete type.
  ///
  /// # Examples
  ///
  /// ```
  /// use alcor::lang::Term;
  ///
  /// let term = Term::new(7_u64);
  ///
  /// assert_eq!(term.downcast::<u64>().ok(), Some(Box::new(7_u64)));
  /// ```
  pub fn downcast<T>(self) -> Result<Box<T>, Self>
  where
    T: 'static,
  {
    if !self.is::<T>() {
      return Err(self);
    }

    match self.data.into_any().downcast() {
      Ok(data) => Ok(data),
      Err(_) => raise!(Error, SysInv, "term downcast after successful type check"),
    }
  }
}

impl Clone for Term {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      data: clone_box(&*self.data),
    }
  }
}

impl Debug for Term {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    Debug::fmt(&self.data, f)
  }
}

impl PartialEq for Term {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.data.dyn_eq(other.data.as_any())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
