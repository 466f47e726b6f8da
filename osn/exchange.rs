//! The compare-exchange primitive.
//!
//! Every comparator of a network boils down to one call of
//! [`Exchange::compare_exchange`]. Two strategies are provided:
//!
//! - [`Branchy`] works for any `T: PartialOrd` and guards a swap with a branch.
//! - [`Branchless`] needs `T: Copy`. When the type also [fits in a
//!   word](fits_in_word) it reads both values unconditionally and writes them
//!   back through selects, which lets the compiler emit conditional moves
//!   instead of a data-dependent branch. Larger `Copy` types use the branchy
//!   form.
//!
//! Both strategies leave the slice in the same state for every input.

use std::mem::size_of;

/// Conditional exchange of two positions of a slice.
pub trait Exchange<T> {
  /// Exchanges `v[left]` and `v[right]` if `v[right] < v[left]`. No other
  /// position is read or written.
  ///
  /// # Panics
  ///
  /// Panics if either position is out of bounds.
  fn compare_exchange(v: &mut [T], left: usize, right: usize);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Branchy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Branchless;

/// Whether a value of `T` fits in one machine word.
#[inline]
pub const fn fits_in_word<T>() -> bool {
  size_of::<T>() <= size_of::<usize>()
}

impl<T: PartialOrd> Exchange<T> for Branchy {
  #[inline(always)]
  fn compare_exchange(v: &mut [T], left: usize, right: usize) {
    if v[right] < v[left] {
      v.swap(left, right);
    }
  }
}

impl<T: PartialOrd + Copy> Exchange<T> for Branchless {
  #[inline(always)]
  fn compare_exchange(v: &mut [T], left: usize, right: usize) {
    if const { fits_in_word::<T>() } {
      let a = v[left];
      let b = v[right];
      let swap = b < a;
      v[left] = if swap { b } else { a };
      v[right] = if swap { a } else { b };
    } else {
      <Branchy as Exchange<T>>::compare_exchange(v, left, right);
    }
  }
}
