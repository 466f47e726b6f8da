//! # osn
//!
//! Optimal sorting networks for sequences of up to eight elements.
//!
//! A sorting network is a fixed list of compare-exchange operations on fixed
//! positions that sorts every input of one length. The networks here are
//! tabulated per length (see [`catalog`]), so sorting is a replay of at most
//! 19 compare-exchanges with no allocation and no data-dependent control flow
//! besides the exchanges themselves.
//!
//! ## Usage
//!
//! ```rust
//! // Length known at compile time.
//! let mut pixel = [200u8, 13, 77, 4];
//! osn::sort_array_copy(&mut pixel);
//! assert_eq!(pixel, [4, 13, 77, 200]);
//!
//! // Length known at run time.
//! let mut names = vec!["mika", "ada", "lin"];
//! osn::sort(&mut names);
//! assert_eq!(names, ["ada", "lin", "mika"]);
//!
//! // Longer sequences are not supported.
//! let mut long = [0u32; 9];
//! assert!(osn::try_sort(&mut long).is_err());
//! ```
//!
//! The `_copy` variants use the [`Branchless`](exchange::Branchless) exchange,
//! which compiles to conditional moves for `Copy` types no larger than a
//! word. The others use [`Branchy`](exchange::Branchy) and accept any
//! `PartialOrd` type.
//!
//! ## Features
//!
//! - `jump-table`: range calls reach the per-length routine through a table of
//!   function pointers instead of a `match`.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod network;

pub use catalog::{
  MAX_SUPPORTED_LEN,
  NetworkTraits,
};
pub use engine::Dispatch;
pub use error::{
  NetworkError,
  Result,
};

use crate::{
  engine::{
    sort_array_with,
    sort_slice_with,
  },
  exchange::{
    Branchless,
    Branchy,
  },
};

/// Sorts an array of `N <= 8` elements.
#[inline]
pub fn sort_array<const N: usize, T: PartialOrd>(v: &mut [T; N]) {
  sort_array_with::<N, T, Branchy>(v);
}

/// Sorts an array of `N <= 8` elements with the branch-free exchange.
#[inline]
pub fn sort_array_copy<const N: usize, T: PartialOrd + Copy>(v: &mut [T; N]) {
  sort_array_with::<N, T, Branchless>(v);
}

/// Sorts a slice of at most [`MAX_SUPPORTED_LEN`] elements.
///
/// # Panics
///
/// Panics if `v` is longer than [`MAX_SUPPORTED_LEN`]. The slice is not
/// modified in that case.
#[track_caller]
pub fn sort<T: PartialOrd>(v: &mut [T]) {
  if let Err(err) = try_sort(v) {
    panic!("{err}");
  }
}

/// Like [`sort`], with the branch-free exchange.
///
/// # Panics
///
/// Panics if `v` is longer than [`MAX_SUPPORTED_LEN`]. The slice is not
/// modified in that case.
#[track_caller]
pub fn sort_copy<T: PartialOrd + Copy>(v: &mut [T]) {
  if let Err(err) = try_sort_copy(v) {
    panic!("{err}");
  }
}

pub fn try_sort<T: PartialOrd>(v: &mut [T]) -> Result<()> {
  sort_slice_with::<T, Branchy>(v, Dispatch::default())
}

pub fn try_sort_copy<T: PartialOrd + Copy>(v: &mut [T]) -> Result<()> {
  sort_slice_with::<T, Branchless>(v, Dispatch::default())
}

#[cfg(test)]
mod tests {
  use super::*;

  quickcheck::quickcheck! {
      fn test_matches_std_sort(xs: Vec<i64>) -> bool {
          let mut xs = xs;
          xs.truncate(MAX_SUPPORTED_LEN);
          let mut expected = xs.clone();
          expected.sort();
          let mut branchy = xs.clone();
          sort(&mut branchy);
          sort_copy(&mut xs);
          xs == expected && branchy == expected
      }

      fn test_strings_match_std_sort(xs: Vec<String>) -> bool {
          let mut xs = xs;
          xs.truncate(MAX_SUPPORTED_LEN);
          let mut expected = xs.clone();
          expected.sort();
          sort(&mut xs);
          xs == expected
      }
  }

  #[test]
  fn test_example() {
    let mut v = [5, 3, 4, 1, 2];
    sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);
  }

  #[test]
  fn test_try_sort_reports_length() {
    let mut v = [0u16; 12];
    assert_eq!(
      try_sort_copy(&mut v),
      Err(NetworkError::UnsupportedLength { len: 12, max: 8 })
    );
  }

  #[test]
  #[should_panic(expected = "no sorting network for 9 elements")]
  fn test_sort_panics_on_long_slice() {
    let mut v = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    sort(&mut v);
  }
}
