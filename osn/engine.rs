//! Entry points that run a network against caller storage.
//!
//! [`sort_array_with`] is the fixed-size entry point: the length is the const
//! parameter `N`, so the network is picked at compile time and its loop is
//! fully unrolled. [`sort_slice_with`] is the range entry point: it reads the
//! length at run time and hands the slice to the fixed-size routine for that
//! exact length, either through a `match` or through a table of function
//! pointers (see [`Dispatch`]).

use std::marker::PhantomData;

use crate::{
  catalog::{
    MAX_SUPPORTED_LEN,
    NetworkTraits,
  },
  error::{
    NetworkError,
    Result,
  },
  exchange::Exchange,
  network::Network,
};

/// How the range entry point reaches the routine for a run-time length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
  /// One `match` arm per length.
  Match,
  /// Indirect call through a table indexed by `len - 2`.
  JumpTable,
}

impl Default for Dispatch {
  fn default() -> Self {
    if cfg!(feature = "jump-table") {
      Self::JumpTable
    } else {
      Self::Match
    }
  }
}

#[inline(always)]
fn run<T, X: Exchange<T>>(v: &mut [T], network: &Network) {
  for comparator in network.comparators() {
    X::compare_exchange(v, comparator.left, comparator.right);
  }
}

/// Sorts `v` in place with the network for `N` elements.
///
/// `N` of 0 or 1 is a no-op, and `N > MAX_SUPPORTED_LEN` does not compile.
///
/// ```
/// use osn::{engine::sort_array_with, exchange::Branchless};
///
/// let mut v = [5, 3, 4, 1, 2];
/// sort_array_with::<5, _, Branchless>(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn sort_array_with<const N: usize, T, X: Exchange<T>>(v: &mut [T; N]) {
  run::<T, X>(v, NetworkTraits::<N>::NETWORK);
}

// Slice form of the fixed-size entry point, callers guarantee `v.len() == N`.
fn sort_exact<const N: usize, T, X: Exchange<T>>(v: &mut [T]) {
  match <&mut [T; N]>::try_from(v) {
    Ok(array) => sort_array_with::<N, T, X>(array),
    Err(_) => unreachable!("network for {N} elements dispatched on a slice of another length"),
  }
}

struct JumpTable<T, X>(PhantomData<fn(&mut [T]) -> X>);

impl<T, X: Exchange<T>> JumpTable<T, X> {
  const ENTRIES: [fn(&mut [T]); MAX_SUPPORTED_LEN - 1] = [
    sort_exact::<2, T, X>,
    sort_exact::<3, T, X>,
    sort_exact::<4, T, X>,
    sort_exact::<5, T, X>,
    sort_exact::<6, T, X>,
    sort_exact::<7, T, X>,
    sort_exact::<8, T, X>,
  ];
}

fn dispatch_match<T, X: Exchange<T>>(v: &mut [T]) {
  match v.len() {
    0 | 1 => {},
    2 => sort_exact::<2, T, X>(v),
    3 => sort_exact::<3, T, X>(v),
    4 => sort_exact::<4, T, X>(v),
    5 => sort_exact::<5, T, X>(v),
    6 => sort_exact::<6, T, X>(v),
    7 => sort_exact::<7, T, X>(v),
    8 => sort_exact::<8, T, X>(v),
    len => unreachable!("no sorting network for {len} elements"),
  }
}

/// Sorts `v` in place with the network for `v.len()` elements.
///
/// Slices shorter than two elements are left as they are. Slices longer than
/// [`MAX_SUPPORTED_LEN`] are rejected with
/// [`NetworkError::UnsupportedLength`] before any element is touched.
pub fn sort_slice_with<T, X: Exchange<T>>(v: &mut [T], dispatch: Dispatch) -> Result<()> {
  let len = v.len();
  if len < 2 {
    return Ok(());
  }
  if len > MAX_SUPPORTED_LEN {
    tracing::debug!(
      len,
      max = MAX_SUPPORTED_LEN,
      "rejecting slice without a sorting network"
    );
    return Err(NetworkError::unsupported(len));
  }

  match dispatch {
    Dispatch::Match => dispatch_match::<T, X>(v),
    Dispatch::JumpTable => JumpTable::<T, X>::ENTRIES[len - 2](v),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::exchange::{
    Branchless,
    Branchy,
  };

  const DISPATCHES: [Dispatch; 2] = [Dispatch::Match, Dispatch::JumpTable];

  #[test]
  fn test_default_dispatch_follows_feature() {
    let expected = if cfg!(feature = "jump-table") {
      Dispatch::JumpTable
    } else {
      Dispatch::Match
    };
    assert_eq!(Dispatch::default(), expected);
  }

  #[test]
  fn test_fixed_size_example() {
    let mut v = [5, 3, 4, 1, 2];
    sort_array_with::<5, _, Branchy>(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);
  }

  #[test]
  fn test_trivial_lengths_are_noops() {
    let mut empty: [u8; 0] = [];
    sort_array_with::<0, _, Branchless>(&mut empty);

    let mut one = [7];
    sort_array_with::<1, _, Branchless>(&mut one);
    assert_eq!(one, [7]);

    for dispatch in DISPATCHES {
      let mut v: Vec<i32> = vec![];
      assert_eq!(sort_slice_with::<_, Branchy>(&mut v, dispatch), Ok(()));
      let mut v = vec![42];
      assert_eq!(sort_slice_with::<_, Branchy>(&mut v, dispatch), Ok(()));
      assert_eq!(v, [42]);
    }
  }

  #[test]
  fn test_reverse_input_for_every_length() {
    for dispatch in DISPATCHES {
      for n in 2..=MAX_SUPPORTED_LEN {
        let mut v: Vec<usize> = (0..n).rev().collect();
        sort_slice_with::<_, Branchless>(&mut v, dispatch).unwrap();
        assert_eq!(v, (0..n).collect::<Vec<_>>(), "{dispatch:?} with {n}");
      }
    }
  }

  #[test]
  fn test_jump_table_entry_matches_length() {
    for (i, entry) in JumpTable::<u32, Branchy>::ENTRIES.iter().enumerate() {
      let n = i + 2;
      let mut v: Vec<u32> = (0..n as u32).rev().collect();
      entry(&mut v);
      assert!(v.is_sorted(), "entry {i} left {v:?}");
    }
  }

  #[test]
  fn test_rejects_long_slices_untouched() {
    for dispatch in DISPATCHES {
      let mut v: Vec<i32> = (0..9).rev().collect();
      let original = v.clone();
      assert_eq!(
        sort_slice_with::<_, Branchy>(&mut v, dispatch),
        Err(NetworkError::UnsupportedLength { len: 9, max: 8 })
      );
      assert_eq!(v, original);
    }
  }
}
