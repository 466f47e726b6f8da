//! The tabulated sorting networks.
//!
//! Each entry is a known optimal network for its length: no network with
//! fewer comparators sorts every input of that length. Comparators within a
//! line below can run in parallel, so the line count matches the depth.

use crate::{
  error::{
    NetworkError,
    Result,
  },
  network::{
    Comparator,
    Network,
  },
};

/// Longest sequence this crate has a network for.
pub const MAX_SUPPORTED_LEN: usize = 8;

macro_rules! network {
  (depth: $depth:expr, [$( $( ($left:expr, $right:expr) ),+ );+ $(;)?]) => {
    Network::new(&[$( $( Comparator::new($left, $right), )+ )+], $depth)
  };
}

const NETWORK_2: Network = network!(depth: 1, [
  (0, 1);
]);

const NETWORK_3: Network = network!(depth: 3, [
  (1, 2);
  (0, 1);
  (1, 2);
]);

const NETWORK_4: Network = network!(depth: 3, [
  (0, 1), (2, 3);
  (1, 3), (0, 2);
  (1, 2);
]);

const NETWORK_5: Network = network!(depth: 5, [
  (1, 2), (3, 4);
  (1, 3), (0, 2);
  (2, 4), (0, 3);
  (0, 1), (2, 3);
  (1, 2);
]);

const NETWORK_6: Network = network!(depth: 5, [
  (0, 5), (1, 3), (2, 4);
  (1, 2), (3, 4);
  (0, 3), (2, 5);
  (0, 1), (2, 3), (4, 5);
  (1, 2), (3, 4);
]);

const NETWORK_7: Network = network!(depth: 6, [
  (1, 2), (3, 4), (5, 6);
  (0, 2), (3, 5), (4, 6);
  (2, 6), (1, 5), (0, 4);
  (2, 5), (0, 3);
  (2, 4), (1, 3);
  (0, 1), (2, 3), (4, 5);
]);

const NETWORK_8: Network = network!(depth: 6, [
  (0, 2), (1, 3), (4, 6), (5, 7);
  (0, 4), (1, 5), (2, 6), (3, 7);
  (0, 1), (2, 3), (4, 5), (6, 7);
  (2, 4), (3, 5);
  (1, 4), (3, 6);
  (1, 2), (3, 4), (5, 6);
]);

// Every entry must stay in range and carry the depth its comparators imply.
const _: () = {
  let mut n = 0;
  while n <= MAX_SUPPORTED_LEN {
    let network = network_for(n);
    assert!(network.is_well_formed(n));
    assert!(network.compute_depth() == network.depth());
    n += 1;
  }
};

/// Returns the network for `n` elements.
///
/// Zero and one element map to [`Network::EMPTY`].
///
/// # Panics
///
/// Panics when `n` exceeds [`MAX_SUPPORTED_LEN`]. In a const context this is
/// a compile error; use [`lookup`] for lengths only known at run time.
pub const fn network_for(n: usize) -> &'static Network {
  match n {
    0 | 1 => &Network::EMPTY,
    2 => &NETWORK_2,
    3 => &NETWORK_3,
    4 => &NETWORK_4,
    5 => &NETWORK_5,
    6 => &NETWORK_6,
    7 => &NETWORK_7,
    8 => &NETWORK_8,
    _ => panic!("sorting networks are only tabulated for up to 8 elements"),
  }
}

/// Fallible form of [`network_for`].
pub fn lookup(n: usize) -> Result<&'static Network> {
  if n > MAX_SUPPORTED_LEN {
    return Err(NetworkError::unsupported(n));
  }
  Ok(network_for(n))
}

pub const fn required_swap_count(n: usize) -> usize {
  network_for(n).swap_count()
}

pub const fn depth(n: usize) -> usize {
  network_for(n).depth()
}

/// Compile-time view of the network for `N` elements.
///
/// Naming any of the associated constants with `N > MAX_SUPPORTED_LEN` fails
/// to compile.
///
/// ```
/// use osn::catalog::NetworkTraits;
///
/// assert_eq!(NetworkTraits::<8>::REQUIRED_SWAP_COUNT, 19);
/// assert_eq!(NetworkTraits::<8>::DEPTH, 6);
/// ```
///
/// ```compile_fail
/// let _ = osn::catalog::NetworkTraits::<9>::DEPTH;
/// ```
pub struct NetworkTraits<const N: usize>;

impl<const N: usize> NetworkTraits<N> {
  pub const NETWORK: &'static Network = {
    assert!(
      N <= MAX_SUPPORTED_LEN,
      "sorting networks are only tabulated for up to 8 elements"
    );
    network_for(N)
  };
  pub const REQUIRED_SWAP_COUNT: usize = Self::NETWORK.swap_count();
  pub const DEPTH: usize = Self::NETWORK.depth();
}
