//! Comparator and network data types.
//!
//! A [`Network`] is plain `'static` data: an ordered list of [`Comparator`]s
//! and the depth of the circuit they form. Execution order is always the
//! listed order; the depth only describes how many layers the same circuit
//! would need if independent comparators ran in parallel.

use std::fmt;

use crate::catalog::MAX_SUPPORTED_LEN;

/// Compare positions `left` and `right`, exchanging them when the element at
/// `right` is less than the element at `left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparator {
  pub left:  usize,
  pub right: usize,
}

impl Comparator {
  #[inline]
  pub const fn new(left: usize, right: usize) -> Self {
    Self { left, right }
  }

  /// Whether both positions lie in `0..n` and are distinct, with `left`
  /// before `right`.
  #[inline]
  pub const fn is_valid_for(&self, n: usize) -> bool {
    self.left < self.right && self.right < n
  }
}

impl fmt::Display for Comparator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({},{})", self.left, self.right)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
  comparators: &'static [Comparator],
  depth:       usize,
}

impl Network {
  /// The network for zero or one element.
  pub const EMPTY: Network = Network::new(&[], 0);

  pub const fn new(comparators: &'static [Comparator], depth: usize) -> Self {
    Self { comparators, depth }
  }

  #[inline]
  pub const fn comparators(&self) -> &'static [Comparator] {
    self.comparators
  }

  /// Number of compare-exchange operations a run performs.
  #[inline]
  pub const fn swap_count(&self) -> usize {
    self.comparators.len()
  }

  #[inline]
  pub const fn depth(&self) -> usize {
    self.depth
  }

  /// Checks that every comparator addresses two distinct positions in `0..n`.
  pub const fn is_well_formed(&self, n: usize) -> bool {
    if n > MAX_SUPPORTED_LEN {
      return false;
    }
    let mut i = 0;
    while i < self.comparators.len() {
      if !self.comparators[i].is_valid_for(n) {
        return false;
      }
      i += 1;
    }
    true
  }

  /// Depth obtained by greedily placing each comparator in the first layer
  /// after the last one touching either of its positions.
  ///
  /// Only meaningful for well-formed networks of up to
  /// [`MAX_SUPPORTED_LEN`] elements.
  pub const fn compute_depth(&self) -> usize {
    let mut layer = [0usize; MAX_SUPPORTED_LEN];
    let mut depth = 0;
    let mut i = 0;
    while i < self.comparators.len() {
      let Comparator { left, right } = self.comparators[i];
      let next = if layer[left] > layer[right] {
        layer[left] + 1
      } else {
        layer[right] + 1
      };
      layer[left] = next;
      layer[right] = next;
      if next > depth {
        depth = next;
      }
      i += 1;
    }
    depth
  }
}

impl fmt::Display for Network {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, comparator) in self.comparators.iter().enumerate() {
      if i > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{comparator}")?;
    }
    f.write_str("]")
  }
}
