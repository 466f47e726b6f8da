use thiserror::Error;

use crate::catalog::MAX_SUPPORTED_LEN;

pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NetworkError {
  #[error("no sorting network for {len} elements, supported lengths are 0..={max}")]
  UnsupportedLength { len: usize, max: usize },
}

impl NetworkError {
  pub(crate) const fn unsupported(len: usize) -> Self {
    Self::UnsupportedLength {
      len,
      max: MAX_SUPPORTED_LEN,
    }
  }
}
