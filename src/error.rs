use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Input that cannot be treated as
  /// text, e.g. bytes that are not
  /// UTF-8.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// Malformed reference data or
  /// settings: replacement maps, word
  /// lists, pipeline steps, TOML.
  #[error("invalid config: {0}")]
  InvalidConfig(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error)
}

impl Error {
  pub fn invalid_input(
    msg: impl Into<String>
  ) -> Self {
    Error::InvalidInput(msg.into())
  }

  pub fn invalid_config(
    msg: impl Into<String>
  ) -> Self {
    Error::InvalidConfig(msg.into())
  }
}

pub type Result<T> =
  std::result::Result<T, Error>;

/// Decodes raw bytes into text. This
/// is the only place input can be
/// rejected; every operation over
/// `&str` always produces a result.
pub fn decode_text(
  bytes: Vec<u8>
) -> Result<String> {
  String::from_utf8(bytes).map_err(
    |err| {
      Error::invalid_input(format!(
        "expected UTF-8 text, found \
         invalid byte sequence at \
         offset {}",
        err.utf8_error().valid_up_to()
      ))
    }
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_accepts_utf8() {
    let text = decode_text(
      "héllo".as_bytes().to_vec()
    )
    .expect("valid utf-8");
    assert_eq!(text, "héllo");
  }

  #[test]
  fn decode_rejects_invalid_bytes() {
    let err = decode_text(vec![
      b'o', b'k', 0xff, 0xfe,
    ])
    .unwrap_err();
    match err {
      | Error::InvalidInput(msg) => {
        assert!(msg.contains("offset 2"))
      }
      | other => {
        panic!("unexpected {other:?}")
      }
    }
  }
}
