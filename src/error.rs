//! Errors for the lookup and wide-integer helpers.
//!
//! Encoding itself never fails.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fp16Error {
    #[error("Unknown format name: {0:?} (expected \"fp16a\" or \"fp16b\")")]
    UnknownFormatName(String),

    #[error("Unknown hardware format code: {0}")]
    UnknownFormatCode(u32),

    #[error("Raw value {value} does not fit in 32 bits")]
    RawOutOfRange { value: i128 },
}

pub type Result<T> = std::result::Result<T, Fp16Error>;
