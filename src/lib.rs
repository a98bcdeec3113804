//! Tagged 16-bit scalars for the SFPU load-immediate path.
//!
//! A 32-bit float is narrowed to one of two 16-bit layouts:
//!
//! * **fp16a**: IEEE half-style (5 exponent bits, 10 mantissa bits), rounded,
//!   with denormals, saturating to `0x7FFF` on overflow.
//! * **fp16b**: the upper half of the f32 pattern (8 exponent bits, 7 mantissa
//!   bits), truncated.
//!
//! The result is stored together with its [`Format`] so it can be handed to
//! the hardware with the right load mode.

mod error;
pub mod hw_codes;
pub mod scalar_fp16;

pub use error::{Fp16Error, Result};
pub use scalar_fp16::{
    core::Format,
    encode::{fp32_to_fp16a, fp32_to_fp16a_branchless, fp32_to_fp16b},
    scalar::ScalarFP16,
    wrappers::{ScalarFP16a, ScalarFP16b},
};
