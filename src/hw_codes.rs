//! Load-mode codes of the SFPU `SFPLOADI` instruction.
//!
//! These come from the hardware description and are only carried around as
//! tags; nothing in this crate interprets their numeric value.

/// Immediate is an fp16b (bfloat16-style) pattern.
pub const SFPLOADI_MOD0_FLOATB: u32 = 0;

/// Immediate is an fp16a (IEEE half-style) pattern.
pub const SFPLOADI_MOD0_FLOATA: u32 = 1;
