//! f32 -> 16-bit encoders.
//!
//! Both return the pattern in the low 16 bits of a `u32`; the upper bits are
//! always zero.

/// Half an fp16a ulp, in f32 mantissa units (13 bits are dropped).
const ROUND_BIAS: u32 = 0x0000_1000;

const SIGN_MASK: u32 = 0x8000_0000;
const MANT_MASK: u32 = 0x007F_FFFF;

/// Largest biased f32 exponent (after rounding) that is a normal fp16a.
const NORMAL_MAX_EXP: u32 = 143;
/// Largest biased f32 exponent that is below the fp16a normal range.
const DENORM_MAX_EXP: u32 = 112;
/// Largest biased f32 exponent that flushes to zero.
const UNDERFLOW_MAX_EXP: u32 = 101;

/// fp16a overflow pattern. This is not the IEEE half infinity (`0x7C00`).
const SATURATED: u32 = 0x7FFF;

/// Narrow `val` to fp16a: IEEE half layout, round-half-up on the dropped
/// mantissa bits, denormals, overflow saturating to `0x7FFF`.
///
/// The rounding bias is added to the raw f32 pattern before the fields are
/// split, so a carry out of the mantissa bumps the exponent. The add wraps:
/// NaN patterns at the very top of the `u32` range come out as zero (or
/// negative zero for `0x7FFF_F000..=0x7FFF_FFFF`).
#[inline]
pub fn fp32_to_fp16a(val: f32) -> u32 {
    let b = val.to_bits().wrapping_add(ROUND_BIAS);
    let e = (b >> 23) & 0xFF;
    let m = b & MANT_MASK;
    let sign = (b & SIGN_MASK) >> 16;

    let magnitude = if e > NORMAL_MAX_EXP {
        SATURATED
    } else if e > DENORM_MAX_EXP {
        (((e - DENORM_MAX_EXP) << 10) & 0x7C00) | (m >> 13)
    } else if e > UNDERFLOW_MAX_EXP {
        // put the implicit bit back, shift into place, round once more
        (((0x007F_F000 + m) >> (125 - e)) + 1) >> 1
    } else {
        0
    };

    sign | magnitude
}

/// Same result as [`fp32_to_fp16a`] for every input, written as a sum of
/// masked terms instead of branches.
///
/// Terms that are switched off may be computed from out-of-range shift
/// amounts, hence the wrapping ops.
#[inline]
pub fn fp32_to_fp16a_branchless(val: f32) -> u32 {
    let b = val.to_bits().wrapping_add(ROUND_BIAS);
    let e = (b & 0x7F80_0000) >> 23;
    let m = b & MANT_MASK;

    let normal = (e > DENORM_MAX_EXP) as u32;
    let denorm = ((e <= DENORM_MAX_EXP) & (e > UNDERFLOW_MAX_EXP)) as u32;
    let overflow = (e > NORMAL_MAX_EXP) as u32;

    (b & SIGN_MASK) >> 16
        | normal * (((e.wrapping_sub(DENORM_MAX_EXP) << 10) & 0x7C00) | m >> 13)
        | denorm * ((((0x007F_F000 + m).wrapping_shr(125u32.wrapping_sub(e))) + 1) >> 1)
        | overflow * SATURATED
}

/// Narrow `val` to fp16b: the upper 16 bits of the f32 pattern, truncated.
#[inline]
pub fn fp32_to_fp16b(val: f32) -> u32 {
    val.to_bits() >> 16
}
