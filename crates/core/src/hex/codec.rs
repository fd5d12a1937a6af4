use crate::error::HexError;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// A single 64-bit key identifying a hexagon within a grid. Produced by
/// [Morton64::pack] (via [Hexagon::code](crate::Hexagon::code)) and turned
/// back into a hexagon with [Grid::hexagon_from_code](crate::Grid::hexagon_from_code).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{:#018x}", "self.0")]
pub struct HexCode(pub u64);

/// Packs an axial coordinate pair into a single [HexCode] by bit-interleaving
/// (Morton/Z-order), and unpacks it again.
///
/// ## Layout
///
/// Each axis must fit in an `i32`, i.e. **the supported range per axis is
/// `[-2^31, 2^31 - 1]`.** Within that range `pack` and `unpack` are an exact
/// round trip, and distinct pairs never share a code. Inputs outside the
/// range are rejected with [HexError::CoordinateOutOfRange], never wrapped.
///
/// Before interleaving, each axis is converted to offset binary (its sign bit
/// flipped), so that for a fixed `r`, codes increase with `q` and vice versa.
/// Bit `i` of `q` lands on bit `2i` of the code, and bit `i` of `r` on bit
/// `2i + 1`. Every `u64` is a valid code, so `unpack` can't fail.
///
/// The codec is stateless; every instance behaves identically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Morton64;

impl Morton64 {
    /// Smallest value either axis can take
    pub const MIN: i64 = i32::MIN as i64;
    /// Largest value either axis can take
    pub const MAX: i64 = i32::MAX as i64;

    const SIGN_BIT: u32 = 1 << 31;

    /// Can this pair be packed? True iff both axes are within
    /// `[MIN, MAX]`.
    pub fn in_range(&self, q: i64, r: i64) -> bool {
        (Self::MIN..=Self::MAX).contains(&q)
            && (Self::MIN..=Self::MAX).contains(&r)
    }

    pub fn pack(&self, q: i64, r: i64) -> Result<HexCode, HexError> {
        match (i32::try_from(q), i32::try_from(r)) {
            (Ok(q32), Ok(r32)) => {
                let q_bits = spread(q32 as u32 ^ Self::SIGN_BIT);
                let r_bits = spread(r32 as u32 ^ Self::SIGN_BIT);
                Ok(HexCode(q_bits | (r_bits << 1)))
            }
            _ => Err(HexError::CoordinateOutOfRange { q, r }),
        }
    }

    pub fn unpack(&self, code: HexCode) -> (i64, i64) {
        let q = (compact(code.0) ^ Self::SIGN_BIT) as i32;
        let r = (compact(code.0 >> 1) ^ Self::SIGN_BIT) as i32;
        (q.into(), r.into())
    }
}

/// Spread the 32 bits of the input across the even bits of a `u64`
fn spread(value: u32) -> u64 {
    let mut x = u64::from(value);
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Inverse of [spread]: gather the even bits of the input into a `u32`. Odd
/// bits are ignored.
fn compact(value: u64) -> u32 {
    let mut x = value & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}
