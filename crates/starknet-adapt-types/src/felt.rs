use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};

use crate::error::{AdaptResult, ConversionError};

lazy_static! {
    /// The Starknet field prime: 2^251 + 17 * 2^192 + 1.
    pub static ref FIELD_PRIME: BigInt =
        (BigInt::from(1_u8) << 251) + (BigInt::from(17_u8) << 192) + 1;
    static ref U128_MASK: BigUint = (BigUint::from(1_u8) << 128_u32) - 1_u8;
    static ref U256_CEILING: BigUint = BigUint::from(1_u8) << 256_u32;
}

/// `true` iff `text` spells an integer: optionally negative decimal, or
/// `0x`-prefixed hex.
pub fn is_numeric_string(text: &str) -> bool {
    parse_big_int(text).is_ok()
}

/// Parses a decimal (optionally negative) or `0x`-prefixed hex string.
pub fn parse_big_int(text: &str) -> AdaptResult<BigInt, ConversionError> {
    let invalid = || ConversionError::InvalidFormat(text.into());

    if let Some(hex_digits) = text.strip_prefix("0x") {
        if hex_digits.is_empty() || !hex_digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        return BigInt::parse_bytes(hex_digits.as_bytes(), 16).ok_or_else(invalid);
    }

    let decimal_digits = text.strip_prefix('-').unwrap_or(text);
    if decimal_digits.is_empty() || !decimal_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    BigInt::parse_bytes(text.as_bytes(), 10).ok_or_else(invalid)
}

/// Reduces `value` into the field and renders the canonical non-negative
/// residue as a decimal string. The second modulo keeps negative inputs in
/// `[0, P)`.
pub fn to_field_element(value: &BigInt) -> String {
    let reduced = ((value % &*FIELD_PRIME) + &*FIELD_PRIME) % &*FIELD_PRIME;
    reduced.to_string()
}

/// Returns the (low, high) 128-bit halves of a u256 value, in wire order.
pub fn split_u256(value: &BigUint) -> AdaptResult<(BigUint, BigUint), ConversionError> {
    if *value >= *U256_CEILING {
        return Err(ConversionError::OutOfRangeError(value.to_string()));
    }
    let low = value & &*U128_MASK;
    let high = value >> 128_u32;
    Ok((low, high))
}

/// Rebuilds a u256 value from its (low, high) wire halves.
pub fn join_u256(low: &BigUint, high: &BigUint) -> AdaptResult<BigUint, ConversionError> {
    if low.bits() > 128 {
        return Err(ConversionError::OutOfRangeError(low.to_string()));
    }
    if high.bits() > 128 {
        return Err(ConversionError::OutOfRangeError(high.to_string()));
    }
    Ok((high << 128_u32) | low)
}
