//! Fixed-length digit strings over radices 2 through 36.
//!
//! A [`DigitString`] is the value type the cipher operates on: a sequence of
//! digits from the alphabet `0-9a-z`, carrying its radix, its length, and its
//! numeric value. Leading zeros are significant for length but not for value;
//! two digit strings are equal when their `(radix, length, value)` triples
//! are equal. Textual input is accepted case-insensitively, canonical output
//! is lowercase.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::common::Error;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (digits `0-9` then `a-z`).
pub const MAX_RADIX: u32 = 36;

/// radix^exp as a big integer.
pub(crate) fn radix_pow(radix: u32, exp: usize) -> BigUint {
    BigUint::from(radix).pow(exp as u32)
}

/// Number of bytes needed to hold any value below radix^digits.
///
/// Exact computation via the bit length of radix^digits - 1; equivalent to
/// ceil(ceil(digits * log2(radix)) / 8) without floating point.
pub(crate) fn byte_length(radix: u32, digits: usize) -> usize {
    (radix_pow(radix, digits) - 1u32).bits().div_ceil(8) as usize
}

fn check_radix(radix: u32) -> Result<(), Error> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidRadix)
    }
}

fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0')),
        b'a'..=b'z' => Some(u32::from(byte - b'a') + 10),
        b'A'..=b'Z' => Some(u32::from(byte - b'A') + 10),
        _ => None,
    }
}

/// An immutable digit string with a fixed radix and length.
///
/// Arithmetic never mutates; every operation returns a new value. The text
/// supplied at construction is retained verbatim (it is the wire form when a
/// digit string serves as a tweak), while [`to_text`](DigitString::to_text)
/// always renders the canonical lowercase form.
#[derive(Clone, Debug)]
pub struct DigitString {
    radix: u32,
    text: String,
    value: BigUint,
}

impl DigitString {
    /// Parse a digit string; the length is the character count of `text`.
    ///
    /// # Errors
    /// `InvalidRadix` for a radix outside [2, 36]; `InvalidDigit` for a
    /// character outside the alphabet or >= the radix.
    pub fn from_text(text: &str, radix: u32) -> Result<Self, Error> {
        check_radix(radix)?;

        let mut value = BigUint::zero();
        for &byte in text.as_bytes() {
            let digit = digit_value(byte)
                .filter(|&d| d < radix)
                .ok_or(Error::InvalidDigit)?;
            value = value * radix + digit;
        }

        Ok(Self {
            radix,
            text: text.to_owned(),
            value,
        })
    }

    /// Parse a digit string and left-zero-pad it to `blocksize` digits.
    ///
    /// # Errors
    /// As [`from_text`](DigitString::from_text), plus `InvalidBlocksize` when
    /// `blocksize` is shorter than the supplied text.
    pub fn from_text_padded(text: &str, radix: u32, blocksize: usize) -> Result<Self, Error> {
        if blocksize < text.len() {
            return Err(Error::InvalidBlocksize);
        }
        let parsed = Self::from_text(text, radix)?;
        let mut padded = "0".repeat(blocksize - text.len());
        padded.push_str(&parsed.text);
        Ok(Self {
            text: padded,
            ..parsed
        })
    }

    /// Build a digit string of exactly `length` digits from a numeric value.
    ///
    /// # Errors
    /// `InvalidRadix` for a radix outside [2, 36]; `ValueOutOfRange` when
    /// `value >= radix^length`.
    pub fn from_value(value: BigUint, radix: u32, length: usize) -> Result<Self, Error> {
        check_radix(radix)?;
        if value >= radix_pow(radix, length) {
            return Err(Error::ValueOutOfRange);
        }

        let text = if value.is_zero() {
            "0".repeat(length)
        } else {
            let digits = value.to_str_radix(radix);
            let mut text = "0".repeat(length - digits.len());
            text.push_str(&digits);
            text
        };

        Ok(Self { radix, text, value })
    }

    /// The radix this digit string is expressed in.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Number of digits, leading zeros included.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the digit string has zero digits.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The underlying nonnegative integer.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Textual form as supplied by the caller, case preserved.
    pub(crate) fn text_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Canonical textual form: lowercase, zero-padded to the full length.
    pub fn to_text(&self) -> String {
        self.text.to_ascii_lowercase()
    }

    /// Big-endian byte form at the natural width for this radix and length,
    /// ceil(length * log2(radix) / 8) bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes_be(byte_length(self.radix, self.len()))
    }

    /// Big-endian byte form of exactly `n` bytes, left-zero-padded.
    ///
    /// # Errors
    /// `InvalidByteLength` when the numeric value does not fit in `n` bytes.
    pub fn to_bytes_padded(&self, n: usize) -> Result<Vec<u8>, Error> {
        if self.value.bits().div_ceil(8) as usize > n {
            return Err(Error::InvalidByteLength);
        }
        Ok(self.bytes_be(n))
    }

    fn bytes_be(&self, width: usize) -> Vec<u8> {
        let mut out = vec![0u8; width];
        if !self.value.is_zero() {
            let raw = self.value.to_bytes_be();
            out[width - raw.len()..].copy_from_slice(&raw);
        }
        out
    }

    /// `(self + other) mod radix^m` as a new digit string of length `m`.
    ///
    /// # Errors
    /// `RadixMismatch` when the operands disagree on the radix.
    pub fn add_mod(&self, other: &DigitString, m: usize) -> Result<DigitString, Error> {
        if self.radix != other.radix {
            return Err(Error::RadixMismatch);
        }
        let modulus = radix_pow(self.radix, m);
        let sum = (&self.value + &other.value) % &modulus;
        Self::from_value(sum, self.radix, m)
    }

    /// `(self - other) mod radix^m` as a new digit string of length `m`.
    ///
    /// # Errors
    /// `RadixMismatch` when the operands disagree on the radix.
    pub fn sub_mod(&self, other: &DigitString, m: usize) -> Result<DigitString, Error> {
        if self.radix != other.radix {
            return Err(Error::RadixMismatch);
        }
        let modulus = radix_pow(self.radix, m);
        let lhs = &self.value % &modulus;
        let rhs = &other.value % &modulus;
        let diff = (lhs + &modulus - rhs) % &modulus;
        Self::from_value(diff, self.radix, m)
    }

    /// Join two digit strings: the result has length `lhs.len() + rhs.len()`
    /// and value `lhs * radix^rhs.len() + rhs`.
    ///
    /// # Errors
    /// `RadixMismatch` when the operands disagree on the radix.
    pub fn concat(lhs: &DigitString, rhs: &DigitString) -> Result<DigitString, Error> {
        if lhs.radix != rhs.radix {
            return Err(Error::RadixMismatch);
        }
        let value = &lhs.value * radix_pow(lhs.radix, rhs.len()) + &rhs.value;
        let mut text = lhs.text.clone();
        text.push_str(&rhs.text);
        Ok(DigitString {
            radix: lhs.radix,
            text,
            value,
        })
    }

    /// Split at digit position `k` into a length-`k` left part and a
    /// length-`len - k` right part; `concat` of the parts restores `self`.
    ///
    /// # Errors
    /// `InvalidArgument` when `k` exceeds the length.
    pub fn split(&self, k: usize) -> Result<(DigitString, DigitString), Error> {
        if k > self.len() {
            return Err(Error::InvalidArgument);
        }
        let (left, right) = self.text.split_at(k);
        Ok((
            Self::from_text(left, self.radix)?,
            Self::from_text(right, self.radix)?,
        ))
    }
}

impl PartialEq for DigitString {
    fn eq(&self, other: &Self) -> bool {
        self.radix == other.radix && self.len() == other.len() && self.value == other.value
    }
}

impl Eq for DigitString {}

impl core::fmt::Display for DigitString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_text())
    }
}
