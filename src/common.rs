//! Shared error type and AES block primitives used by the FFX construction.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt};
use aes::Aes128;

/// Unified error type for all digit-string and cipher operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Radix is outside the supported range [2, 36].
    InvalidRadix,
    /// Key is not exactly 16 bytes.
    InvalidKeyLength,
    /// A digit lies outside the alphabet or is >= the radix.
    InvalidDigit,
    /// Declared length is shorter than the supplied content.
    InvalidBlocksize,
    /// Numeric value does not fit in the declared length.
    ValueOutOfRange,
    /// Arithmetic or concatenation mixes digit strings of different radices.
    RadixMismatch,
    /// The message domain has fewer than 100 elements.
    DomainTooSmall,
    /// Tweak or message disagrees with the encrypter parameters.
    InvalidArgument,
    /// Requested byte length is too small for the value.
    InvalidByteLength,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidRadix => write!(f, "radix must be between 2 and 36"),
            Error::InvalidKeyLength => write!(f, "key must be exactly 16 bytes"),
            Error::InvalidDigit => write!(f, "digit out of range for radix"),
            Error::InvalidBlocksize => write!(f, "declared length shorter than content"),
            Error::ValueOutOfRange => write!(f, "value does not fit in the declared length"),
            Error::RadixMismatch => write!(f, "digit strings have different radices"),
            Error::DomainTooSmall => write!(f, "message domain smaller than 100"),
            Error::InvalidArgument => write!(f, "tweak or message does not match encrypter"),
            Error::InvalidByteLength => write!(f, "requested byte length too small for value"),
        }
    }
}

impl std::error::Error for Error {}

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// CBC-MAC over a byte sequence whose length is a positive multiple of 16.
///
/// Computes `Y_0 = AES_K(X_0)`, `Y_i = AES_K(X_i XOR Y_{i-1})` and returns the
/// final block. Callers guarantee the length precondition; no padding is
/// applied.
pub fn cbc_mac(cipher: &Aes128, msg: &[u8]) -> [u8; BLOCK_LENGTH] {
    debug_assert!(!msg.is_empty());
    debug_assert_eq!(msg.len() % BLOCK_LENGTH, 0);

    let mut y = [0u8; BLOCK_LENGTH];
    for chunk in msg.chunks_exact(BLOCK_LENGTH) {
        for (acc, byte) in y.iter_mut().zip(chunk) {
            *acc ^= byte;
        }
        let mut block = GenericArray::clone_from_slice(&y);
        cipher.encrypt_block(&mut block);
        y.copy_from_slice(block.as_slice());
    }
    y
}

/// Expand a 16-byte CBC-MAC tag to `len` bytes of keyed output.
///
/// The tag itself forms the first block; block `j >= 1` is
/// `AES_K(tag XOR [j])` with `j` encoded as 16 bytes big-endian. The result
/// is truncated to `len`.
pub fn counter_expand(cipher: &Aes128, tag: &[u8; BLOCK_LENGTH], len: usize) -> Vec<u8> {
    let mut out = tag.to_vec();
    let mut counter: u64 = 1;

    while out.len() < len {
        let mut block = *tag;
        for (byte, ctr) in block[8..].iter_mut().zip(counter.to_be_bytes()) {
            *byte ^= ctr;
        }
        let mut block = GenericArray::clone_from_slice(&block);
        cipher.encrypt_block(&mut block);
        out.extend_from_slice(block.as_slice());
        counter += 1;
    }

    out.truncate(len);
    out
}
