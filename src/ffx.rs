//! FFX-A2 format-preserving encryption over AES-128.
//!
//! FFX encrypts a digit string into a ciphertext over the same alphabet and
//! length: a 16-digit decimal number stays a 16-digit decimal number. The
//! construction is a 10-round maximally balanced Feistel network whose round
//! function projects the tweak, round index, and right half through an
//! AES-CBC-MAC and reduces the result modulo radix^m.
//!
//! Use cases:
//! - Encrypting payment card numbers (decimal)
//! - Encrypting identifiers that must keep their shape (radix up to 36)
//! - Database fields with strict format constraints
//!
//! Security properties:
//! - Ciphertext radix and length equal the plaintext's
//! - The tweak is public associated data that varies the permutation
//! - No authentication - pair with a MAC if integrity protection is needed
//! - Message domains smaller than 100 elements are rejected

use aes::cipher::{generic_array::GenericArray, KeyInit};
use aes::Aes128;
use num_bigint::BigUint;

use crate::common::{cbc_mac, counter_expand, Error, BLOCK_LENGTH};
use crate::digits::{byte_length, radix_pow, DigitString, MAX_RADIX, MIN_RADIX};

/// FFX-A2 encrypter binding an AES-128 key and a radix.
///
/// Immutable once constructed; a single instance may serve concurrent
/// `encrypt` and `decrypt` calls, with all per-call state on the stack.
pub struct Ffx {
    cipher: Aes128,
    radix: u32,
}

impl Ffx {
    /// AES-128 key length in bytes.
    pub const KEY_LENGTH: usize = 16;

    /// Number of Feistel rounds, fixed by the A2 parameter collection.
    pub const NUM_ROUNDS: usize = 10;

    /// Longest supported message, in digits (the split point must fit its
    /// single header byte).
    pub const MAX_MESSAGE_LENGTH: usize = 255;

    /// Longest supported tweak, in digits (must fit the 4-byte header field).
    pub const MAX_TWEAK_LENGTH: usize = u32::MAX as usize;

    /// Create an encrypter for the given key and radix.
    ///
    /// # Errors
    /// `InvalidKeyLength` unless the key is exactly 16 bytes; `InvalidRadix`
    /// unless `2 <= radix <= 36`.
    pub fn new(key: &[u8], radix: u32) -> Result<Self, Error> {
        if key.len() != Self::KEY_LENGTH {
            return Err(Error::InvalidKeyLength);
        }
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::InvalidRadix);
        }
        let cipher = Aes128::new(GenericArray::from_slice(key));
        Ok(Self { cipher, radix })
    }

    /// Encrypt `plaintext` under `tweak`.
    ///
    /// The result has the same radix and length as the plaintext. Encryption
    /// with a fixed key and tweak is a permutation of the n-digit domain.
    ///
    /// # Errors
    /// `InvalidArgument` when the tweak or message radix disagrees with the
    /// encrypter, or the message or tweak exceeds its length limit;
    /// `DomainTooSmall` when `radix^n < 100`.
    pub fn encrypt(
        &self,
        tweak: &DigitString,
        plaintext: &DigitString,
    ) -> Result<DigitString, Error> {
        self.check_args(tweak, plaintext)?;

        let n = plaintext.len();
        let l = n / 2;
        let (mut a, mut b) = plaintext.split(l)?;

        for i in 0..Self::NUM_ROUNDS {
            let m = if i % 2 == 0 { l } else { n - l };
            let f = self.round_output(tweak, n, i, &b)?;
            let c = a.add_mod(&f, m)?;
            a = b;
            b = c;
        }

        DigitString::concat(&a, &b)
    }

    /// Decrypt `ciphertext` under `tweak`, inverting [`encrypt`](Ffx::encrypt).
    ///
    /// # Errors
    /// Same conditions as [`encrypt`](Ffx::encrypt).
    pub fn decrypt(
        &self,
        tweak: &DigitString,
        ciphertext: &DigitString,
    ) -> Result<DigitString, Error> {
        self.check_args(tweak, ciphertext)?;

        let n = ciphertext.len();
        let l = n / 2;
        let (mut a, mut b) = ciphertext.split(l)?;

        for i in (0..Self::NUM_ROUNDS).rev() {
            let m = if i % 2 == 0 { l } else { n - l };
            let c = b;
            b = a;
            let f = self.round_output(tweak, n, i, &b)?;
            a = c.sub_mod(&f, m)?;
        }

        DigitString::concat(&a, &b)
    }

    fn check_args(&self, tweak: &DigitString, msg: &DigitString) -> Result<(), Error> {
        if tweak.radix() != self.radix || msg.radix() != self.radix {
            return Err(Error::InvalidArgument);
        }
        if msg.len() > Self::MAX_MESSAGE_LENGTH || tweak.len() > Self::MAX_TWEAK_LENGTH {
            return Err(Error::InvalidArgument);
        }
        if radix_pow(self.radix, msg.len()) < BigUint::from(100u32) {
            return Err(Error::DomainTooSmall);
        }
        Ok(())
    }

    /// The Feistel round function F: an m-digit string derived from the
    /// tweak, the round index, and the incoming right half.
    ///
    /// Framing follows the A2 sample vectors exactly. `P` is one 16-byte
    /// header block, fixed across the rounds of a call; `Q` is the tweak's
    /// ASCII text, zero padding to a block boundary, the round index byte,
    /// and the right half's value in exactly `b_width` big-endian bytes,
    /// where `b_width` covers the larger half regardless of round parity.
    fn round_output(
        &self,
        tweak: &DigitString,
        n: usize,
        i: usize,
        b: &DigitString,
    ) -> Result<DigitString, Error> {
        let t = tweak.len();
        let beta = n.div_ceil(2);
        let b_width = byte_length(self.radix, beta);
        let d = 4 * b_width.div_ceil(4);
        let m = if i % 2 == 0 { n / 2 } else { beta };

        let mut p = [0u8; BLOCK_LENGTH];
        p[0] = 1; // version
        p[1] = 2; // method: modular addition
        p[2] = 1; // addition variant, per A2
        p[3..6].copy_from_slice(&self.radix.to_be_bytes()[1..]);
        p[6] = Self::NUM_ROUNDS as u8;
        p[7] = (n / 2) as u8;
        p[8..12].copy_from_slice(&(n as u32).to_be_bytes());
        p[12..16].copy_from_slice(&(t as u32).to_be_bytes());

        let pad = (t + b_width + 1).wrapping_neg() % BLOCK_LENGTH;
        let mut msg = Vec::with_capacity(BLOCK_LENGTH + t + pad + 1 + b_width);
        msg.extend_from_slice(&p);
        msg.extend_from_slice(tweak.text_bytes());
        msg.resize(msg.len() + pad, 0);
        msg.push(i as u8);
        msg.extend_from_slice(&b.to_bytes_padded(b_width)?);

        let tag = cbc_mac(&self.cipher, &msg);
        let stream = counter_expand(&self.cipher, &tag, d + 4);

        let z = BigUint::from_bytes_be(&stream) % radix_pow(self.radix, m);
        DigitString::from_value(z, self.radix, m)
    }
}
