//! Validation against the published AES-FFX sample vectors, plus fixed-value
//! regression vectors at the PRF output-expansion boundary.
//!
//! Every vector exercises both directions: the listed ciphertext must come
//! out of `encrypt` exactly, and feed back through `decrypt` to the original
//! plaintext.

#[cfg(test)]
mod tests {
    use crate::{DigitString, Ffx};
    use hex_literal::hex;

    const KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");

    fn digits(text: &str, radix: u32) -> DigitString {
        DigitString::from_text(text, radix).unwrap()
    }

    fn check_vector(radix: u32, tweak: &str, plaintext: &str, expected: &str) {
        let ffx = Ffx::new(&KEY, radix).unwrap();
        let tweak = digits(tweak, radix);
        let plaintext = digits(plaintext, radix);

        let ciphertext = ffx.encrypt(&tweak, &plaintext).unwrap();
        assert_eq!(ciphertext.to_text(), expected);

        let recovered = ffx.decrypt(&tweak, &digits(expected, radix)).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn vector_decimal_with_tweak() {
        check_vector(10, "9876543210", "0123456789", "6124200773");
    }

    #[test]
    fn vector_decimal_without_tweak() {
        check_vector(10, "", "0123456789", "2433477484");
    }

    #[test]
    fn vector_decimal_short_message() {
        check_vector(10, "2718281828", "314159", "535005");
    }

    #[test]
    fn vector_decimal_odd_length() {
        check_vector(10, "7777777", "999999999", "658229573");
    }

    #[test]
    fn vector_alphanumeric() {
        // The tweak's ASCII bytes enter the PRF in the caller's casing; the
        // published vector supplies it uppercase.
        check_vector(36, "TQF9J5QDAGSCSPB1", "C4XPWULBM3M863JH", "c8aq3u846zwh6qzp");
    }

    #[test]
    fn expansion_boundary_single_prf_block() {
        // 48 hex digits need exactly 16 bytes of PRF output, the last width
        // served by the tag alone.
        let ffx = Ffx::new(&[0u8; 16], 16).unwrap();
        let tweak = digits("", 16);
        let plaintext = digits(&"0".repeat(48), 16);

        let ciphertext = ffx.encrypt(&tweak, &plaintext).unwrap();
        assert_eq!(
            ciphertext.to_text(),
            "ddb77d3be91a8e255fca9389a3d48da2b4476919744febea"
        );
        assert_eq!(ffx.decrypt(&tweak, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn expansion_boundary_extended_prf_output() {
        // One digit more and the round function must extend the tag with
        // counter blocks.
        let ffx = Ffx::new(&[0u8; 16], 16).unwrap();
        let tweak = digits("", 16);
        let plaintext = digits(&"0".repeat(49), 16);

        let ciphertext = ffx.encrypt(&tweak, &plaintext).unwrap();
        assert_eq!(
            ciphertext.to_text(),
            "1f7b9459d22b2bee17d5b5616e03241467767c9dcbc424c21"
        );
        assert_eq!(ffx.decrypt(&tweak, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn tweak_presence_separates_ciphertexts() {
        let ffx = Ffx::new(&KEY, 10).unwrap();
        let plaintext = digits("0123456789", 10);

        let with_tweak = ffx.encrypt(&digits("9876543210", 10), &plaintext).unwrap();
        let without = ffx.encrypt(&digits("", 10), &plaintext).unwrap();

        assert_eq!(with_tweak.to_text(), "6124200773");
        assert_eq!(without.to_text(), "2433477484");
        assert_ne!(with_tweak, without);
    }

    #[test]
    fn scenario_payment_card_number() {
        let ffx = Ffx::new(&KEY, 10).unwrap();
        let merchant = digits("60492", 10);
        let pan = digits("4000123456789010", 10);

        let masked = ffx.encrypt(&merchant, &pan).unwrap();
        assert_eq!(masked.len(), 16);
        assert_eq!(masked.radix(), 10);
        assert_eq!(ffx.decrypt(&merchant, &masked).unwrap(), pan);
    }

    #[test]
    fn scenario_social_security_number() {
        let ffx = Ffx::new(&KEY, 10).unwrap();
        let record = digits("2026", 10);
        let ssn = digits("078051120", 10);

        let masked = ffx.encrypt(&record, &ssn).unwrap();
        assert_eq!(masked.len(), 9);
        assert_eq!(ffx.decrypt(&record, &masked).unwrap(), ssn);
    }

    #[test]
    fn scenario_license_plate() {
        let ffx = Ffx::new(&KEY, 36).unwrap();
        let region = digits("ca", 36);
        let plate = digits("7abc123", 36);

        let masked = ffx.encrypt(&region, &plate).unwrap();
        assert_eq!(masked.len(), 7);
        assert_eq!(masked.radix(), 36);
        assert_eq!(ffx.decrypt(&region, &masked).unwrap(), plate);
    }
}
