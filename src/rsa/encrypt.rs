// RSA Encryption
// Raw textbook encryption: c = m^e mod n, no padding

use num_bigint::BigUint;

use super::keygen::RsaPublicKey;

/// Encrypt a single integer: c = m^e mod n.
///
/// Textbook RSA: the caller must keep m in [0, n). Out-of-range values are
/// silently reduced by the modulus and will not round-trip. With no
/// randomized padding, equal plaintexts always map to equal ciphertexts.
pub fn encrypt_int(key: &RsaPublicKey, m: &BigUint) -> BigUint {
    m.modpow(&key.e, &key.n)
}

/// Encrypt a message one character at a time
/// Each char contributes its Unicode code point as a plaintext integer
pub fn encrypt_message(key: &RsaPublicKey, text: &str) -> Vec<BigUint> {
    text.chars()
        .map(|ch| encrypt_int(key, &BigUint::from(ch as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::keygen::derive_keypair;

    fn reference_key() -> RsaPublicKey {
        derive_keypair(
            &BigUint::from(61u32),
            &BigUint::from(53u32),
            &BigUint::from(17u32),
        )
        .unwrap()
        .public_key
    }

    #[test]
    fn test_encrypt_reference_vector() {
        // 65^17 mod 3233 = 2790
        let key = reference_key();
        let c = encrypt_int(&key, &BigUint::from(65u32));
        assert_eq!(c, BigUint::from(2790u32));
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let key = reference_key();
        let m = BigUint::from(1234u32);
        assert_eq!(encrypt_int(&key, &m), encrypt_int(&key, &m));
    }

    #[test]
    fn test_encrypt_message_per_char() {
        let key = reference_key();
        let blocks = encrypt_message(&key, "AB");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], encrypt_int(&key, &BigUint::from(65u32)));
        assert_eq!(blocks[1], encrypt_int(&key, &BigUint::from(66u32)));
    }
}
