// RSA Decryption
// Raw textbook decryption: m = c^d mod n

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::keygen::RsaPrivateKey;

/// Decrypt a single integer: m = c^d mod n
pub fn decrypt_int(key: &RsaPrivateKey, c: &BigUint) -> BigUint {
    c.modpow(&key.d, &key.n)
}

/// Decrypt a message produced by `encrypt_message`.
///
/// Each decrypted value is reduced mod 256 before being mapped back to a
/// character. The truncation is a deliberate, lossy part of the text codec:
/// code points >= 256 round-trip through `decrypt_int` but not through this
/// reconstruction.
pub fn decrypt_message(key: &RsaPrivateKey, ciphertext: &[BigUint]) -> String {
    let byte_mod = BigUint::from(256u32);
    ciphertext
        .iter()
        .map(|c| {
            let byte = (decrypt_int(key, c) % &byte_mod).to_u8().unwrap_or(0);
            byte as char
        })
        .collect()
}
